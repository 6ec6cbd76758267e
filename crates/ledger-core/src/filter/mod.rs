// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Declarative in-memory filtering for list views.
//!
//! Criteria are data ([`Filter`]), evaluated by [`apply_filters`] over a
//! borrowed slice. Predicates combine with AND; sorts cascade in list order.

mod eval;
mod form;

pub use eval::{apply_filters, search};
pub use form::{FilterForm, RangeBound};

use crate::record::FieldKey;

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Parse the filter panel's `asc` / `desc` values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// One predicate or ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOp {
    /// Case-insensitive substring match.
    Text(String),
    /// Strictly before the bound.
    Less(String),
    /// Strictly after the bound.
    Greater(String),
    /// Inclusive range; either side may be open.
    Range {
        /// Lower bound.
        min: Option<String>,
        /// Upper bound.
        max: Option<String>,
    },
    /// Reorder by the field.
    Sort(SortDirection),
}

impl FilterOp {
    /// `false` for criteria with nothing filled in; those are ignored.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Text(v) | Self::Less(v) | Self::Greater(v) => !v.is_empty(),
            Self::Range { min, max } => bound(min.as_ref()).is_some() || bound(max.as_ref()).is_some(),
            Self::Sort(_) => true,
        }
    }
}

pub(crate) fn bound(raw: Option<&String>) -> Option<&str> {
    raw.map(String::as_str).filter(|s| !s.is_empty())
}

/// A criterion on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<F> {
    /// Field the criterion reads.
    pub field: F,
    /// What to do with it.
    pub op: FilterOp,
}

impl<F: FieldKey> Filter<F> {
    /// Substring filter.
    pub fn text(field: F, value: impl Into<String>) -> Self {
        Self {
            field,
            op: FilterOp::Text(value.into()),
        }
    }

    /// Strictly-before filter.
    pub fn less(field: F, value: impl Into<String>) -> Self {
        Self {
            field,
            op: FilterOp::Less(value.into()),
        }
    }

    /// Strictly-after filter.
    pub fn greater(field: F, value: impl Into<String>) -> Self {
        Self {
            field,
            op: FilterOp::Greater(value.into()),
        }
    }

    /// Inclusive range filter.
    pub fn range(field: F, min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            field,
            op: FilterOp::Range {
                min: min.map(str::to_string),
                max: max.map(str::to_string),
            },
        }
    }

    /// Ordering.
    pub fn sort(field: F, direction: SortDirection) -> Self {
        Self {
            field,
            op: FilterOp::Sort(direction),
        }
    }
}

/// Shape of a control in a filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Text box.
    Text,
    /// Single "before" bound.
    Less,
    /// Single "after" bound.
    Greater,
    /// From / to pair.
    Range,
    /// Ascending / descending selector.
    Sort,
}

impl FilterKind {
    /// Suffix used in filter panel keys (`field$kind`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Less => "less",
            Self::Greater => "greater",
            Self::Range => "range",
            Self::Sort => "sort",
        }
    }
}

/// A filter panel control preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig<F> {
    /// Field the control filters on.
    pub field: F,
    /// Control shape.
    pub kind: FilterKind,
    /// Control label.
    pub label: &'static str,
}

impl<F: FieldKey> FilterConfig<F> {
    /// Preset of any kind.
    pub fn new(field: F, kind: FilterKind, label: &'static str) -> Self {
        Self { field, kind, label }
    }

    /// Text preset.
    pub fn text(field: F, label: &'static str) -> Self {
        Self::new(field, FilterKind::Text, label)
    }

    /// Panel key, `field$kind`.
    pub fn key(&self) -> String {
        format!("{}${}", self.field.name(), self.kind.as_str())
    }
}
