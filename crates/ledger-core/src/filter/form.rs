// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! State of a filter panel built from [`FilterConfig`] presets.

use std::collections::HashMap;

use super::{Filter, FilterConfig, FilterKind, FilterOp, SortDirection};
use crate::record::FieldKey;

/// Side of a range control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeBound {
    /// "From".
    Min,
    /// "To".
    Max,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Value(String),
    Range(Option<String>, Option<String>),
}

/// Values typed into a filter panel, keyed by (field, control kind).
///
/// Nothing is evaluated until [`FilterForm::apply`] turns the panel into an
/// ordered filter list.
#[derive(Debug, Clone)]
pub struct FilterForm<F: FieldKey> {
    configs: Vec<FilterConfig<F>>,
    values: HashMap<(F, FilterKind), Slot>,
}

impl<F: FieldKey> FilterForm<F> {
    /// Empty panel for `configs`.
    pub fn new(configs: Vec<FilterConfig<F>>) -> Self {
        Self {
            configs,
            values: HashMap::new(),
        }
    }

    /// Controls shown by the panel.
    pub fn configs(&self) -> &[FilterConfig<F>] {
        &self.configs
    }

    /// Set a text, less, greater or sort control.
    pub fn set_value(&mut self, field: F, kind: FilterKind, value: impl Into<String>) {
        self.values.insert((field, kind), Slot::Value(value.into()));
    }

    /// Set one side of a range control, keeping the other.
    pub fn set_range_bound(&mut self, field: F, side: RangeBound, value: impl Into<String>) {
        let value = Some(value.into());
        let slot = self
            .values
            .entry((field, FilterKind::Range))
            .or_insert(Slot::Range(None, None));
        let (min, max) = match std::mem::replace(slot, Slot::Range(None, None)) {
            Slot::Range(min, max) => (min, max),
            Slot::Value(_) => (None, None),
        };
        *slot = match side {
            RangeBound::Min => Slot::Range(value, max),
            RangeBound::Max => Slot::Range(min, value),
        };
    }

    /// Current value of a single-value control.
    pub fn value(&self, field: F, kind: FilterKind) -> Option<&str> {
        match self.values.get(&(field, kind)) {
            Some(Slot::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// Current bounds of a range control.
    pub fn range(&self, field: F) -> (Option<&str>, Option<&str>) {
        match self.values.get(&(field, FilterKind::Range)) {
            Some(Slot::Range(min, max)) => (min.as_deref(), max.as_deref()),
            _ => (None, None),
        }
    }

    /// Filter list in panel order. Untouched controls and sort selectors
    /// left on the placeholder contribute nothing.
    pub fn apply(&self) -> Vec<Filter<F>> {
        self.configs
            .iter()
            .filter_map(|cfg| {
                let slot = self.values.get(&(cfg.field, cfg.kind))?;
                let op = match (cfg.kind, slot) {
                    (FilterKind::Text, Slot::Value(v)) => FilterOp::Text(v.clone()),
                    (FilterKind::Less, Slot::Value(v)) => FilterOp::Less(v.clone()),
                    (FilterKind::Greater, Slot::Value(v)) => FilterOp::Greater(v.clone()),
                    (FilterKind::Sort, Slot::Value(v)) => FilterOp::Sort(SortDirection::parse(v)?),
                    (FilterKind::Range, Slot::Range(min, max)) => FilterOp::Range {
                        min: min.clone(),
                        max: max.clone(),
                    },
                    _ => return None,
                };
                Some(Filter {
                    field: cfg.field,
                    op,
                })
            })
            .filter(|f| f.op.is_active())
            .collect()
    }

    /// Forget every value; [`FilterForm::apply`] then yields no filters.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
