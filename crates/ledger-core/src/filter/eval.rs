// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filter evaluation: filter first, then a cascading stable sort.

use std::borrow::Cow;
use std::cmp::Ordering;

use time::Date;

use super::{bound, Filter, FilterOp, SortDirection};
use crate::date::parse_date;
use crate::error::FilterError;
use crate::record::{FieldKey, FieldKind, Record};

/// A field value interpreted by its kind.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
enum SortKey {
    Number(f64),
    Date(Date),
    Text(String),
}

/// Interpret a record value. `None` means missing or unparseable.
fn key_of(kind: FieldKind, raw: &str) -> Option<SortKey> {
    match kind {
        FieldKind::Text => (!raw.is_empty()).then(|| SortKey::Text(raw.to_lowercase())),
        FieldKind::Number => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(SortKey::Number),
        FieldKind::Date => parse_date(raw).map(SortKey::Date),
    }
}

/// Interpret a user-supplied bound. Unparseable bounds are errors.
fn bound_of<F: FieldKey>(field: F, raw: &str) -> Result<SortKey, FilterError> {
    key_of(field.kind(), raw).ok_or_else(|| match field.kind() {
        FieldKind::Number => FilterError::InvalidNumber {
            field: field.name(),
            value: raw.to_string(),
        },
        FieldKind::Date | FieldKind::Text => FilterError::InvalidDate {
            field: field.name(),
            value: raw.to_string(),
        },
    })
}

/// Missing values sort last in both directions.
fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let cmp = a.partial_cmp(b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        }
    }
}

/// A predicate with its bounds already parsed.
enum Predicate<F> {
    Contains(F, String),
    Less(F, SortKey),
    Greater(F, SortKey),
    Between(F, Option<SortKey>, Option<SortKey>),
}

impl<F: FieldKey> Predicate<F> {
    fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        match self {
            Self::Contains(field, needle) => record.value(*field).to_lowercase().contains(needle),
            Self::Less(field, limit) => {
                key_of(field.kind(), record.value(*field)).is_some_and(|v| v < *limit)
            }
            Self::Greater(field, limit) => {
                key_of(field.kind(), record.value(*field)).is_some_and(|v| v > *limit)
            }
            Self::Between(field, min, max) => {
                key_of(field.kind(), record.value(*field)).is_some_and(|v| {
                    min.as_ref().is_none_or(|m| v >= *m) && max.as_ref().is_none_or(|m| v <= *m)
                })
            }
        }
    }
}

/// Evaluate `filters` over `items`.
///
/// Returns the input borrowed when no filter is active, otherwise an owned
/// subset in the requested order. The input is never mutated.
pub fn apply_filters<'a, R: Record>(
    items: &'a [R],
    filters: &[Filter<R::Field>],
) -> Result<Cow<'a, [R]>, FilterError> {
    let active: Vec<&Filter<R::Field>> = filters.iter().filter(|f| f.op.is_active()).collect();
    if active.is_empty() {
        return Ok(Cow::Borrowed(items));
    }

    let mut predicates = Vec::new();
    let mut sorts = Vec::new();
    for filter in active {
        let field = filter.field;
        match &filter.op {
            FilterOp::Text(value) => predicates.push(Predicate::Contains(field, value.to_lowercase())),
            FilterOp::Less(value) => predicates.push(Predicate::Less(field, bound_of(field, value)?)),
            FilterOp::Greater(value) => {
                predicates.push(Predicate::Greater(field, bound_of(field, value)?));
            }
            FilterOp::Range { min, max } => {
                let min = bound(min.as_ref()).map(|v| bound_of(field, v)).transpose()?;
                let max = bound(max.as_ref()).map(|v| bound_of(field, v)).transpose()?;
                predicates.push(Predicate::Between(field, min, max));
            }
            FilterOp::Sort(direction) => sorts.push((field, *direction)),
        }
    }

    let mut out: Vec<R> = items
        .iter()
        .filter(|item| predicates.iter().all(|p| p.matches(*item)))
        .cloned()
        .collect();

    if !sorts.is_empty() {
        out.sort_by(|a, b| {
            for (field, direction) in &sorts {
                let ka = key_of(field.kind(), a.value(*field));
                let kb = key_of(field.kind(), b.value(*field));
                let cmp = compare_keys(ka.as_ref(), kb.as_ref(), *direction);
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
            Ordering::Equal
        });
    }

    Ok(Cow::Owned(out))
}

/// Comma-separated search: keep records whose `field` contains any term.
///
/// Terms are trimmed and blank terms dropped; a query with no terms keeps
/// the input as is.
pub fn search<'a, R: Record>(items: &'a [R], field: R::Field, query: &str) -> Cow<'a, [R]> {
    let terms: Vec<String> = query
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect();
    if terms.is_empty() {
        return Cow::Borrowed(items);
    }
    Cow::Owned(
        items
            .iter()
            .filter(|item| {
                let value = item.value(field).to_lowercase();
                terms.iter().any(|t| value.contains(t.as_str()))
            })
            .cloned()
            .collect(),
    )
}
