// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The record abstraction shared by every list view.
//!
//! A [`Record`] has a stable id, string-valued scalar fields addressed by a
//! typed [`FieldKey`] enum, and optionally one nested collection of
//! [`SubRecord`]s (an entry's extra charges). Records without a nested
//! collection use [`NoSub`] / [`NoField`], which are uninhabited.

use std::fmt;
use std::hash::Hash;

use crate::ident::{RecordId, RecordKind, SubId};

/// How a field's string value is interpreted for display, sorting and ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, compared case-insensitively.
    Text,
    /// String-encoded number.
    Number,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    Date,
}

/// A typed field key: one variant per editable scalar field.
pub trait FieldKey: Copy + Eq + Ord + Hash + fmt::Debug + 'static {
    /// Every variant, in form order.
    const ALL: &'static [Self];

    /// Wire name (the server's field name).
    fn name(self) -> &'static str;

    /// Human label used in messages and filter panels.
    fn label(self) -> &'static str;

    /// Interpretation of the field's value.
    fn kind(self) -> FieldKind;

    /// Reverse of [`FieldKey::name`].
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// An element of a record's nested collection.
pub trait SubRecord: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Field keys of the sub-record.
    type Field: FieldKey;

    /// Identifier, unique within the owning collection.
    fn id(&self) -> &SubId;

    /// Current value of `field`.
    fn value(&self, field: Self::Field) -> &str;

    /// Overwrite `field`.
    fn set_value(&mut self, field: Self::Field, value: String);
}

/// A top-level record managed by a [`ListView`](crate::ListView).
///
/// Equality is structural over every field, including nested collections;
/// `has_changes` is defined by it.
pub trait Record: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Editable top-level field keys.
    type Field: FieldKey;
    /// Nested collection element, or [`NoSub`].
    type Sub: SubRecord;
    /// Which list this record belongs to.
    const KIND: RecordKind;

    /// Stable identifier.
    fn id(&self) -> &RecordId;

    /// Current value of `field`.
    fn value(&self, field: Self::Field) -> &str;

    /// Overwrite `field`.
    fn set_value(&mut self, field: Self::Field, value: String);

    /// Nested collection, empty for records without one.
    fn subs(&self) -> &[Self::Sub] {
        &[]
    }

    /// Mutable nested collection; `None` for records without one.
    fn subs_mut(&mut self) -> Option<&mut Vec<Self::Sub>> {
        None
    }

    /// A blank sub-record carrying `id`; `None` for records without one.
    fn blank_sub(id: SubId) -> Option<Self::Sub> {
        let _ = id;
        None
    }

    /// Fields that must be non-blank before a commit is sent.
    fn required_fields() -> &'static [Self::Field] {
        &[]
    }

    /// Find a sub-record by id.
    fn sub(&self, id: &SubId) -> Option<&Self::Sub> {
        self.subs().iter().find(|s| s.id() == id)
    }

    /// Mutable lookup of a sub-record by id.
    fn sub_mut(&mut self, id: &SubId) -> Option<&mut Self::Sub> {
        self.subs_mut()?.iter_mut().find(|s| s.id() == id)
    }
}

/// Field key type of records without a nested collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoField {}

impl FieldKey for NoField {
    const ALL: &'static [Self] = &[];

    fn name(self) -> &'static str {
        match self {}
    }

    fn label(self) -> &'static str {
        match self {}
    }

    fn kind(self) -> FieldKind {
        match self {}
    }
}

/// Sub-record type of records without a nested collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoSub {}

impl SubRecord for NoSub {
    type Field = NoField;

    fn id(&self) -> &SubId {
        match *self {}
    }

    fn value(&self, field: NoField) -> &str {
        match field {}
    }

    fn set_value(&mut self, field: NoField, _value: String) {
        match field {}
    }
}

/// Key of a pending draft: a top-level field, or a field of one sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DraftKey<F, S> {
    /// Top-level field.
    Field(F),
    /// Field of the sub-record with the given id.
    Sub(SubId, S),
}

/// Draft key type of record `R`.
pub type KeyOf<R> = DraftKey<<R as Record>::Field, <<R as Record>::Sub as SubRecord>::Field>;

impl<F, S> DraftKey<F, S> {
    /// Sub-record id this key belongs to, if any.
    pub fn sub_id(&self) -> Option<&SubId> {
        match self {
            Self::Field(_) => None,
            Self::Sub(id, _) => Some(id),
        }
    }
}

impl<F: FieldKey, S: FieldKey> DraftKey<F, S> {
    /// Kind of the addressed field.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Field(f) => f.kind(),
            Self::Sub(_, f) => f.kind(),
        }
    }
}

impl<F: FieldKey, S: FieldKey> fmt::Display for DraftKey<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => f.write_str(field.name()),
            Self::Sub(id, field) => write!(f, "{id}.{}", field.name()),
        }
    }
}

/// Read the value addressed by `key`. `None` when the sub-record is missing.
pub fn read_key<'a, R: Record>(record: &'a R, key: &KeyOf<R>) -> Option<&'a str> {
    match key {
        DraftKey::Field(f) => Some(record.value(*f)),
        DraftKey::Sub(id, f) => record.sub(id).map(|s| s.value(*f)),
    }
}

/// Write the value addressed by `key`. Returns `false` when the sub-record is missing.
pub fn write_key<R: Record>(record: &mut R, key: &KeyOf<R>, value: String) -> bool {
    match key {
        DraftKey::Field(f) => {
            record.set_value(*f, value);
            true
        }
        DraftKey::Sub(id, f) => match record.sub_mut(id) {
            Some(sub) => {
                sub.set_value(*f, value);
                true
            }
            None => false,
        },
    }
}
