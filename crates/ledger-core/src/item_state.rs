// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-record draft store.

use std::collections::BTreeMap;

use crate::record::{KeyOf, Record};

/// Working state of one record in a list view.
///
/// A key is "editing" exactly when it has an entry in `drafts`; there is no
/// separate editing set to drift out of sync.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemState<R: Record> {
    local_item: R,
    drafts: BTreeMap<KeyOf<R>, String>,
    is_open: bool,
    field_errors: BTreeMap<R::Field, String>,
}

impl<R: Record> ItemState<R> {
    /// Fresh state whose working copy is a clone of `canonical`.
    pub fn new(canonical: &R) -> Self {
        Self {
            local_item: canonical.clone(),
            drafts: BTreeMap::new(),
            is_open: false,
            field_errors: BTreeMap::new(),
        }
    }

    /// Working copy, including saved-but-uncommitted fields.
    pub fn local_item(&self) -> &R {
        &self.local_item
    }

    /// Pending value for `key`, if it is being edited.
    pub fn draft(&self, key: &KeyOf<R>) -> Option<&str> {
        self.drafts.get(key).map(String::as_str)
    }

    /// All pending drafts.
    pub fn drafts(&self) -> &BTreeMap<KeyOf<R>, String> {
        &self.drafts
    }

    /// `true` if `key` is in edit mode.
    pub fn is_editing(&self, key: &KeyOf<R>) -> bool {
        self.drafts.contains_key(key)
    }

    /// Keys currently in edit mode.
    pub fn editing(&self) -> impl Iterator<Item = &KeyOf<R>> + '_ {
        self.drafts.keys()
    }

    /// Whether the row is expanded.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Inline error for `field`.
    pub fn field_error(&self, field: R::Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    /// All inline errors.
    pub fn field_errors(&self) -> &BTreeMap<R::Field, String> {
        &self.field_errors
    }

    /// Whole-record structural inequality against `canonical`.
    pub fn has_changes(&self, canonical: &R) -> bool {
        self.local_item != *canonical
    }

    pub(crate) fn local_item_mut(&mut self) -> &mut R {
        &mut self.local_item
    }

    pub(crate) fn drafts_mut(&mut self) -> &mut BTreeMap<KeyOf<R>, String> {
        &mut self.drafts
    }

    pub(crate) fn errors_mut(&mut self) -> &mut BTreeMap<R::Field, String> {
        &mut self.field_errors
    }

    pub(crate) fn toggle_open(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Reset the working copy and forget every draft and inline error.
    pub(crate) fn reset_to(&mut self, canonical: &R) {
        self.local_item = canonical.clone();
        self.drafts.clear();
        self.field_errors.clear();
    }
}
