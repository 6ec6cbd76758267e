// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Draft/edit reconciliation for one list view.
//!
//! A [`ListView`] holds the canonical collection last received from the
//! server and one [`ItemState`] per record. User operations only touch draft
//! state; the canonical record changes on a successful commit and nowhere
//! else.
//!
//! Per (record, key) the edit lifecycle is
//! `Idle -> Editing -> Idle` via [`ListView::cancel`] or
//! [`ListView::save_field`], the latter folding the draft into the working
//! copy. Commits are split into [`ListView::begin_commit`] and
//! [`ListView::finish_commit`] so other records stay editable while a request
//! is pending; [`ListView::commit`] composes the two.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};

use ledger_app_core::toast::{Notifier, ToastKind};
use tracing::{debug, info, instrument, warn};

use crate::date::to_input_format;
use crate::error::{CommitError, DraftError, FilterError};
use crate::filter::{apply_filters, Filter};
use crate::ident::{IdGenerator, RecordId, SubId};
use crate::item_state::ItemState;
use crate::record::{read_key, write_key, DraftKey, FieldKey, FieldKind, KeyOf, Record, SubRecord};
use crate::remote::{RemoteError, RemoteReconciler};

/// Toast text for a commit that never reached the server.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save changes";

/// Attempts at drawing an unused sub-record id before giving up.
pub(crate) const MAX_ID_ATTEMPTS: usize = 32;

/// Snapshot taken by [`ListView::begin_commit`]; hand it back to
/// [`ListView::finish_commit`] with the server's answer.
#[derive(Debug, Clone)]
#[must_use = "a commit ticket keeps its record in flight until finished"]
pub struct CommitTicket<R: Record> {
    id: RecordId,
    snapshot: R,
}

impl<R: Record> CommitTicket<R> {
    /// Record being committed.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Working copy at the time the commit began; the payload to send.
    pub fn snapshot(&self) -> &R {
        &self.snapshot
    }
}

/// Canonical collection plus per-record draft state for one list.
#[derive(Debug, Clone)]
pub struct ListView<R: Record> {
    canonical: Vec<R>,
    states: HashMap<RecordId, ItemState<R>>,
    in_flight: HashSet<RecordId>,
}

impl<R: Record> Default for ListView<R> {
    fn default() -> Self {
        Self {
            canonical: Vec::new(),
            states: HashMap::new(),
            in_flight: HashSet::new(),
        }
    }
}

impl<R: Record> ListView<R> {
    /// Empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// View over `records`.
    pub fn with_records(records: Vec<R>) -> Self {
        let mut view = Self::new();
        view.load(records);
        view
    }

    /// Replace the canonical collection and reset every draft.
    ///
    /// Records repeating an earlier id are dropped. In-flight marks survive
    /// for ids still present.
    pub fn load(&mut self, records: Vec<R>) {
        let mut seen = HashSet::with_capacity(records.len());
        let mut canonical = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id().clone()) {
                canonical.push(record);
            } else {
                warn!(id = %record.id(), kind = %R::KIND, "duplicate record id skipped");
            }
        }
        self.states = canonical
            .iter()
            .map(|r| (r.id().clone(), ItemState::new(r)))
            .collect();
        self.in_flight.retain(|id| seen.contains(id));
        self.canonical = canonical;
        info!(kind = %R::KIND, count = self.canonical.len(), "collection loaded");
    }

    /// Load the collection from the server. On failure a toast is posted and
    /// the current collection is kept.
    #[instrument(skip(self, remote, notifier))]
    pub async fn fetch<C, N>(&mut self, remote: &C, notifier: &mut N) -> Result<usize, RemoteError>
    where
        C: RemoteReconciler<R> + Sync,
        N: Notifier + Send + ?Sized,
    {
        match remote.fetch_all(R::KIND).await {
            Ok(records) => {
                self.load(records);
                Ok(self.canonical.len())
            }
            Err(err) => {
                warn!(?err, kind = %R::KIND, "fetch failed");
                notifier.post(ToastKind::Error, R::KIND.fetch_failed_message());
                Err(err)
            }
        }
    }

    /// Canonical records, in server order.
    pub fn records(&self) -> &[R] {
        &self.canonical
    }

    /// Canonical record for `id`.
    pub fn record(&self, id: &RecordId) -> Option<&R> {
        self.canonical.iter().find(|r| r.id() == id)
    }

    /// Draft state for `id`.
    pub fn state(&self, id: &RecordId) -> Option<&ItemState<R>> {
        self.states.get(id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// `true` when no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    fn state_mut(&mut self, id: &RecordId) -> Result<&mut ItemState<R>, DraftError> {
        self.states
            .get_mut(id)
            .ok_or_else(|| DraftError::UnknownRecord(id.clone()))
    }

    /// Enter edit mode for `key`, seeding the draft from the working copy.
    ///
    /// Date fields are seeded as `YYYY-MM-DD`; unparseable dates verbatim.
    pub fn edit(&mut self, id: &RecordId, key: &KeyOf<R>) -> Result<(), DraftError> {
        let state = self.state_mut(id)?;
        if state.is_editing(key) {
            return Err(DraftError::AlreadyEditing {
                key: key.to_string(),
            });
        }
        let current = read_key(state.local_item(), key).ok_or_else(|| missing_sub(key))?;
        let seed = match key.kind() {
            FieldKind::Date => to_input_format(current),
            FieldKind::Text | FieldKind::Number => current.to_string(),
        };
        debug!(%id, %key, "edit");
        state.drafts_mut().insert(key.clone(), seed);
        Ok(())
    }

    /// Replace the pending value of an editing key.
    pub fn set_draft(
        &mut self,
        id: &RecordId,
        key: &KeyOf<R>,
        value: impl Into<String>,
    ) -> Result<(), DraftError> {
        let state = self.state_mut(id)?;
        let slot = state
            .drafts_mut()
            .get_mut(key)
            .ok_or_else(|| not_editing(key))?;
        *slot = value.into();
        Ok(())
    }

    /// Leave edit mode discarding the draft.
    pub fn cancel(&mut self, id: &RecordId, key: &KeyOf<R>) -> Result<(), DraftError> {
        let state = self.state_mut(id)?;
        state.drafts_mut().remove(key).ok_or_else(|| not_editing(key))?;
        debug!(%id, %key, "cancel");
        Ok(())
    }

    /// Leave edit mode writing the draft into the working copy. Local only.
    pub fn save_field(&mut self, id: &RecordId, key: &KeyOf<R>) -> Result<(), DraftError> {
        let state = self.state_mut(id)?;
        if !state.is_editing(key) {
            return Err(not_editing(key));
        }
        if read_key(state.local_item(), key).is_none() {
            return Err(missing_sub(key));
        }
        let value = state.drafts_mut().remove(key).unwrap_or_default();
        write_key(state.local_item_mut(), key, value);
        if let DraftKey::Field(field) = key {
            state.errors_mut().remove(field);
        }
        debug!(%id, %key, "save field");
        Ok(())
    }

    /// Reset the working copy to the canonical record, dropping all drafts
    /// and inline errors.
    pub fn abort(&mut self, id: &RecordId) -> Result<(), DraftError> {
        let canonical = self
            .canonical
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| DraftError::UnknownRecord(id.clone()))?;
        let state = self
            .states
            .get_mut(id)
            .ok_or_else(|| DraftError::UnknownRecord(id.clone()))?;
        state.reset_to(canonical);
        debug!(%id, "abort");
        Ok(())
    }

    /// `true` iff the working copy differs from the canonical record.
    pub fn has_changes(&self, id: &RecordId) -> bool {
        match (self.record(id), self.states.get(id)) {
            (Some(canonical), Some(state)) => state.has_changes(canonical),
            _ => false,
        }
    }

    /// `true` while a commit for `id` awaits its outcome.
    pub fn is_in_flight(&self, id: &RecordId) -> bool {
        self.in_flight.contains(id)
    }

    /// Flip the row's expanded flag; returns the new value.
    pub fn toggle_open(&mut self, id: &RecordId) -> Result<bool, DraftError> {
        Ok(self.state_mut(id)?.toggle_open())
    }

    /// Append a blank sub-record with a fresh id, optionally opening its
    /// first field for editing.
    pub fn add_sub<G>(&mut self, id: &RecordId, ids: &mut G, open_first: bool) -> Result<SubId, DraftError>
    where
        G: IdGenerator + ?Sized,
    {
        let state = self.state_mut(id)?;
        let sub_id = {
            let local = state.local_item_mut();
            let mut attempts = 0;
            let sub_id = loop {
                let candidate = ids.new_id();
                if local.sub(&candidate).is_none() {
                    break candidate;
                }
                attempts += 1;
                if attempts >= MAX_ID_ATTEMPTS {
                    return Err(DraftError::IdCollision(candidate));
                }
            };
            let blank = R::blank_sub(sub_id.clone()).ok_or(DraftError::NoNestedCollection)?;
            local
                .subs_mut()
                .ok_or(DraftError::NoNestedCollection)?
                .push(blank);
            sub_id
        };
        if open_first {
            if let Some(first) = <<R::Sub as SubRecord>::Field as FieldKey>::ALL.first() {
                state
                    .drafts_mut()
                    .insert(DraftKey::Sub(sub_id.clone(), *first), String::new());
            }
        }
        debug!(%id, sub = %sub_id, "sub-record added");
        Ok(sub_id)
    }

    /// Remove a sub-record and every draft addressing it.
    pub fn remove_sub(&mut self, id: &RecordId, sub_id: &SubId) -> Result<(), DraftError> {
        let state = self.state_mut(id)?;
        let subs = state
            .local_item_mut()
            .subs_mut()
            .ok_or(DraftError::NoNestedCollection)?;
        let pos = subs
            .iter()
            .position(|s| s.id() == sub_id)
            .ok_or_else(|| DraftError::UnknownSub(sub_id.clone()))?;
        subs.remove(pos);
        state
            .drafts_mut()
            .retain(|key, _| key.sub_id() != Some(sub_id));
        debug!(%id, sub = %sub_id, "sub-record removed");
        Ok(())
    }

    /// Drop a record that left the server collection (e.g. deleted).
    pub fn remove(&mut self, id: &RecordId) -> Option<R> {
        let pos = self.canonical.iter().position(|r| r.id() == id)?;
        self.states.remove(id);
        self.in_flight.remove(id);
        Some(self.canonical.remove(pos))
    }

    /// Canonical records passing `filters`; borrowed when none is active.
    pub fn visible(&self, filters: &[Filter<R::Field>]) -> Result<Cow<'_, [R]>, FilterError> {
        apply_filters(&self.canonical, filters)
    }

    /// Validate and snapshot the working copy, marking `id` in flight.
    ///
    /// Blank required fields are stored as inline errors and refuse the
    /// commit without contacting the server.
    pub fn begin_commit(&mut self, id: &RecordId) -> Result<CommitTicket<R>, CommitError> {
        let canonical = self
            .record(id)
            .ok_or_else(|| DraftError::UnknownRecord(id.clone()))?;
        if self.in_flight.contains(id) {
            return Err(CommitError::InFlight(id.clone()));
        }
        let state = self
            .states
            .get(id)
            .ok_or_else(|| DraftError::UnknownRecord(id.clone()))?;
        if !state.has_changes(canonical) {
            return Err(CommitError::NoChanges);
        }

        let missing = required_errors(state.local_item());
        if !missing.is_empty() {
            let messages: Vec<String> = missing.values().cloned().collect();
            let state = self.state_mut(id)?;
            *state.errors_mut() = missing;
            debug!(%id, count = messages.len(), "commit refused: required fields blank");
            return Err(CommitError::Invalid(messages));
        }

        let snapshot = state.local_item().clone();
        self.in_flight.insert(id.clone());
        debug!(%id, "commit started");
        Ok(CommitTicket {
            id: id.clone(),
            snapshot,
        })
    }

    /// Apply the server's answer to a commit started with [`ListView::begin_commit`].
    ///
    /// On success the canonical record becomes the returned record (or the
    /// snapshot when nothing was returned) and drafts and inline errors are
    /// cleared. The working copy follows the canonical record unless it was
    /// edited after the commit began; a copy reset by a reload counts as
    /// unedited. Failures leave local state untouched.
    pub fn finish_commit<N>(
        &mut self,
        ticket: CommitTicket<R>,
        outcome: Result<Option<R>, RemoteError>,
        notifier: &mut N,
    ) -> Result<(), CommitError>
    where
        N: Notifier + ?Sized,
    {
        let CommitTicket { id, snapshot } = ticket;
        self.in_flight.remove(&id);

        match outcome {
            Ok(returned) => {
                let updated = returned.unwrap_or_else(|| snapshot.clone());
                let pos = self
                    .canonical
                    .iter()
                    .position(|r| r.id() == &id)
                    .ok_or_else(|| DraftError::UnknownRecord(id.clone()))?;
                let replaced = &self.canonical[pos];
                if let Some(state) = self.states.get_mut(&id) {
                    if *state.local_item() == snapshot || state.local_item() == replaced {
                        *state.local_item_mut() = updated.clone();
                    }
                    state.drafts_mut().clear();
                    state.errors_mut().clear();
                }
                self.canonical[pos] = updated;
                info!(%id, kind = %R::KIND, "commit reconciled");
                notifier.post(ToastKind::Success, R::KIND.updated_message());
                Ok(())
            }
            Err(RemoteError::Rejected(errors)) => {
                warn!(%id, count = errors.len(), "commit rejected");
                for message in errors.values() {
                    notifier.post(ToastKind::Error, message);
                }
                if let Some(state) = self.states.get_mut(&id) {
                    for (name, message) in &errors {
                        if let Some(field) = <R::Field as FieldKey>::parse(name) {
                            state.errors_mut().insert(field, message.clone());
                        }
                    }
                }
                Err(CommitError::Rejected(errors))
            }
            Err(RemoteError::Transport(message)) => {
                warn!(%id, %message, "commit transport failure");
                notifier.post(ToastKind::Error, SAVE_FAILED_MESSAGE);
                Err(CommitError::Transport(message))
            }
        }
    }

    /// Send the working copy of `id` to the server and reconcile the answer.
    #[instrument(skip(self, remote, notifier))]
    pub async fn commit<C, N>(
        &mut self,
        id: &RecordId,
        remote: &C,
        notifier: &mut N,
    ) -> Result<(), CommitError>
    where
        C: RemoteReconciler<R> + Sync,
        N: Notifier + Send + ?Sized,
    {
        let ticket = self.begin_commit(id)?;
        let outcome = remote.commit(ticket.id(), ticket.snapshot()).await;
        self.finish_commit(ticket, outcome, notifier)
    }
}

/// `"<Label> is required"` for every blank required field.
pub fn required_errors<R: Record>(record: &R) -> BTreeMap<R::Field, String> {
    R::required_fields()
        .iter()
        .filter(|f| record.value(**f).trim().is_empty())
        .map(|f| (*f, format!("{} is required", f.label())))
        .collect()
}

fn not_editing<F: FieldKey, S: FieldKey>(key: &DraftKey<F, S>) -> DraftError {
    DraftError::NotEditing {
        key: key.to_string(),
    }
}

fn missing_sub<F, S>(key: &DraftKey<F, S>) -> DraftError {
    key.sub_id()
        .map_or(DraftError::NoNestedCollection, |id| DraftError::UnknownSub(id.clone()))
}
