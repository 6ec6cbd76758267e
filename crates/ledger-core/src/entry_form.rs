// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! New-entry draft with live GST totals.
//!
//! Every input change reruns the tax calculator and writes the derived
//! figures (`sub_total`, `cgst`, `sgst`, `igst`, `grand_total`) back into the
//! entry as strings, so those fields cannot be edited directly.

use std::collections::BTreeMap;

use ledger_app_core::toast::{Notifier, ToastKind};
use tracing::debug;

use crate::error::DraftError;
use crate::ident::{IdGenerator, SubId};
use crate::list_view::{required_errors, MAX_ID_ATTEMPTS};
use crate::model::{BillingParty, Entry, EntryField, ExtraCharge, ExtraChargeField};
use crate::record::{FieldKey, Record, SubRecord};
use crate::tax::{StateSelector, TaxBreakdown, TaxPolicy};

/// Message shown when the form is submitted without a billing party.
pub const SELECT_PARTY_MESSAGE: &str = "Please select a Billing Party";

/// Where an inline form error is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// The billing party selector.
    BillingParty,
    /// A scalar entry field.
    Entry(EntryField),
}

/// Draft of a new entry.
#[derive(Debug, Clone)]
pub struct EntryForm {
    entry: Entry,
    state: StateSelector,
    policy: TaxPolicy,
    breakdown: TaxBreakdown,
    errors: BTreeMap<FormField, String>,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new(TaxPolicy::default())
    }
}

impl EntryForm {
    /// Blank form billed to the home state.
    pub fn new(policy: TaxPolicy) -> Self {
        let entry = Entry::default();
        let state = StateSelector::Home;
        let breakdown = policy.compute_for(&entry, state);
        let mut form = Self {
            entry,
            state,
            policy,
            breakdown,
            errors: BTreeMap::new(),
        };
        form.recompute();
        form
    }

    /// The entry being built.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Consume the form.
    pub fn into_entry(self) -> Entry {
        self.entry
    }

    /// Selected GST branch.
    pub fn state(&self) -> StateSelector {
        self.state
    }

    /// Figures from the latest recompute.
    pub fn breakdown(&self) -> &TaxBreakdown {
        &self.breakdown
    }

    /// Inline errors.
    pub fn errors(&self) -> &BTreeMap<FormField, String> {
        &self.errors
    }

    /// Inline error for one field.
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    fn recompute(&mut self) {
        self.breakdown = self.policy.compute_for(&self.entry, self.state);
        self.breakdown.apply_to(&mut self.entry);
    }

    /// Set a scalar field and clear its inline error.
    pub fn set_field(&mut self, field: EntryField, value: impl Into<String>) {
        self.entry.set_value(field, value.into());
        self.errors.remove(&FormField::Entry(field));
        self.recompute();
    }

    /// Pick the GST branch from a state code (matched against the home state).
    pub fn select_state(&mut self, state: &str) {
        self.set_state(self.policy.selector_for(state));
    }

    /// Pick the GST branch directly.
    pub fn set_state(&mut self, state: StateSelector) {
        self.state = state;
        self.recompute();
    }

    /// Select the billing party; `None` goes back to the placeholder.
    pub fn select_party(&mut self, party: Option<BillingParty>) {
        match party {
            Some(party) => {
                debug!(party = %party.id, "billing party selected");
                self.entry.billing_party = party;
                self.errors.remove(&FormField::BillingParty);
            }
            None => self.entry.billing_party = BillingParty::default(),
        }
    }

    /// Append a blank extra charge.
    pub fn add_charge<G>(&mut self, ids: &mut G) -> Result<SubId, DraftError>
    where
        G: IdGenerator + ?Sized,
    {
        let mut attempts = 0;
        let id = loop {
            let candidate = ids.new_id();
            if self.entry.sub(&candidate).is_none() {
                break candidate;
            }
            attempts += 1;
            if attempts >= MAX_ID_ATTEMPTS {
                return Err(DraftError::IdCollision(candidate));
            }
        };
        self.entry.extra_charges.push(ExtraCharge::blank(id.clone()));
        self.recompute();
        Ok(id)
    }

    /// Set a field of one extra charge.
    pub fn set_charge_field(
        &mut self,
        id: &SubId,
        field: ExtraChargeField,
        value: impl Into<String>,
    ) -> Result<(), DraftError> {
        let charge = self
            .entry
            .sub_mut(id)
            .ok_or_else(|| DraftError::UnknownSub(id.clone()))?;
        charge.set_value(field, value.into());
        self.recompute();
        Ok(())
    }

    /// Remove an extra charge.
    pub fn remove_charge(&mut self, id: &SubId) -> Result<(), DraftError> {
        let pos = self
            .entry
            .extra_charges
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| DraftError::UnknownSub(id.clone()))?;
        self.entry.extra_charges.remove(pos);
        self.recompute();
        Ok(())
    }

    /// Check the party selection and required fields, replacing the inline
    /// errors. A missing party is also posted as a toast.
    pub fn validate<N: Notifier + ?Sized>(&mut self, notifier: &mut N) -> bool {
        self.errors = required_errors(&self.entry)
            .into_iter()
            .map(|(field, message)| (FormField::Entry(field), message))
            .collect();
        if self.entry.billing_party.is_unset() {
            self.errors
                .insert(FormField::BillingParty, SELECT_PARTY_MESSAGE.to_string());
            notifier.post(ToastKind::Error, SELECT_PARTY_MESSAGE);
        }
        self.errors.is_empty()
    }

    /// Show field-level errors returned by the server inline. Unknown field
    /// names are ignored.
    pub fn apply_server_errors(&mut self, errors: &BTreeMap<String, String>) {
        for (name, message) in errors {
            let key = if name == "billing_party" {
                Some(FormField::BillingParty)
            } else {
                EntryField::parse(name).map(FormField::Entry)
            };
            if let Some(key) = key {
                self.errors.insert(key, message.clone());
            }
        }
    }
}
