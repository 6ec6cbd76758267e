// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Billing and balance parties.

use serde::{Deserialize, Serialize};

use crate::filter::FilterConfig;
use crate::ident::{RecordId, RecordKind};
use crate::record::{FieldKey, NoSub, Record};

/// Party an entry is billed to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillingParty {
    /// Server id.
    #[serde(rename = "_id", default)]
    pub id: RecordId,
    /// Party name.
    #[serde(default)]
    pub name: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// GSTIN.
    #[serde(default)]
    pub gst_no: String,
}

record_fields! {
    /// Editable fields of a [`BillingParty`].
    pub enum BillingPartyField for BillingParty {
        Name => name, "name", "Name", Text;
        Address => address, "address", "Address", Text;
        GstNo => gst_no, "gst_no", "GST No", Text;
    }
}

impl Record for BillingParty {
    type Field = BillingPartyField;
    type Sub = NoSub;
    const KIND: RecordKind = RecordKind::BillingParty;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn value(&self, field: BillingPartyField) -> &str {
        field.get(self)
    }

    fn set_value(&mut self, field: BillingPartyField, value: String) {
        *field.slot(self) = value;
    }
}

impl BillingParty {
    /// Filters offered on the billing party list.
    pub fn filter_presets() -> Vec<FilterConfig<BillingPartyField>> {
        vec![FilterConfig::text(
            BillingPartyField::Name,
            "Billing Party Name",
        )]
    }

    /// `true` when no party has been selected (the entry form's placeholder).
    pub fn is_unset(&self) -> bool {
        self.id.as_str().is_empty() && BillingPartyField::ALL.iter().all(|f| self.value(*f).is_empty())
    }
}

/// Party tracked by vehicle balances.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceParty {
    /// Server id.
    #[serde(rename = "_id", default)]
    pub id: RecordId,
    /// Party name.
    #[serde(default)]
    pub party_name: String,
}

record_fields! {
    /// Editable fields of a [`BalanceParty`].
    pub enum BalancePartyField for BalanceParty {
        PartyName => party_name, "party_name", "Party Name", Text;
    }
}

impl Record for BalanceParty {
    type Field = BalancePartyField;
    type Sub = NoSub;
    const KIND: RecordKind = RecordKind::BalanceParty;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn value(&self, field: BalancePartyField) -> &str {
        field.get(self)
    }

    fn set_value(&mut self, field: BalancePartyField, value: String) {
        *field.slot(self) = value;
    }

    fn required_fields() -> &'static [BalancePartyField] {
        &[BalancePartyField::PartyName]
    }
}

impl BalanceParty {
    /// Filters offered on the balance party list.
    pub fn filter_presets() -> Vec<FilterConfig<BalancePartyField>> {
        vec![FilterConfig::text(
            BalancePartyField::PartyName,
            "Balance Party Name",
        )]
    }
}
