// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vehicle trip entries.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterConfig, FilterKind};
use crate::ident::{RecordId, RecordKind};
use crate::record::{NoSub, Record};

/// One vehicle trip with its cash breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleEntry {
    /// Server id.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Inbound / outbound movement.
    #[serde(rename = "movementType")]
    pub movement_type: String,
    /// Trip date.
    pub date: String,
    /// Registration number.
    pub vehicle_no: String,
    /// Origin.
    pub from: String,
    /// Destination.
    pub to: String,
    /// Freight amount.
    pub freight: String,
    /// Cash handed to the driver.
    pub driver_cash: String,
    /// Dala charge.
    pub dala: String,
    /// Commission.
    pub kamisan: String,
    /// Amount received in account.
    pub in_ac: String,
    /// Halting charge.
    pub halting: String,
    /// Outstanding balance.
    pub balance: String,
    /// Balance party name.
    pub party_name: String,
    /// Vehicle owner.
    pub owner: String,
    /// `Pending` or `Received`.
    pub status: String,
}

record_fields! {
    /// Editable fields of a [`VehicleEntry`].
    pub enum VehicleEntryField for VehicleEntry {
        MovementType => movement_type, "movementType", "Movement Type", Text;
        Date => date, "date", "Date", Date;
        VehicleNo => vehicle_no, "vehicle_no", "Vehicle Number", Text;
        From => from, "from", "From", Text;
        To => to, "to", "To", Text;
        Freight => freight, "freight", "Freight", Number;
        DriverCash => driver_cash, "driver_cash", "Driver Cash", Number;
        Dala => dala, "dala", "Dala", Number;
        Kamisan => kamisan, "kamisan", "Kamisan", Number;
        InAc => in_ac, "in_ac", "In AC", Number;
        Halting => halting, "halting", "Halting", Number;
        Balance => balance, "balance", "Balance", Number;
        PartyName => party_name, "party_name", "Party Name", Text;
        Owner => owner, "owner", "Owner", Text;
        Status => status, "status", "Status", Text;
    }
}

const REQUIRED: &[VehicleEntryField] = &[
    VehicleEntryField::Date,
    VehicleEntryField::VehicleNo,
    VehicleEntryField::From,
    VehicleEntryField::To,
    VehicleEntryField::Freight,
    VehicleEntryField::DriverCash,
    VehicleEntryField::Dala,
    VehicleEntryField::Kamisan,
    VehicleEntryField::InAc,
    VehicleEntryField::Halting,
    VehicleEntryField::Balance,
    VehicleEntryField::Owner,
    VehicleEntryField::Status,
];

impl Record for VehicleEntry {
    type Field = VehicleEntryField;
    type Sub = NoSub;
    const KIND: RecordKind = RecordKind::VehicleEntry;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn value(&self, field: VehicleEntryField) -> &str {
        field.get(self)
    }

    fn set_value(&mut self, field: VehicleEntryField, value: String) {
        *field.slot(self) = value;
    }

    fn required_fields() -> &'static [VehicleEntryField] {
        REQUIRED
    }
}

impl VehicleEntry {
    /// Filters offered on the vehicle entry list.
    pub fn filter_presets() -> Vec<FilterConfig<VehicleEntryField>> {
        vec![
            FilterConfig::text(VehicleEntryField::PartyName, "Party Name"),
            FilterConfig::text(VehicleEntryField::VehicleNo, "Vehicle Number"),
            FilterConfig::new(VehicleEntryField::Date, FilterKind::Range, "Date Range"),
            FilterConfig::new(VehicleEntryField::Date, FilterKind::Sort, "Sort by Date"),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::{FieldKey, FieldKind};

    #[test]
    fn movement_type_keeps_its_wire_name() {
        let entry: VehicleEntry =
            serde_json::from_str(r#"{"_id":"v1","movementType":"Import","freight":"1200"}"#)
                .unwrap();
        assert_eq!(entry.value(VehicleEntryField::MovementType), "Import");
        assert_eq!(VehicleEntryField::parse("movementType"), Some(VehicleEntryField::MovementType));
        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["movementType"], "Import");
        assert_eq!(back["_id"], "v1");
    }

    #[test]
    fn cash_columns_are_numbers() {
        assert_eq!(VehicleEntryField::Freight.kind(), FieldKind::Number);
        assert_eq!(VehicleEntryField::Date.kind(), FieldKind::Date);
        assert_eq!(VehicleEntryField::Owner.kind(), FieldKind::Text);
        assert!(!VehicleEntry::required_fields().contains(&VehicleEntryField::PartyName));
    }
}
