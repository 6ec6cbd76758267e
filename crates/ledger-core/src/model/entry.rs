// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! LR / bill entries and their extra charges.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterConfig, FilterKind};
use crate::ident::{RecordId, RecordKind, SubId};
use crate::model::party::BillingParty;
use crate::record::{Record, SubRecord};

/// An additional billed line on an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraCharge {
    /// Id, unique within the entry.
    #[serde(rename = "_id")]
    pub id: SubId,
    /// Charge description.
    #[serde(rename = "type")]
    pub charge_type: String,
    /// Amount added to the subtotal.
    pub amount: String,
    /// Unit rate.
    pub rate: String,
    /// Per-unit basis.
    pub per_amount: String,
}

record_fields! {
    /// Fields of an [`ExtraCharge`].
    pub enum ExtraChargeField for ExtraCharge {
        Type => charge_type, "type", "Extra Charge", Text;
        Amount => amount, "amount", "Amount", Number;
        Rate => rate, "rate", "Rate", Number;
        PerAmount => per_amount, "per_amount", "Per Amount", Text;
    }
}

impl ExtraCharge {
    /// A charge with every field blank.
    pub fn blank(id: SubId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl SubRecord for ExtraCharge {
    type Field = ExtraChargeField;

    fn id(&self) -> &SubId {
        &self.id
    }

    fn value(&self, field: ExtraChargeField) -> &str {
        field.get(self)
    }

    fn set_value(&mut self, field: ExtraChargeField, value: String) {
        *field.slot(self) = value;
    }
}

/// An LR / bill entry.
///
/// `billing_party` is embedded by value and is read-only in list views; it
/// is chosen once in the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// Server id.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Bill number.
    pub bill_no: String,
    /// Bill date.
    pub bill_date: String,
    /// Party the entry is billed to.
    pub billing_party: BillingParty,
    /// Lorry receipt number.
    pub lr_no: String,
    /// Lorry receipt date.
    pub lr_date: String,
    /// Consignor.
    pub consignor_name: String,
    /// Consignor pickup address.
    pub consignor_from_address: String,
    /// Consignor GSTIN.
    pub consignor_gst_no: String,
    /// Consignee.
    pub consignee: String,
    /// Delivery address.
    pub consignor_to_address: String,
    /// Consignee GSTIN.
    pub consignee_gst_no: String,
    /// Package count.
    pub pkg: String,
    /// Vehicle registration.
    pub vehicle_no: String,
    /// Origin.
    pub from: String,
    /// Destination.
    pub to: String,
    /// Bill of entry number.
    pub be_no: String,
    /// Bill of entry date.
    pub be_date: String,
    /// Weight.
    pub weight: String,
    /// Volume in cubic metres.
    pub cbm: String,
    /// Fixed / variable.
    pub fixed: String,
    /// Rate basis.
    pub rate_per: String,
    /// Packing.
    pub mode_of_packing: String,
    /// Invoice number.
    pub invoice_no: String,
    /// E-way bill number.
    pub eway_bill_no: String,
    /// Goods description.
    pub description_of_goods: String,
    /// Container number.
    pub container_no: String,
    /// Declared goods value.
    pub value: String,
    /// Clerk.
    pub name_of_clerk: String,
    /// Empty yard.
    pub empty_yard_name: String,
    /// Free-form remark.
    pub remark_if_any: String,
    /// Billing location.
    pub to_be_billed_at: String,
    /// Hire amount.
    pub hire_amount: String,
    /// Owner's / carrier's risk.
    pub risk: String,
    /// Billing office address.
    pub address_of_billing_office: String,
    /// Base freight rate; input of the tax calculator.
    pub rate: String,
    /// Advance paid.
    pub advance: String,
    /// Additional charges added to the subtotal.
    pub extra_charges: Vec<ExtraCharge>,
    /// Derived: rate plus extra charges.
    pub sub_total: String,
    /// Derived: central GST (home state only).
    pub cgst: String,
    /// Derived: state GST (home state only).
    pub sgst: String,
    /// Derived: integrated GST (other states only).
    pub igst: String,
    /// Derived: subtotal plus GST.
    pub grand_total: String,
    /// GST UP note.
    pub gst_up: String,
    /// Other-state GST note.
    pub if_gst_other_state: String,
}

record_fields! {
    /// Editable scalar fields of an [`Entry`], in form order.
    pub enum EntryField for Entry {
        BillNo => bill_no, "bill_no", "Bill No", Number;
        BillDate => bill_date, "bill_date", "Bill Date", Date;
        LrNo => lr_no, "lr_no", "LR No", Number;
        LrDate => lr_date, "lr_date", "LR Date", Date;
        ConsignorName => consignor_name, "consignor_name", "Consignor Name", Text;
        ConsignorFromAddress => consignor_from_address, "consignor_from_address", "Consignor From Address", Text;
        ConsignorGstNo => consignor_gst_no, "consignor_gst_no", "Consignor GST No", Text;
        Consignee => consignee, "consignee", "Consignee", Text;
        ConsignorToAddress => consignor_to_address, "consignor_to_address", "Consignor To Address", Text;
        ConsigneeGstNo => consignee_gst_no, "consignee_gst_no", "Consignee GST No", Text;
        Pkg => pkg, "pkg", "Packages", Text;
        VehicleNo => vehicle_no, "vehicle_no", "Vehicle No", Text;
        From => from, "from", "From", Text;
        To => to, "to", "To", Text;
        BeNo => be_no, "be_no", "BE No", Text;
        BeDate => be_date, "be_date", "BE Date", Date;
        Weight => weight, "weight", "Weight", Number;
        Cbm => cbm, "cbm", "CBM", Text;
        Fixed => fixed, "fixed", "Fixed", Text;
        RatePer => rate_per, "rate_per", "Rate Per", Text;
        ModeOfPacking => mode_of_packing, "mode_of_packing", "Mode of Packing", Text;
        InvoiceNo => invoice_no, "invoice_no", "Invoice No", Text;
        EwayBillNo => eway_bill_no, "eway_bill_no", "E-way Bill No", Text;
        DescriptionOfGoods => description_of_goods, "description_of_goods", "Description of Goods", Text;
        ContainerNo => container_no, "container_no", "Container No", Text;
        Value => value, "value", "Value", Text;
        NameOfClerk => name_of_clerk, "name_of_clerk", "Clerk Name", Text;
        EmptyYardName => empty_yard_name, "empty_yard_name", "Empty Yard Name", Text;
        RemarkIfAny => remark_if_any, "remark_if_any", "Remark (if any)", Text;
        ToBeBilledAt => to_be_billed_at, "to_be_billed_at", "To be billed at", Text;
        HireAmount => hire_amount, "hire_amount", "Hire Amount", Number;
        Risk => risk, "risk", "Risk", Text;
        AddressOfBillingOffice => address_of_billing_office, "address_of_billing_office", "Billing Office Address", Text;
        Rate => rate, "rate", "Rate", Number;
        Advance => advance, "advance", "Advance", Number;
        SubTotal => sub_total, "sub_total", "Sub Total", Number;
        Cgst => cgst, "cgst", "CGST", Number;
        Sgst => sgst, "sgst", "SGST", Number;
        Igst => igst, "igst", "IGST", Number;
        GrandTotal => grand_total, "grand_total", "Grand Total", Number;
        GstUp => gst_up, "gst_up", "GST UP", Text;
        IfGstOtherState => if_gst_other_state, "if_gst_other_state", "If GST Other State", Text;
    }
}

const REQUIRED: &[EntryField] = &[
    EntryField::BillNo,
    EntryField::BillDate,
    EntryField::LrNo,
    EntryField::LrDate,
    EntryField::ConsignorName,
    EntryField::ConsignorFromAddress,
    EntryField::ConsignorGstNo,
    EntryField::Consignee,
    EntryField::ConsignorToAddress,
    EntryField::VehicleNo,
    EntryField::From,
    EntryField::To,
    EntryField::Weight,
    EntryField::Fixed,
    EntryField::ModeOfPacking,
    EntryField::InvoiceNo,
    EntryField::DescriptionOfGoods,
    EntryField::Value,
    EntryField::NameOfClerk,
    EntryField::ToBeBilledAt,
    EntryField::Risk,
    EntryField::AddressOfBillingOffice,
    EntryField::Rate,
];

impl Record for Entry {
    type Field = EntryField;
    type Sub = ExtraCharge;
    const KIND: RecordKind = RecordKind::Entry;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn value(&self, field: EntryField) -> &str {
        field.get(self)
    }

    fn set_value(&mut self, field: EntryField, value: String) {
        *field.slot(self) = value;
    }

    fn subs(&self) -> &[ExtraCharge] {
        &self.extra_charges
    }

    fn subs_mut(&mut self) -> Option<&mut Vec<ExtraCharge>> {
        Some(&mut self.extra_charges)
    }

    fn blank_sub(id: SubId) -> Option<ExtraCharge> {
        Some(ExtraCharge::blank(id))
    }

    fn required_fields() -> &'static [EntryField] {
        REQUIRED
    }
}

impl Entry {
    /// Filters offered on the bill entry list.
    pub fn filter_presets() -> Vec<FilterConfig<EntryField>> {
        vec![
            FilterConfig::text(EntryField::ConsignorName, "Consignor Name"),
            FilterConfig::new(EntryField::BillDate, FilterKind::Range, "Bill Date Range"),
            FilterConfig::new(EntryField::BillDate, FilterKind::Sort, "Sort by Bill Date"),
        ]
    }

    /// Columns the bill entry search box can search, with their labels.
    pub const SEARCH_FIELDS: &'static [(&'static str, EntryField)] = &[
        ("Bill Number", EntryField::BillNo),
        ("Vehicle Number", EntryField::VehicleNo),
        ("LR Number", EntryField::LrNo),
    ];
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::FieldKey;

    #[test]
    fn extra_charge_type_uses_reserved_wire_name() {
        let charge: ExtraCharge =
            serde_json::from_str(r#"{"_id":"c1","type":"Toll","amount":"250"}"#).unwrap();
        assert_eq!(charge.value(ExtraChargeField::Type), "Toll");
        assert_eq!(ExtraChargeField::parse("type"), Some(ExtraChargeField::Type));
        assert_eq!(ExtraChargeField::Type.label(), "Extra Charge");
    }

    #[test]
    fn entry_embeds_party_and_charges() {
        let entry: Entry = serde_json::from_str(
            r#"{
                "_id": "e1",
                "bill_no": "17",
                "billing_party": {"_id": "p1", "name": "Acme"},
                "extra_charges": [{"_id": "c1", "type": "Toll", "amount": "250"}]
            }"#,
        )
        .unwrap();
        assert_eq!(entry.billing_party.name, "Acme");
        assert_eq!(entry.subs().len(), 1);
        assert!(entry.sub(&SubId::from("c1")).is_some());
        assert_eq!(entry.value(EntryField::BillNo), "17");
    }

    #[test]
    fn billing_party_is_not_an_editable_field() {
        assert!(EntryField::parse("billing_party").is_none());
        assert!(EntryField::parse("extra_charges").is_none());
        assert_eq!(EntryField::ALL.len(), 42);
    }
}
