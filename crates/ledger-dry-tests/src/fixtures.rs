// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Record fixtures with every required field filled in, so a single edit is
//! enough to make them committable.

use ledger_core::ident::{RecordId, SubId};
use ledger_core::model::{BalanceParty, BillingParty, Entry, ExtraCharge, VehicleEntry};

/// Billing party `id` named `name`.
pub fn billing_party(id: &str, name: &str) -> BillingParty {
    BillingParty {
        id: RecordId::new(id),
        name: name.to_string(),
        address: "12 Transport Nagar, Kanpur".to_string(),
        gst_no: "09AAACA1234F1Z5".to_string(),
    }
}

/// Balance party `id` named `name`.
pub fn balance_party(id: &str, name: &str) -> BalanceParty {
    BalanceParty {
        id: RecordId::new(id),
        party_name: name.to_string(),
    }
}

/// Vehicle entry `id` for `party_name` on `date`.
pub fn vehicle_entry(id: &str, party_name: &str, date: &str) -> VehicleEntry {
    VehicleEntry {
        id: RecordId::new(id),
        movement_type: "Import".to_string(),
        date: date.to_string(),
        vehicle_no: format!("UP78-{id}"),
        from: "Kanpur".to_string(),
        to: "Lucknow".to_string(),
        freight: "12000".to_string(),
        driver_cash: "2000".to_string(),
        dala: "300".to_string(),
        kamisan: "500".to_string(),
        in_ac: "6000".to_string(),
        halting: "0".to_string(),
        balance: "3200".to_string(),
        party_name: party_name.to_string(),
        owner: "R. Singh".to_string(),
        status: "Pending".to_string(),
    }
}

/// Extra charge `id` of type `kind` for `amount`.
pub fn charge(id: &str, kind: &str, amount: &str) -> ExtraCharge {
    ExtraCharge {
        id: SubId::new(id),
        charge_type: kind.to_string(),
        amount: amount.to_string(),
        rate: String::new(),
        per_amount: String::new(),
    }
}

/// Bill entry `id` with `rate`, billed to a fixture party.
pub fn entry(id: &str, rate: &str) -> Entry {
    Entry {
        id: RecordId::new(id),
        bill_no: "101".to_string(),
        bill_date: "2024-04-01T00:00:00.000Z".to_string(),
        billing_party: billing_party("p-1", "Acme Logistics"),
        lr_no: "5501".to_string(),
        lr_date: "2024-03-30".to_string(),
        consignor_name: "Shree Textiles".to_string(),
        consignor_from_address: "Kanpur".to_string(),
        consignor_gst_no: "09BBBCS5678K1Z2".to_string(),
        consignee: "Metro Traders".to_string(),
        consignor_to_address: "Delhi".to_string(),
        vehicle_no: "UP78AB1234".to_string(),
        from: "Kanpur".to_string(),
        to: "Delhi".to_string(),
        weight: "900".to_string(),
        fixed: "Fixed".to_string(),
        mode_of_packing: "Bales".to_string(),
        invoice_no: "INV-77".to_string(),
        description_of_goods: "Cotton yarn".to_string(),
        value: "250000".to_string(),
        name_of_clerk: "Mohan".to_string(),
        to_be_billed_at: "Kanpur".to_string(),
        risk: "Owner".to_string(),
        address_of_billing_office: "Kanpur".to_string(),
        rate: rate.to_string(),
        ..Entry::default()
    }
}
