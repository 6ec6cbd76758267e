// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
//! GST calculator and the new-entry form that drives it.

use std::collections::BTreeMap;

use ledger_app_core::prefs::TaxPrefs;
use ledger_core::entry_form::{FormField, SELECT_PARTY_MESSAGE};
use ledger_core::model::{EntryField, ExtraChargeField};
use ledger_core::tax::{self, StateSelector, TaxPolicy};
use ledger_core::{DraftError, EntryForm, Record, SubId};
use ledger_dry_tests::{billing_party, RecordingNotifier, SequentialIds};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn home_state_without_extras() {
    let out = tax::compute(1000.0, &[], StateSelector::Home);
    assert!(close(out.tax, 60.0));
    assert!(close(out.subtotal, 1000.0));
    assert!(close(out.grand_total, 1120.0));
}

#[test]
fn other_state_with_one_extra() {
    let out = tax::compute(1000.0, &[500.0], StateSelector::Other);
    assert!(close(out.tax, 120.0));
    assert!(close(out.subtotal, 1500.0));
    assert!(close(out.grand_total, 1620.0));
}

/// Home-state GST is added once per half, so the grand total carries twice
/// the per-half amount. With the default rates both branches therefore
/// charge 12% overall, but on different bases: home doubles `rate * 6%`,
/// other adds `rate * 12%` once. Pinned so a change is deliberate.
#[test]
fn home_branch_adds_tax_twice() {
    let home = tax::compute(1000.0, &[500.0], StateSelector::Home);
    let other = tax::compute(1000.0, &[500.0], StateSelector::Other);
    assert!(close(home.grand_total, home.subtotal + 2.0 * home.tax));
    assert!(close(other.grand_total, other.subtotal + other.tax));
    assert!(close(home.grand_total, other.grand_total));
}

#[test]
fn only_the_tax_is_rounded() {
    let out = tax::compute(333.33, &[0.005], StateSelector::Home);
    // 333.33 * 0.06 = 19.9998 -> 20.00
    assert!(close(out.tax, 20.0));
    assert!(close(out.subtotal, 333.335));
    assert!(close(out.grand_total, 373.335));
}

#[test]
fn compute_is_deterministic() {
    let a = tax::compute(1234.56, &[10.0, 20.5], StateSelector::Other);
    let b = tax::compute(1234.56, &[10.0, 20.5], StateSelector::Other);
    assert_eq!(a, b);
}

#[test]
fn policy_follows_prefs() {
    let prefs = TaxPrefs {
        home_state: "MH".into(),
        home_rate: 0.09,
        other_rate: 0.18,
    };
    let policy = TaxPolicy::from(&prefs);
    assert_eq!(policy.selector_for("mh"), StateSelector::Home);
    assert_eq!(policy.selector_for("UP"), StateSelector::Other);
    let out = policy.compute(1000.0, &[], StateSelector::Home);
    assert!(close(out.tax, 90.0));
    assert!(close(out.grand_total, 1180.0));
}

#[test]
fn form_recomputes_on_rate_and_state() {
    let mut form = EntryForm::default();
    form.set_field(EntryField::Rate, "1000");
    let e = form.entry();
    assert_eq!(e.sub_total, "1000");
    assert_eq!(e.cgst, "60");
    assert_eq!(e.sgst, "60");
    assert_eq!(e.igst, "");
    assert_eq!(e.grand_total, "1120");

    form.select_state("MH");
    let e = form.entry();
    assert_eq!(form.state(), StateSelector::Other);
    assert_eq!(e.cgst, "");
    assert_eq!(e.sgst, "");
    assert_eq!(e.igst, "120");
    assert_eq!(e.grand_total, "1120");
}

#[test]
fn form_recomputes_on_extra_charges() {
    let mut form = EntryForm::default();
    let mut ids = SequentialIds::new();
    form.set_field(EntryField::Rate, "1000");
    form.set_state(StateSelector::Other);

    let toll = form.add_charge(&mut ids).unwrap();
    assert_eq!(form.entry().sub_total, "1000");
    form.set_charge_field(&toll, ExtraChargeField::Amount, "500")
        .unwrap();
    assert_eq!(form.entry().sub_total, "1500");
    assert_eq!(form.entry().grand_total, "1620");

    form.remove_charge(&toll).unwrap();
    assert_eq!(form.entry().sub_total, "1000");
    assert!(form.remove_charge(&toll).is_err());
}

#[test]
fn unparseable_rate_counts_as_zero() {
    let mut form = EntryForm::default();
    form.set_field(EntryField::Rate, "12abc");
    assert_eq!(form.entry().sub_total, "0");
    assert_eq!(form.entry().cgst, "0");
    assert_eq!(form.entry().grand_total, "0");
}

#[test]
fn derived_fields_cannot_be_overridden() {
    let mut form = EntryForm::default();
    form.set_field(EntryField::Rate, "1000");
    form.set_field(EntryField::GrandTotal, "1");
    assert_eq!(form.entry().grand_total, "1120");
}

#[test]
fn validate_requires_party_and_required_fields() {
    let mut form = EntryForm::default();
    let mut notes = RecordingNotifier::new();

    assert!(!form.validate(&mut notes));
    assert_eq!(notes.errors(), vec![SELECT_PARTY_MESSAGE]);
    assert_eq!(
        form.error(FormField::Entry(EntryField::BillNo)),
        Some("Bill No is required")
    );
    assert_eq!(
        form.error(FormField::BillingParty),
        Some(SELECT_PARTY_MESSAGE)
    );

    form.set_field(EntryField::BillNo, "17");
    assert!(form.error(FormField::Entry(EntryField::BillNo)).is_none());

    for field in <ledger_core::model::Entry as Record>::required_fields() {
        form.set_field(*field, "1");
    }
    form.select_party(Some(billing_party("p1", "Acme")));
    assert!(form.validate(&mut notes));
    assert!(form.errors().is_empty());
    assert_eq!(form.entry().billing_party.name, "Acme");
}

#[test]
fn server_errors_show_inline() {
    let mut form = EntryForm::default();
    let errors: BTreeMap<String, String> = [
        ("lr_no".to_string(), "LR Number is required".to_string()),
        ("billing_party".to_string(), "Unknown party".to_string()),
        ("mystery".to_string(), "ignored".to_string()),
    ]
    .into_iter()
    .collect();
    form.apply_server_errors(&errors);
    assert_eq!(form.errors().len(), 2);
    assert_eq!(
        form.error(FormField::Entry(EntryField::LrNo)),
        Some("LR Number is required")
    );
}

#[test]
fn charge_ids_give_up_after_repeated_collisions() {
    let mut form = EntryForm::default();
    let mut ids = SequentialIds::scripted(&["c1"; 40]);
    form.add_charge(&mut ids).unwrap();

    assert_eq!(
        form.add_charge(&mut ids).unwrap_err(),
        DraftError::IdCollision(SubId::new("c1"))
    );
    assert_eq!(form.entry().extra_charges.len(), 1);
}
