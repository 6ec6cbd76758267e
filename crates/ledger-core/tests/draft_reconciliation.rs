// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Field-level draft lifecycle: edit, type, cancel, save, abort, sub-records.

use ledger_core::model::{
    BalanceParty, BalancePartyField, BillingPartyField, Entry, EntryField, ExtraChargeField,
    VehicleEntryField,
};
use ledger_core::{DraftError, DraftKey, KeyOf, ListView, Record, RecordId, SubId};
use ledger_dry_tests::{balance_party, billing_party, charge, entry, vehicle_entry, SequentialIds};
use proptest::prelude::*;

fn rid(id: &str) -> RecordId {
    RecordId::new(id)
}

#[test]
fn cancel_leaves_working_copy_untouched() {
    let mut view = ListView::with_records(vec![billing_party("p1", "Acme")]);
    let key = DraftKey::Field(BillingPartyField::Name);

    view.edit(&rid("p1"), &key).unwrap();
    view.set_draft(&rid("p1"), &key, "Acme Roadways").unwrap();
    view.cancel(&rid("p1"), &key).unwrap();

    let state = view.state(&rid("p1")).unwrap();
    assert!(!state.is_editing(&key));
    assert_eq!(state.local_item().name, "Acme");
    assert!(!view.has_changes(&rid("p1")));
}

#[test]
fn save_field_commits_exactly_one_field() {
    let mut view = ListView::with_records(vec![billing_party("p1", "Acme")]);
    let name = DraftKey::Field(BillingPartyField::Name);
    let address = DraftKey::Field(BillingPartyField::Address);

    view.edit(&rid("p1"), &name).unwrap();
    view.edit(&rid("p1"), &address).unwrap();
    view.set_draft(&rid("p1"), &name, "Acme Roadways").unwrap();
    view.set_draft(&rid("p1"), &address, "somewhere else").unwrap();
    view.save_field(&rid("p1"), &name).unwrap();

    let state = view.state(&rid("p1")).unwrap();
    assert_eq!(state.local_item().name, "Acme Roadways");
    assert_eq!(state.local_item().address, "12 Transport Nagar, Kanpur");
    assert!(!state.is_editing(&name));
    assert_eq!(state.draft(&address), Some("somewhere else"));
    assert!(view.has_changes(&rid("p1")));
    // canonical record is untouched until commit
    assert_eq!(view.record(&rid("p1")).unwrap().name, "Acme");
}

#[test]
fn edit_twice_is_refused() {
    let mut view = ListView::with_records(vec![balance_party("b1", "Sharma")]);
    let key = DraftKey::Field(BalancePartyField::PartyName);
    view.edit(&rid("b1"), &key).unwrap();
    assert!(matches!(
        view.edit(&rid("b1"), &key),
        Err(DraftError::AlreadyEditing { .. })
    ));
}

#[test]
fn operations_on_idle_keys_are_refused() {
    let mut view = ListView::with_records(vec![balance_party("b1", "Sharma")]);
    let key = DraftKey::Field(BalancePartyField::PartyName);
    assert!(matches!(
        view.set_draft(&rid("b1"), &key, "x"),
        Err(DraftError::NotEditing { .. })
    ));
    assert!(matches!(
        view.cancel(&rid("b1"), &key),
        Err(DraftError::NotEditing { .. })
    ));
    assert!(matches!(
        view.save_field(&rid("b1"), &key),
        Err(DraftError::NotEditing { .. })
    ));
    assert_eq!(
        view.edit(&rid("nope"), &key),
        Err(DraftError::UnknownRecord(rid("nope")))
    );
}

#[test]
fn saving_an_unchanged_draft_is_not_a_change() {
    let mut view = ListView::with_records(vec![balance_party("b1", "Sharma")]);
    let key = DraftKey::Field(BalancePartyField::PartyName);
    view.edit(&rid("b1"), &key).unwrap();
    view.save_field(&rid("b1"), &key).unwrap();
    assert!(!view.has_changes(&rid("b1")));
}

#[test]
fn date_drafts_are_seeded_in_input_format() {
    let mut view = ListView::with_records(vec![entry("e1", "1000")]);
    let key = DraftKey::Field(EntryField::BillDate);
    view.edit(&rid("e1"), &key).unwrap();
    assert_eq!(
        view.state(&rid("e1")).unwrap().draft(&key),
        Some("2024-04-01")
    );

    let mut vehicles = ListView::with_records(vec![vehicle_entry("v1", "Sharma", "someday")]);
    let key = DraftKey::Field(VehicleEntryField::Date);
    vehicles.edit(&rid("v1"), &key).unwrap();
    assert_eq!(vehicles.state(&rid("v1")).unwrap().draft(&key), Some("someday"));
}

#[test]
fn abort_resets_everything_for_the_record() {
    let mut view = ListView::with_records(vec![entry("e1", "1000")]);
    let id = rid("e1");
    let rate = DraftKey::Field(EntryField::Rate);
    view.edit(&id, &rate).unwrap();
    view.set_draft(&id, &rate, "2000").unwrap();
    view.save_field(&id, &rate).unwrap();
    view.edit(&id, &DraftKey::Field(EntryField::Risk)).unwrap();
    view.toggle_open(&id).unwrap();
    assert!(view.has_changes(&id));

    view.abort(&id).unwrap();

    let state = view.state(&id).unwrap();
    assert_eq!(state.local_item(), view.record(&id).unwrap());
    assert!(state.drafts().is_empty());
    assert!(state.field_errors().is_empty());
    assert!(state.is_open(), "expansion is view state, not draft state");
    assert!(!view.has_changes(&id));
}

#[test]
fn has_changes_is_false_for_unknown_ids() {
    let view: ListView<BalanceParty> = ListView::new();
    assert!(!view.has_changes(&rid("ghost")));
}

#[test]
fn duplicate_ids_keep_the_first_record() {
    let view = ListView::with_records(vec![
        balance_party("b1", "First"),
        balance_party("b1", "Second"),
        balance_party("b2", "Other"),
    ]);
    assert_eq!(view.len(), 2);
    assert_eq!(view.record(&rid("b1")).unwrap().party_name, "First");
}

#[test]
fn add_sub_opens_first_field_and_retries_collisions() {
    let mut base = entry("e1", "1000");
    base.extra_charges.push(charge("sub-1", "Toll", "250"));
    let mut view = ListView::with_records(vec![base]);
    let id = rid("e1");
    // both scripted ids and the first counter id collide with the existing charge
    let mut ids = SequentialIds::scripted(&["sub-1", "sub-1"]);

    let sub = view.add_sub(&id, &mut ids, true).unwrap();
    assert_eq!(sub, SubId::new("sub-2"));

    let state = view.state(&id).unwrap();
    assert_eq!(state.local_item().extra_charges.len(), 2);
    let first: KeyOf<Entry> = DraftKey::Sub(sub.clone(), ExtraChargeField::Type);
    assert_eq!(state.draft(&first), Some(""));
    assert!(view.has_changes(&id));
}

#[test]
fn add_sub_needs_a_nested_collection() {
    let mut view = ListView::with_records(vec![balance_party("b1", "Sharma")]);
    let mut ids = SequentialIds::new();
    assert_eq!(
        view.add_sub(&rid("b1"), &mut ids, false),
        Err(DraftError::NoNestedCollection)
    );
}

#[test]
fn sub_record_fields_edit_like_top_level_fields() {
    let mut base = entry("e1", "1000");
    base.extra_charges.push(charge("c1", "Toll", "250"));
    let mut view = ListView::with_records(vec![base]);
    let id = rid("e1");
    let amount: KeyOf<Entry> = DraftKey::Sub(SubId::new("c1"), ExtraChargeField::Amount);

    view.edit(&id, &amount).unwrap();
    assert_eq!(view.state(&id).unwrap().draft(&amount), Some("250"));
    view.set_draft(&id, &amount, "300").unwrap();
    view.save_field(&id, &amount).unwrap();
    assert_eq!(view.state(&id).unwrap().local_item().extra_charges[0].amount, "300");

    let missing: KeyOf<Entry> = DraftKey::Sub(SubId::new("zz"), ExtraChargeField::Amount);
    assert_eq!(
        view.edit(&id, &missing),
        Err(DraftError::UnknownSub(SubId::new("zz")))
    );
}

#[test]
fn removing_a_sub_record_purges_its_keys() {
    let mut base = entry("e1", "1000");
    base.extra_charges.push(charge("c1", "Toll", "250"));
    base.extra_charges.push(charge("c2", "Loading", "100"));
    let mut view = ListView::with_records(vec![base]);
    let id = rid("e1");
    let c1_type: KeyOf<Entry> = DraftKey::Sub(SubId::new("c1"), ExtraChargeField::Type);
    let c1_amount: KeyOf<Entry> = DraftKey::Sub(SubId::new("c1"), ExtraChargeField::Amount);
    let c2_amount: KeyOf<Entry> = DraftKey::Sub(SubId::new("c2"), ExtraChargeField::Amount);
    let rate: KeyOf<Entry> = DraftKey::Field(EntryField::Rate);

    for key in [&c1_type, &c1_amount, &c2_amount, &rate] {
        view.edit(&id, key).unwrap();
    }
    view.remove_sub(&id, &SubId::new("c1")).unwrap();

    let state = view.state(&id).unwrap();
    assert!(state.local_item().sub(&SubId::new("c1")).is_none());
    assert!(!state.is_editing(&c1_type));
    assert!(!state.is_editing(&c1_amount));
    assert!(state.is_editing(&c2_amount));
    assert!(state.is_editing(&rate));
    assert!(state
        .drafts()
        .keys()
        .all(|k| k.sub_id() != Some(&SubId::new("c1"))));

    assert_eq!(
        view.remove_sub(&id, &SubId::new("c1")),
        Err(DraftError::UnknownSub(SubId::new("c1")))
    );
}

#[test]
fn toggle_open_flips() {
    let mut view = ListView::with_records(vec![balance_party("b1", "Sharma")]);
    assert!(view.toggle_open(&rid("b1")).unwrap());
    assert!(!view.toggle_open(&rid("b1")).unwrap());
}

#[test]
fn remove_drops_record_and_state() {
    let mut view = ListView::with_records(vec![balance_party("b1", "Sharma")]);
    assert!(view.remove(&rid("b1")).is_some());
    assert!(view.state(&rid("b1")).is_none());
    assert!(view.is_empty());
}

#[derive(Debug, Clone)]
enum Op {
    Edit(usize),
    Type(usize, String),
    Save(usize),
    Cancel(usize),
    AddCharge,
    RemoveFirstCharge,
}

fn op() -> impl Strategy<Value = Op> {
    let field = 0..64usize;
    prop_oneof![
        field.clone().prop_map(Op::Edit),
        (field.clone(), "[a-z0-9]{0,6}").prop_map(|(f, v)| Op::Type(f, v)),
        field.clone().prop_map(Op::Save),
        field.prop_map(Op::Cancel),
        Just(Op::AddCharge),
        Just(Op::RemoveFirstCharge),
    ]
}

proptest! {
    #[test]
    fn abort_is_total(ops in proptest::collection::vec(op(), 0..40)) {
        let mut view = ListView::with_records(vec![entry("e1", "1000")]);
        let id = rid("e1");
        let mut ids = SequentialIds::new();

        for op in ops {
            // individual steps may legitimately be refused; only the end state matters
            let _ = match op {
                Op::Edit(i) => view.edit(&id, &DraftKey::Field(field_at(i))),
                Op::Type(i, v) => view.set_draft(&id, &DraftKey::Field(field_at(i)), v),
                Op::Save(i) => view.save_field(&id, &DraftKey::Field(field_at(i))),
                Op::Cancel(i) => view.cancel(&id, &DraftKey::Field(field_at(i))),
                Op::AddCharge => view.add_sub(&id, &mut ids, true).map(|_| ()),
                Op::RemoveFirstCharge => {
                    let first = view.state(&id).unwrap().local_item().extra_charges.first().map(|c| c.id.clone());
                    match first {
                        Some(sub) => view.remove_sub(&id, &sub),
                        None => Ok(()),
                    }
                }
            };
        }

        view.abort(&id).unwrap();
        let state = view.state(&id).unwrap();
        prop_assert_eq!(state.local_item(), view.record(&id).unwrap());
        prop_assert!(state.drafts().is_empty());
        prop_assert!(state.editing().next().is_none());
        prop_assert!(!view.has_changes(&id));
    }
}

fn field_at(i: usize) -> EntryField {
    use ledger_core::FieldKey;
    EntryField::ALL[i % EntryField::ALL.len()]
}
