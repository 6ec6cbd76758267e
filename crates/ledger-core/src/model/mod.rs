// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Record kinds managed by the list views.

pub mod entry;
pub mod party;
pub mod vehicle;

pub use entry::{Entry, EntryField, ExtraCharge, ExtraChargeField};
pub use party::{BalanceParty, BalancePartyField, BillingParty, BillingPartyField};
pub use vehicle::{VehicleEntry, VehicleEntryField};
