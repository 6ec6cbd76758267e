// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Ledger crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`fixtures`] - Records with every required field filled in
//! - [`ids`] - Deterministic sub-record id generator
//! - [`notifier`] - Notifier that records every posted toast
//! - [`remote`] - Scriptable remote reconciler

pub mod config;
pub mod fixtures;
pub mod ids;
pub mod notifier;
pub mod remote;

pub use config::InMemoryConfigStore;
pub use fixtures::{balance_party, billing_party, charge, entry, vehicle_entry};
pub use ids::SequentialIds;
pub use notifier::RecordingNotifier;
pub use remote::FakeRemote;
