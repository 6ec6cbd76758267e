// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Ledger list views (config, prefs, toasts).
//! Keeps view adapters thin and framework-agnostic.

pub mod config;
pub mod config_port;
pub mod prefs;
pub mod toast;
