// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared preferences used by Ledger list views (tax policy + notices).

use serde::{Deserialize, Serialize};

/// Config key under which [`LedgerPrefs`] are persisted.
pub const PREFS_KEY: &str = "ledger_prefs";

/// Saved preferences for the list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LedgerPrefs {
    /// GST split used by the entry form.
    #[serde(default)]
    pub tax: TaxPrefs,
    /// Toast queue behaviour.
    #[serde(default)]
    pub notices: NoticePrefs,
}

/// GST rates and the state treated as "home" (CGST + SGST instead of IGST).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxPrefs {
    /// State selector value that means intra-state billing.
    pub home_state: String,
    /// Rate applied once per half (CGST, SGST) for the home state.
    pub home_rate: f64,
    /// Rate applied as a single IGST line for other states.
    pub other_rate: f64,
}

impl Default for TaxPrefs {
    fn default() -> Self {
        Self {
            home_state: "UP".to_string(),
            home_rate: 0.06,
            other_rate: 0.12,
        }
    }
}

/// Toast lifetime and queue bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticePrefs {
    /// Time-to-live of a toast, in milliseconds.
    pub ttl_ms: u64,
    /// Maximum number of queued toasts; the oldest is dropped beyond this.
    pub max_visible: usize,
}

impl Default for NoticePrefs {
    fn default() -> Self {
        Self {
            ttl_ms: 2000,
            max_visible: 8,
        }
    }
}
