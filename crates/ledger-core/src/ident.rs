// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Record and sub-record identifiers.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a top-level record (`_id` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a sub-record inside a record's nested collection.
///
/// Unique within that collection only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubId(String);

impl SubId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The four record kinds shown in list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Party an entry is billed to.
    BillingParty,
    /// Party tracked in vehicle balances.
    BalanceParty,
    /// LR / bill entry.
    Entry,
    /// Vehicle trip entry.
    VehicleEntry,
}

impl RecordKind {
    /// Toast posted after a successful commit.
    pub fn updated_message(self) -> &'static str {
        match self {
            Self::BillingParty => "Billing Party Updated",
            Self::BalanceParty => "Balance Party Updated",
            Self::Entry => "Entry Updated",
            Self::VehicleEntry => "Vehicle Entry Updated",
        }
    }

    /// Toast posted when the collection cannot be fetched.
    pub fn fetch_failed_message(self) -> &'static str {
        match self {
            Self::BillingParty => "Failed to fetch billing parties",
            Self::BalanceParty => "Failed to fetch balance parties",
            Self::Entry => "Failed to fetch entries",
            Self::VehicleEntry => "Failed to fetch vehicle entries",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BillingParty => "billing party",
            Self::BalanceParty => "balance party",
            Self::Entry => "entry",
            Self::VehicleEntry => "vehicle entry",
        })
    }
}

/// Source of fresh sub-record ids.
pub trait IdGenerator {
    /// Produce a new id. Callers retry on collision.
    fn new_id(&mut self) -> SubId;
}

/// Random 96-bit ids rendered as 24 lowercase hex digits.
#[derive(Debug)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    /// Seed from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn new_id(&mut self) -> SubId {
        let bytes: [u8; 12] = self.rng.gen();
        SubId(hex::encode(bytes))
    }
}
