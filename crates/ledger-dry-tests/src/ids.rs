// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic sub-record ids.

use std::collections::VecDeque;

use ledger_core::ident::{IdGenerator, SubId};

/// Hands out scripted ids first, then `sub-1`, `sub-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    scripted: VecDeque<String>,
    next: u64,
}

impl SequentialIds {
    /// Counter starting at `sub-1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `ids` in order before falling back to the counter; useful for
    /// forcing collisions.
    pub fn scripted(ids: &[&str]) -> Self {
        Self {
            scripted: ids.iter().map(|s| (*s).to_string()).collect(),
            next: 0,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn new_id(&mut self) -> SubId {
        if let Some(id) = self.scripted.pop_front() {
            return SubId::new(id);
        }
        self.next += 1;
        SubId::new(format!("sub-{}", self.next))
    }
}
