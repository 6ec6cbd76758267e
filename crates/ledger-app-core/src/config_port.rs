// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port shared across Ledger tools.

use tracing::warn;

use crate::config::{ConfigService, ConfigStore};
use crate::prefs::{LedgerPrefs, PREFS_KEY};

/// Config-facing port for loading/saving ledger preferences.
pub trait ConfigPort {
    /// Load preferences (returns None if missing or unreadable).
    fn load_prefs(&self) -> Option<LedgerPrefs>;
    /// Persist preferences (best-effort; errors are logged, not returned).
    fn save_prefs(&self, prefs: &LedgerPrefs);
}

impl<S> ConfigPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_prefs(&self) -> Option<LedgerPrefs> {
        match self.load::<LedgerPrefs>(PREFS_KEY) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(%err, key = PREFS_KEY, "could not load prefs");
                None
            }
        }
    }

    fn save_prefs(&self, prefs: &LedgerPrefs) {
        if let Err(err) = self.save(PREFS_KEY, prefs) {
            warn!(%err, key = PREFS_KEY, "could not save prefs");
        }
    }
}
