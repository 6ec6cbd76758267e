// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! GST calculator for bill entries.
//!
//! Home-state billing splits GST into CGST and SGST lines; any other state is
//! billed a single IGST line. Only the GST amount is rounded (half up, two
//! decimals); subtotal and grand total are plain sums.
//!
//! Note the home-state grand total adds the per-half amount twice, so with
//! the default 6% home rate the effective GST is 12% on both branches.

use ledger_app_core::prefs::TaxPrefs;

use crate::model::{Entry, ExtraChargeField};
use crate::record::SubRecord;

/// Which GST branch applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateSelector {
    /// Intra-state: CGST + SGST.
    #[default]
    Home,
    /// Inter-state: IGST.
    Other,
}

/// GST rates and the state they are keyed on.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxPolicy {
    /// State code treated as [`StateSelector::Home`].
    pub home_state: String,
    /// Rate of each home-state half.
    pub home_rate: f64,
    /// IGST rate.
    pub other_rate: f64,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::from(&TaxPrefs::default())
    }
}

impl From<&TaxPrefs> for TaxPolicy {
    fn from(prefs: &TaxPrefs) -> Self {
        Self {
            home_state: prefs.home_state.clone(),
            home_rate: prefs.home_rate,
            other_rate: prefs.other_rate,
        }
    }
}

/// Output of [`TaxPolicy::compute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBreakdown {
    /// Branch the figures were computed for.
    pub state: StateSelector,
    /// Rounded GST amount (per half on the home branch).
    pub tax: f64,
    /// Rate plus extra charges.
    pub subtotal: f64,
    /// Subtotal plus GST.
    pub grand_total: f64,
}

impl TaxBreakdown {
    /// CGST line; home branch only.
    pub fn cgst(&self) -> Option<f64> {
        (self.state == StateSelector::Home).then_some(self.tax)
    }

    /// SGST line; home branch only.
    pub fn sgst(&self) -> Option<f64> {
        self.cgst()
    }

    /// IGST line; other-state branch only.
    pub fn igst(&self) -> Option<f64> {
        (self.state == StateSelector::Other).then_some(self.tax)
    }

    /// Write the derived figures into an entry's string fields.
    pub fn apply_to(&self, entry: &mut Entry) {
        entry.sub_total = format_amount(self.subtotal);
        entry.cgst = self.cgst().map(format_amount).unwrap_or_default();
        entry.sgst = self.sgst().map(format_amount).unwrap_or_default();
        entry.igst = self.igst().map(format_amount).unwrap_or_default();
        entry.grand_total = format_amount(self.grand_total);
    }
}

impl TaxPolicy {
    /// Branch for a state code; matching is case-insensitive.
    pub fn selector_for(&self, state: &str) -> StateSelector {
        if state.trim().eq_ignore_ascii_case(self.home_state.trim()) {
            StateSelector::Home
        } else {
            StateSelector::Other
        }
    }

    /// Rate applied for `state`.
    pub fn rate_for(&self, state: StateSelector) -> f64 {
        match state {
            StateSelector::Home => self.home_rate,
            StateSelector::Other => self.other_rate,
        }
    }

    /// Derive GST and totals.
    pub fn compute(&self, rate: f64, extra_charges: &[f64], state: StateSelector) -> TaxBreakdown {
        let tax = round2(rate * self.rate_for(state));
        let subtotal = rate + extra_charges.iter().sum::<f64>();
        let grand_total = match state {
            StateSelector::Home => subtotal + 2.0 * tax,
            StateSelector::Other => subtotal + tax,
        };
        TaxBreakdown {
            state,
            tax,
            subtotal,
            grand_total,
        }
    }

    /// Derive GST and totals from an entry's string-valued `rate` and extra charge amounts.
    pub fn compute_for(&self, entry: &Entry, state: StateSelector) -> TaxBreakdown {
        let extras: Vec<f64> = entry
            .extra_charges
            .iter()
            .map(|c| parse_amount(c.value(ExtraChargeField::Amount)))
            .collect();
        self.compute(parse_amount(&entry.rate), &extras, state)
    }
}

/// [`TaxPolicy::compute`] with the default rates.
pub fn compute(rate: f64, extra_charges: &[f64], state: StateSelector) -> TaxBreakdown {
    TaxPolicy::default().compute(rate, extra_charges, state)
}

/// Round half up to two decimals.
pub fn round2(x: f64) -> f64 {
    (x * 100.0 + 0.5).floor() / 100.0
}

/// Lenient number parse: blank or unparseable input counts as zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Shortest round-trip decimal form, without a trailing `.0`.
pub fn format_amount(x: f64) -> String {
    if x == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    x.to_string()
}
