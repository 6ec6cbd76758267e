// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ledger core: editable-record reconciliation for billing list views.
#![forbid(unsafe_code)]
//!
//! Every list view (billing parties, balance parties, bill entries, vehicle
//! entries) follows the same pattern: a canonical collection fetched from the
//! server, a per-record [`ItemState`] holding a working copy plus pending
//! field drafts, and an explicit commit that reconciles the working copy with
//! the server. [`ListView`] owns that pattern; the record kinds in [`model`]
//! plug into it through the [`Record`] trait.
//!
//! Two pure engines sit beside it:
//!
//! - [`tax`] derives subtotal, GST lines and grand total from a rate and its
//!   extra charges; [`EntryForm`] reruns it on every input change.
//! - [`filter`] evaluates declarative text/date/sort criteria over a
//!   collection without mutating it.

#[macro_use]
mod macros;

pub mod date;
pub mod entry_form;
pub mod error;
pub mod filter;
pub mod ident;
pub mod item_state;
pub mod list_view;
pub mod model;
pub mod record;
pub mod remote;
pub mod tax;

pub use entry_form::EntryForm;
pub use error::{CommitError, DraftError, FilterError};
pub use filter::{
    apply_filters, search, Filter, FilterConfig, FilterForm, FilterKind, FilterOp, RangeBound,
    SortDirection,
};
pub use ident::{IdGenerator, RandomIds, RecordId, RecordKind, SubId};
pub use item_state::ItemState;
pub use list_view::{CommitTicket, ListView};
pub use record::{DraftKey, FieldKey, FieldKind, KeyOf, NoField, NoSub, Record, SubRecord};
pub use remote::{RemoteError, RemoteReconciler};
pub use tax::{StateSelector, TaxBreakdown, TaxPolicy};
