// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for draft editing, commits and filtering.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::ident::{RecordId, SubId};

/// Misuse of the per-field edit state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// No record with this id is loaded.
    #[error("unknown record {0}")]
    UnknownRecord(RecordId),
    /// `edit` was called for a key that is already being edited.
    #[error("{key} is already being edited")]
    AlreadyEditing {
        /// Display form of the draft key.
        key: String,
    },
    /// `set_draft`, `cancel` or `save_field` was called for a key not being edited.
    #[error("{key} is not being edited")]
    NotEditing {
        /// Display form of the draft key.
        key: String,
    },
    /// The addressed sub-record does not exist.
    #[error("unknown sub-record {0}")]
    UnknownSub(SubId),
    /// The id generator kept returning ids already in use.
    #[error("could not draw an unused sub-record id (last tried {0})")]
    IdCollision(SubId),
    /// The record kind has no nested collection.
    #[error("record has no nested collection")]
    NoNestedCollection,
}

/// Why a commit was refused or failed. Local state is intact in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The record is unknown.
    #[error(transparent)]
    Draft(#[from] DraftError),
    /// A commit for this id is still awaiting its outcome.
    #[error("a commit for {0} is already in flight")]
    InFlight(RecordId),
    /// The working copy equals the canonical record.
    #[error("no changes to commit")]
    NoChanges,
    /// Required fields are blank; messages are stored inline.
    #[error("{} required field(s) missing", .0.len())]
    Invalid(Vec<String>),
    /// The server rejected the record with field-level messages.
    #[error("rejected by server: {}", join_messages(.0))]
    Rejected(BTreeMap<String, String>),
    /// The request did not complete.
    #[error("transport failure: {0}")]
    Transport(String),
}

fn join_messages(errors: &BTreeMap<String, String>) -> String {
    errors.values().cloned().collect::<Vec<_>>().join("; ")
}

/// Invalid filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A date bound could not be parsed.
    #[error("invalid date {value:?} for {field}")]
    InvalidDate {
        /// Wire name of the filtered field.
        field: &'static str,
        /// The offending bound.
        value: String,
    },
    /// A numeric bound could not be parsed.
    #[error("invalid number {value:?} for {field}")]
    InvalidNumber {
        /// Wire name of the filtered field.
        field: &'static str,
        /// The offending bound.
        value: String,
    },
}
