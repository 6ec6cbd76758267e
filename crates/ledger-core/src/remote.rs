// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port to the server that owns the canonical records.

use std::collections::BTreeMap;
use std::future::Future;

use thiserror::Error;

use crate::ident::{RecordId, RecordKind};
use crate::record::Record;

/// Failure reported by a [`RemoteReconciler`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Field-level validation failure, keyed by server field name.
    #[error("validation failed")]
    Rejected(BTreeMap<String, String>),
    /// The request did not complete (network, server error, bad payload).
    #[error("transport: {0}")]
    Transport(String),
}

/// Persists commits and serves the canonical collection.
pub trait RemoteReconciler<R: Record> {
    /// Fetch every record of `kind`.
    fn fetch_all(&self, kind: RecordKind) -> impl Future<Output = Result<Vec<R>, RemoteError>> + Send;

    /// Persist `record` under `id`. Returns the stored record, or `None`
    /// when the server does not echo it back.
    fn commit(
        &self,
        id: &RecordId,
        record: &R,
    ) -> impl Future<Output = Result<Option<R>, RemoteError>> + Send;
}
