// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scriptable [`RemoteReconciler`] fake.

use std::collections::{BTreeMap, VecDeque};
use std::future::{ready, Future};
use std::sync::{Arc, Mutex};

use ledger_core::ident::{RecordId, RecordKind};
use ledger_core::record::Record;
use ledger_core::remote::{RemoteError, RemoteReconciler};

/// In-memory server double.
///
/// `fetch_all` serves the seeded collection (or a scripted failure). Each
/// `commit` pops the next scripted outcome; with nothing scripted it echoes
/// the committed record back. Clones share state.
///
/// # Example
///
/// ```
/// use ledger_dry_tests::{billing_party, FakeRemote};
///
/// let remote = FakeRemote::with_records(vec![billing_party("p1", "Acme")]);
/// remote.push_rejection(&[("name", "Name is required")]);
/// assert_eq!(remote.commit_count(), 0);
/// ```
#[derive(Debug)]
pub struct FakeRemote<R> {
    inner: Arc<Mutex<FakeRemoteInner<R>>>,
}

impl<R> Clone for FakeRemote<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[derive(Debug)]
struct FakeRemoteInner<R> {
    records: Vec<R>,
    fetch_failure: Option<RemoteError>,
    outcomes: VecDeque<Result<Option<R>, RemoteError>>,
    commits: Vec<(RecordId, R)>,
    fetch_count: usize,
}

impl<R> Default for FakeRemote<R> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeRemoteInner {
                records: Vec::new(),
                fetch_failure: None,
                outcomes: VecDeque::new(),
                commits: Vec::new(),
                fetch_count: 0,
            })),
        }
    }
}

impl<R: Clone> FakeRemote<R> {
    /// Remote with an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remote serving `records`.
    pub fn with_records(records: Vec<R>) -> Self {
        let remote = Self::new();
        remote.lock().records = records;
        remote
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeRemoteInner<R>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make every subsequent fetch fail with `err` (`None` to heal).
    pub fn set_fetch_failure(&self, err: Option<RemoteError>) {
        self.lock().fetch_failure = err;
    }

    /// Script the next commit to succeed and return `record`.
    pub fn push_accept(&self, record: R) {
        self.lock().outcomes.push_back(Ok(Some(record)));
    }

    /// Script the next commit to succeed without echoing a record.
    pub fn push_accept_silent(&self) {
        self.lock().outcomes.push_back(Ok(None));
    }

    /// Script the next commit to fail validation with `(field, message)` pairs.
    pub fn push_rejection(&self, errors: &[(&str, &str)]) {
        let errors: BTreeMap<String, String> = errors
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        self.lock()
            .outcomes
            .push_back(Err(RemoteError::Rejected(errors)));
    }

    /// Script the next commit to fail in transport.
    pub fn push_transport_failure(&self, message: &str) {
        self.lock()
            .outcomes
            .push_back(Err(RemoteError::Transport(message.to_string())));
    }

    /// Every commit received, oldest first.
    pub fn commits(&self) -> Vec<(RecordId, R)> {
        self.lock().commits.clone()
    }

    /// Number of commits received.
    pub fn commit_count(&self) -> usize {
        self.lock().commits.len()
    }

    /// Number of fetches received.
    pub fn fetch_count(&self) -> usize {
        self.lock().fetch_count
    }
}

impl<R: Record> RemoteReconciler<R> for FakeRemote<R> {
    fn fetch_all(&self, _kind: RecordKind) -> impl Future<Output = Result<Vec<R>, RemoteError>> + Send {
        let mut inner = self.lock();
        inner.fetch_count += 1;
        let result = match &inner.fetch_failure {
            Some(err) => Err(err.clone()),
            None => Ok(inner.records.clone()),
        };
        ready(result)
    }

    fn commit(
        &self,
        id: &RecordId,
        record: &R,
    ) -> impl Future<Output = Result<Option<R>, RemoteError>> + Send {
        let mut inner = self.lock();
        inner.commits.push((id.clone(), record.clone()));
        let outcome = inner
            .outcomes
            .pop_front()
            .unwrap_or_else(|| Ok(Some(record.clone())));
        ready(outcome)
    }
}
