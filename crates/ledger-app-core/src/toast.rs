// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Toast queue with TTL + dedupe, and the fire-and-forget [`Notifier`] port
//! list views post their success/error messages through.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::prefs::NoticePrefs;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// An operation completed.
    Success,
    /// An operation failed or was rejected.
    Error,
    /// Informational note.
    Info,
}

impl ToastKind {
    /// Lowercase name, matching the message bar's style classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Fire-and-forget message sink. Implementations decide how long a message
/// stays visible; callers never wait on it.
pub trait Notifier {
    /// Post a message.
    fn post(&mut self, kind: ToastKind, text: &str);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn post(&mut self, kind: ToastKind, text: &str) {
        (**self).post(kind, text);
    }
}

/// Identifier for a toast entry.
pub type ToastId = u64;

/// Toast data stored in the service.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Stable identifier.
    pub id: ToastId,
    /// Severity.
    pub kind: ToastKind,
    /// Message text.
    pub text: String,
    /// Time-to-live duration.
    pub ttl: Duration,
    /// Creation time.
    pub created: Instant,
}

/// Rendering-friendly view of a toast.
#[derive(Debug, Clone)]
pub struct ToastRender {
    /// Stable identifier.
    pub id: ToastId,
    /// Severity.
    pub kind: ToastKind,
    /// Message text.
    pub text: String,
    /// 1.0 -> just created, 0.0 -> expired.
    pub progress: f32,
}

/// In-memory toast queue with TTL and dedupe window.
#[derive(Debug)]
pub struct ToastService {
    queue: VecDeque<Toast>,
    max: usize,
    ttl: Duration,
    dedupe_window: Duration,
    next_id: ToastId,
}

impl ToastService {
    /// Create a queue holding at most `max` toasts, each living 2 seconds.
    pub fn new(max: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            max: max.max(1),
            ttl: Duration::from_millis(2000),
            dedupe_window: Duration::from_millis(500),
            next_id: 1,
        }
    }

    /// Build a queue from saved notice preferences.
    pub fn from_prefs(prefs: &NoticePrefs) -> Self {
        Self::new(prefs.max_visible).with_ttl(Duration::from_millis(prefs.ttl_ms))
    }

    /// Override the default TTL used by [`Notifier::post`].
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Push a toast, deduping identical recent entries (same kind/text within `dedupe_window`).
    pub fn push<S>(&mut self, kind: ToastKind, text: S, now: Instant) -> ToastId
    where
        S: Into<String>,
    {
        let text = text.into();
        let ttl = self.ttl;

        if let Some(existing) = self.queue.iter_mut().find(|t| {
            t.kind == kind
                && t.text == text
                && now.saturating_duration_since(t.created) <= self.dedupe_window
        }) {
            existing.created = now;
            existing.ttl = ttl;
            return existing.id;
        }

        let id = self.next_id;
        self.next_id += 1;
        if self.queue.len() == self.max {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast {
            id,
            kind,
            text,
            ttl,
            created: now,
        });
        id
    }

    /// Remove a toast before it expires (the close button).
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|t| t.id != id);
        self.queue.len() != before
    }

    /// Drop expired toasts (call once per frame/tick).
    pub fn retain_visible(&mut self, now: Instant) {
        self.queue
            .retain(|t| now.saturating_duration_since(t.created) < t.ttl);
    }

    /// Return render-ready toasts with progress ratios.
    pub fn visible(&self, now: Instant) -> Vec<ToastRender> {
        self.queue
            .iter()
            .filter(|t| now.saturating_duration_since(t.created) < t.ttl)
            .map(|t| ToastRender {
                id: t.id,
                kind: t.kind,
                text: t.text.clone(),
                progress: 1.0
                    - (now.saturating_duration_since(t.created).as_secs_f32()
                        / t.ttl.as_secs_f32()),
            })
            .collect()
    }

    /// Number of queued toasts, expired or not.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::from_prefs(&NoticePrefs::default())
    }
}

impl Notifier for ToastService {
    fn post(&mut self, kind: ToastKind, text: &str) {
        self.push(kind, text, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let mut svc = ToastService::new(4).with_ttl(Duration::from_millis(100));
        let t0 = Instant::now();
        svc.push(ToastKind::Success, "Entry Updated", t0);
        assert_eq!(svc.visible(t0).len(), 1);
        let later = t0 + Duration::from_millis(150);
        assert!(svc.visible(later).is_empty());
        svc.retain_visible(later);
        assert!(svc.is_empty());
    }

    #[test]
    fn identical_toasts_inside_window_are_merged() {
        let mut svc = ToastService::new(4);
        let t0 = Instant::now();
        let a = svc.push(ToastKind::Error, "Rate is required", t0);
        let b = svc.push(ToastKind::Error, "Rate is required", t0 + Duration::from_millis(10));
        assert_eq!(a, b);
        assert_eq!(svc.len(), 1);
    }

    #[test]
    fn queue_is_bounded() {
        let mut svc = ToastService::new(2);
        let t0 = Instant::now();
        svc.push(ToastKind::Info, "one", t0);
        svc.push(ToastKind::Info, "two", t0);
        svc.push(ToastKind::Info, "three", t0);
        let texts: Vec<_> = svc.visible(t0).into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["two", "three"]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut svc = ToastService::new(4);
        let t0 = Instant::now();
        let a = svc.push(ToastKind::Info, "a", t0);
        svc.push(ToastKind::Info, "b", t0);
        assert!(svc.dismiss(a));
        assert!(!svc.dismiss(a));
        assert_eq!(svc.len(), 1);
    }
}
