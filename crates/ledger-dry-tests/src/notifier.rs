// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Notifier fake that keeps every message.

use ledger_app_core::toast::{Notifier, ToastKind};

/// Records posted toasts in order; nothing expires.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    posted: Vec<(ToastKind, String)>,
}

impl RecordingNotifier {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every toast, oldest first.
    pub fn posted(&self) -> &[(ToastKind, String)] {
        &self.posted
    }

    /// Texts of toasts of one kind.
    pub fn texts(&self, kind: ToastKind) -> Vec<&str> {
        self.posted
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    /// Error toast texts.
    pub fn errors(&self) -> Vec<&str> {
        self.texts(ToastKind::Error)
    }

    /// Success toast texts.
    pub fn successes(&self) -> Vec<&str> {
        self.texts(ToastKind::Success)
    }

    /// `true` if nothing was posted.
    pub fn is_empty(&self) -> bool {
        self.posted.is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn post(&mut self, kind: ToastKind, text: &str) {
        self.posted.push((kind, text.to_string()));
    }
}
