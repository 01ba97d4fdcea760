//! Transient user-facing notices.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A failed action.
    Error,
}

/// A short-lived message shown to the user and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    level: NoticeLevel,
    message: String,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Returns the severity.
    #[must_use]
    pub const fn level(&self) -> NoticeLevel {
        self.level
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Shared queue of pending notices, drained by the rendering layer.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    pending: Arc<Mutex<VecDeque<Notice>>>,
}

impl NoticeQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notice.
    pub fn push(&self, notice: Notice) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push_back(notice);
        }
    }

    /// Removes and returns every pending notice, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Notice> {
        self.pending
            .lock()
            .map(|mut pending| pending.drain(..).collect())
            .unwrap_or_default()
    }

    /// Returns whether anything is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.is_empty())
            .unwrap_or(true)
    }
}
