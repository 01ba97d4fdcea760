//! Shared application state passed to every view.

use super::{Notice, NoticeQueue, Theme};
use crate::auth::domain::AuthUser;

/// State every screen needs: who is signed in, which theme applies, and
/// the pending transient notices.
///
/// The context is constructed once at startup and handed down
/// explicitly. Nothing in the crate reads it through a global.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    current_user: Option<AuthUser>,
    theme: Theme,
    notices: NoticeQueue,
}

impl AppContext {
    /// Creates a signed-out context with the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            current_user: None,
            theme,
            notices: NoticeQueue::new(),
        }
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&AuthUser> {
        self.current_user.as_ref()
    }

    /// Records a sign-in or sign-out reported by the auth gateway.
    pub fn set_current_user(&mut self, user: Option<AuthUser>) {
        self.current_user = user;
    }

    /// Returns the active theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches the active theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Returns a handle to the notice queue for producers to clone.
    #[must_use]
    pub const fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    /// Queues a transient notice for the next render.
    pub fn push_notice(&self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Takes all pending notices, leaving the queue empty.
    #[must_use]
    pub fn drain_notices(&self) -> Vec<Notice> {
        self.notices.drain()
    }
}
