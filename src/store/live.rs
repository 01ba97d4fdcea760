//! Live-query subscription handles.

use super::Document;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the full current result set of a live query.
///
/// Every delivery replaces the previous one; observers that need per-item
/// diffing must keep their own previous-value snapshot.
pub type Observer = Arc<dyn Fn(&[Document]) + Send + Sync>;

/// Standing subscription to a live query.
///
/// The subscription is cancelled exactly once, either explicitly through
/// [`Subscription::unsubscribe`] or implicitly when the handle is dropped.
/// After cancellation the observer is never invoked again.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wraps a cancellation action into a single-call teardown handle.
    pub(crate) fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancels the subscription, stopping all further deliveries.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
