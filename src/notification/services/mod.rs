//! Notification dispatch services.

mod dispatch;

pub use dispatch::{DispatchError, NotificationDispatcher};
