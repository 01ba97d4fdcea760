//! Domain model for notifications.

mod notification;

pub use notification::{Notification, NotificationDraft, NotificationId, PersistedNotificationData};
