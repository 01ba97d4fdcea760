//! In-memory adapter backed by a schema-less document collection.

mod notification;

pub use notification::InMemoryNotificationRepository;
