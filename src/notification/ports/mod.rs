//! Port contracts for notification persistence.

pub mod repository;

pub use repository::{
    NotificationObserver, NotificationRepository, NotificationRepositoryError,
    NotificationRepositoryResult,
};
