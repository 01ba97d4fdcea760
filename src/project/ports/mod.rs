//! Port contracts for project persistence and user confirmation.

pub mod confirm;
pub mod repository;

pub use confirm::{ConfirmationGate, FixedGate};
pub use repository::{
    ProjectFilter, ProjectObserver, ProjectRepository, ProjectRepositoryError,
    ProjectRepositoryResult,
};
