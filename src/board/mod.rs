//! The board interaction core.
//!
//! The board layer sits between live repository subscriptions and the
//! rendering layer: [`EntityStore`] mirrors the full result set of a watch
//! port, [`columns`] groups cards into ordered kanban columns,
//! [`DragDropCoordinator`] turns drag gestures into exactly one remote
//! write, [`stats`] derives dashboard counters, [`progress`] backs the
//! completion indicator, and [`archived`] models the archived list with
//! its restore actions.

mod archived;
mod columns;
mod coordinator;
mod entity_store;
mod progress;
mod stats;
mod writer;

pub use archived::{ArchivedListView, ArchivedRow};
pub use columns::{ProjectColumn, TaskColumn, project_columns, task_columns};
pub use coordinator::{
    DragDropCoordinator, DragError, DragState, DropEffect, DropZone, PermissiveGuard, ZoneGuard,
};
pub use entity_store::EntityStore;
pub use progress::{ProgressIndicator, advance_toward, clamp_percent};
pub use stats::{BoardStats, aggregate};
pub use writer::{BoardWriteError, BoardWriter, RepositoryBoardWriter};

#[cfg(test)]
mod tests;
