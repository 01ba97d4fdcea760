//! Drag-and-drop state machine over the board write port.
//!
//! A drag moves through `Idle` -> `Dragging` -> `Hovering` and back; the
//! only remote side effect is the single write issued by a completed drop.
//! A failed write surfaces a transient notice and changes nothing locally,
//! so the live subscription remains the sole corrector of card state.

use super::writer::BoardWriter;
use crate::app::{Notice, NoticeQueue};
use crate::project::domain::{ProjectId, ProjectStatus};
use std::sync::Arc;
use thiserror::Error;

/// A target a dragged card can be released over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    /// A board column; dropping updates the card's status.
    Column(ProjectStatus),
    /// The archive rail; dropping sets the archived flag.
    Archive,
    /// The trash rail; dropping permanently deletes the card.
    Trash,
}

/// Per-zone acceptance policy consulted before hover and drop.
///
/// A zone whose guard returns `false` rejects `hover_enter` and `drop`,
/// and renders disabled while that card is dragged.
#[cfg_attr(test, mockall::automock)]
pub trait ZoneGuard: Send + Sync {
    /// Returns whether the zone accepts the dragged card.
    fn accepts(&self, card: ProjectId, zone: DropZone) -> bool;
}

/// Guard that accepts every card in every zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveGuard;

impl ZoneGuard for PermissiveGuard {
    fn accepts(&self, _card: ProjectId, _zone: DropZone) -> bool {
        true
    }
}

/// Current drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// A card is held but not over any zone.
    Dragging {
        /// The held card.
        card: ProjectId,
    },
    /// A card is held over an accepting zone.
    Hovering {
        /// The held card.
        card: ProjectId,
        /// The zone under the pointer.
        zone: DropZone,
    },
}

/// The write a completed drop issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// The card moved to a column.
    Moved(ProjectStatus),
    /// The card was archived.
    Archived,
    /// The card was deleted.
    Deleted,
    /// The backend rejected the write; a notice was queued and no local
    /// state changed.
    WriteRejected,
}

/// Errors for gesture events arriving in the wrong state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DragError {
    /// A second drag began before the first ended.
    #[error("a drag is already in progress")]
    AlreadyDragging,

    /// A hover or drop event arrived with no drag in progress.
    #[error("no drag in progress")]
    NotDragging,

    /// The zone's guard rejected the card.
    #[error("the zone does not accept this card")]
    ZoneRejected,

    /// Drop fired while the card was not over a zone.
    #[error("the card is not over a drop zone")]
    NotOverZone,
}

/// Drag-and-drop coordinator.
pub struct DragDropCoordinator<W, G>
where
    W: BoardWriter,
    G: ZoneGuard,
{
    writer: Arc<W>,
    guard: Arc<G>,
    notices: NoticeQueue,
    state: DragState,
}

impl<W, G> DragDropCoordinator<W, G>
where
    W: BoardWriter,
    G: ZoneGuard,
{
    /// Creates an idle coordinator.
    #[must_use]
    pub const fn new(writer: Arc<W>, guard: Arc<G>, notices: NoticeQueue) -> Self {
        Self {
            writer,
            guard,
            notices,
            state: DragState::Idle,
        }
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Returns whether the zone should render enabled for the current drag.
    ///
    /// With no drag in progress every zone renders enabled.
    #[must_use]
    pub fn zone_enabled(&self, zone: DropZone) -> bool {
        match self.state {
            DragState::Idle => true,
            DragState::Dragging { card } | DragState::Hovering { card, .. } => {
                self.guard.accepts(card, zone)
            }
        }
    }

    /// Picks a card up.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::AlreadyDragging`] when a drag is in progress.
    pub fn begin_drag(&mut self, card: ProjectId) -> Result<(), DragError> {
        if self.state != DragState::Idle {
            return Err(DragError::AlreadyDragging);
        }
        self.state = DragState::Dragging { card };
        Ok(())
    }

    /// Moves the held card over a zone.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] with no drag in progress and
    /// [`DragError::ZoneRejected`] when the zone's guard declines the
    /// card; the gesture stays in its previous state either way.
    pub fn hover_enter(&mut self, zone: DropZone) -> Result<(), DragError> {
        let card = match self.state {
            DragState::Idle => return Err(DragError::NotDragging),
            DragState::Dragging { card } | DragState::Hovering { card, .. } => card,
        };
        if !self.guard.accepts(card, zone) {
            return Err(DragError::ZoneRejected);
        }
        self.state = DragState::Hovering { card, zone };
        Ok(())
    }

    /// Moves the held card off the zone it was hovering.
    ///
    /// A leave while merely dragging is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] with no drag in progress.
    pub fn hover_leave(&mut self) -> Result<(), DragError> {
        match self.state {
            DragState::Idle => Err(DragError::NotDragging),
            DragState::Dragging { .. } => Ok(()),
            DragState::Hovering { card, .. } => {
                self.state = DragState::Dragging { card };
                Ok(())
            }
        }
    }

    /// Abandons the gesture without any write.
    pub const fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Releases the card over the hovered zone, issuing exactly one
    /// remote write.
    ///
    /// A rejected write queues an error notice and reports
    /// [`DropEffect::WriteRejected`]; local card state is never touched,
    /// so the next live snapshot shows the authoritative positions.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] with no drag in progress and
    /// [`DragError::NotOverZone`] when the card is not over a zone. The
    /// gesture ends in `Idle` only after a valid drop.
    pub async fn drop_card(&mut self) -> Result<DropEffect, DragError> {
        let (card, zone) = match self.state {
            DragState::Idle => return Err(DragError::NotDragging),
            DragState::Dragging { .. } => return Err(DragError::NotOverZone),
            DragState::Hovering { card, zone } => (card, zone),
        };
        // Hover state can only hold a zone the guard accepted.
        self.state = DragState::Idle;

        let written = match zone {
            DropZone::Column(status) => self
                .writer
                .set_status(card, status)
                .await
                .map(|()| DropEffect::Moved(status)),
            DropZone::Archive => self.writer.archive(card).await.map(|()| DropEffect::Archived),
            DropZone::Trash => self.writer.delete(card).await.map(|()| DropEffect::Deleted),
        };
        match written {
            Ok(effect) => Ok(effect),
            Err(err) => {
                self.notices
                    .push(Notice::error(format!("The move was not saved: {err}")));
                Ok(DropEffect::WriteRejected)
            }
        }
    }
}

impl<W, G> std::fmt::Debug for DragDropCoordinator<W, G>
where
    W: BoardWriter,
    G: ZoneGuard,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragDropCoordinator")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
