use jigsnap_core::{PieceId, Point};

use crate::Effects;

/// Why a drop left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, serde::Serialize)]
pub enum IgnoreReason {
    /// No drag was recorded before the drop.
    #[display("no active drag")]
    NoActiveDrag,
    /// The session is in setup or already complete.
    #[display("session not in progress")]
    NotInProgress,
    /// The drop kind does not apply to the session's placement mode.
    #[display("drop kind not used by this placement mode")]
    WrongMode,
    /// The target slot is outside the grid.
    #[display("unknown slot")]
    UnknownSlot,
    /// The slot belongs to a different piece.
    #[display("piece does not belong in this slot")]
    Mismatch,
    /// The slot already holds a piece.
    #[display("slot occupied")]
    SlotOccupied,
    /// The target does not accept pieces in this mode.
    #[display("invalid drop target")]
    InvalidTarget,
    /// The dragged piece is locked.
    #[display("piece locked")]
    Locked,
}

/// What a drop did.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant, serde::Serialize)]
pub enum DropOutcome {
    /// The piece went into a slot.
    Slotted {
        /// Target slot.
        slot: PieceId,
        /// Whether the slot is the piece's own.
        correct: bool,
    },
    /// The piece snapped onto its final board position.
    Snapped {
        /// Board-local top-left position.
        position: Point,
    },
    /// The piece stays free at the raw drop position.
    MovedOnBoard {
        /// Board-local top-left position.
        position: Point,
    },
    /// The piece went back into the tray.
    ReturnedToTray {
        /// Tray-local position, for free-form trays.
        position: Option<Point>,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Result of a drop: the outcome, whether it completed the puzzle, and the
/// effects to present.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DropReport {
    /// What happened to the dragged piece.
    pub outcome: DropOutcome,
    /// `true` only for the drop that completed the puzzle.
    pub completed: bool,
    /// Visual changes, in order.
    pub effects: Effects,
}

impl DropReport {
    pub(crate) fn ignored(reason: IgnoreReason) -> Self {
        Self {
            outcome: DropOutcome::Ignored(reason),
            completed: false,
            effects: Effects::new(),
        }
    }
}
