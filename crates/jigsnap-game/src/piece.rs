//! Piece state.

use jigsnap_core::{PieceId, Point};

/// Where a piece currently is.
///
/// Every piece is in exactly one container at any time: the tray, a board
/// slot (grid modes), or a free position on the board (snap mode).
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant, serde::Serialize)]
pub enum PieceLocation {
    /// Waiting in the tray. Snap mode gives tray pieces an absolute
    /// tray-local position; grid modes order them by tray entry instead.
    Tray {
        /// Tray-local top-left position, if the tray is free-form.
        position: Option<Point>,
    },
    /// Inside a board slot.
    Slot(PieceId),
    /// Free on the board at a board-local top-left position.
    Board {
        /// Board-local top-left position.
        position: Point,
        /// Whether the piece was snapped onto its final position.
        snapped: bool,
    },
}

/// Whether a piece sits at its final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementState {
    /// Not at its final position.
    Unplaced,
    /// In its own slot, or snapped onto its final position.
    Placed,
}

/// A single puzzle piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    id: PieceId,
    target: Point,
    location: PieceLocation,
    movable: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, target: Point) -> Self {
        Self {
            id,
            target,
            location: PieceLocation::Tray { position: None },
            movable: true,
        }
    }

    /// The piece identity, equal to the identity of its home slot.
    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Final top-left position in source-image pixels.
    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Current location.
    #[must_use]
    pub fn location(&self) -> PieceLocation {
        self.location
    }

    /// Whether the piece may still be dragged.
    #[must_use]
    pub fn is_movable(&self) -> bool {
        self.movable
    }

    /// Whether the piece sits at its final position.
    #[must_use]
    pub fn placement_state(&self) -> PlacementState {
        match self.location {
            PieceLocation::Slot(slot) if slot == self.id => PlacementState::Placed,
            PieceLocation::Board { snapped: true, .. } => PlacementState::Placed,
            _ => PlacementState::Unplaced,
        }
    }

    pub(crate) fn set_location(&mut self, location: PieceLocation) {
        self.location = location;
    }

    pub(crate) fn lock(&mut self) -> bool {
        std::mem::replace(&mut self.movable, false)
    }
}
