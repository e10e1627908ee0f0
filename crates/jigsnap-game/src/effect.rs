//! Presentation side effects.
//!
//! Session operations commit their state change synchronously and describe the
//! matching visual change as [`Effect`]s. The presentation layer plays them back
//! (possibly animated) after the fact; nothing in the game logic waits on them.

use jigsnap_core::{PieceId, Point};

/// A visual change produced by a committed state change.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Effect {
    /// Hide the piece while it is being dragged.
    HidePiece {
        /// The dragged piece.
        piece: PieceId,
    },
    /// Show the piece again after the drag ended.
    ShowPiece {
        /// The dragged piece.
        piece: PieceId,
    },
    /// Put the piece into a board slot.
    PlaceInSlot {
        /// The moved piece.
        piece: PieceId,
        /// Target slot.
        slot: PieceId,
    },
    /// Leave the piece at a free board position.
    MoveOnBoard {
        /// The moved piece.
        piece: PieceId,
        /// Board-local top-left position.
        to: Point,
    },
    /// Align the piece exactly onto its final board position.
    SnapPiece {
        /// The snapped piece.
        piece: PieceId,
        /// Board-local top-left position.
        to: Point,
    },
    /// Move the piece back into the tray.
    ReturnToTray {
        /// The returned piece.
        piece: PieceId,
        /// Tray-local position, for free-form trays.
        to: Option<Point>,
    },
    /// Disable dragging for the piece.
    LockPiece {
        /// The locked piece.
        piece: PieceId,
    },
    /// Mark the puzzle view as complete.
    MarkComplete,
    /// Fade in the full-resolution reference image.
    RevealReference,
    /// Replace bevelled piece images with their flat variants.
    SwapToFlatPieces,
}

/// Ordered list of effects produced by one operation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Effects(Vec<Effect>);

impl Effects {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, effect: Effect) {
        self.0.push(effect);
    }

    /// Whether no effect was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the effects in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.0.iter()
    }

    /// Whether `effect` is in the list.
    #[must_use]
    pub fn contains(&self, effect: &Effect) -> bool {
        self.0.contains(effect)
    }
}

impl IntoIterator for Effects {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Effects {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
