//! Per-session drag state.

use jigsnap_core::{PieceId, Point};

/// The drag gesture currently in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    /// The dragged piece.
    pub piece: PieceId,
    /// Pointer position relative to the piece's top-left corner at grab time.
    pub grab_offset: Point,
}

/// Interaction context owned by a session.
///
/// At most one drag is active. Starting a new drag replaces the previous one;
/// the user agent is trusted to deliver one gesture at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragContext {
    active: Option<ActiveDrag>,
}

impl DragContext {
    /// The active drag, if any.
    #[must_use]
    pub fn active(&self) -> Option<ActiveDrag> {
        self.active
    }

    pub(crate) fn begin(&mut self, drag: ActiveDrag) -> Option<ActiveDrag> {
        self.active.replace(drag)
    }

    pub(crate) fn end(&mut self) -> Option<ActiveDrag> {
        self.active.take()
    }
}
