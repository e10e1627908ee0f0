use jigsnap_core::PieceId;

/// Errors from session lifecycle and drag operations.
///
/// Rejected drops are not errors; they are reported as
/// [`DropOutcome::Ignored`](crate::DropOutcome::Ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The session has already left the setup phase.
    #[display("session already started")]
    AlreadyStarted,
    /// The snap radius is negative or not finite.
    #[display("snap radius must be finite and non-negative")]
    InvalidSnapRadius,
    /// The session is not accepting input.
    #[display("session is not in progress")]
    NotInProgress,
    /// No piece has the given id.
    #[display("unknown piece {id}")]
    UnknownPiece {
        /// The requested id.
        id: PieceId,
    },
    /// The piece has been placed or the puzzle is complete.
    #[display("piece {id} can no longer be moved")]
    PieceLocked {
        /// The requested id.
        id: PieceId,
    },
}
