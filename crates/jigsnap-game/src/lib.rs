//! Game session management for the Jigsnap puzzle.
//!
//! A [`Session`] holds the mutable state of one puzzle: where every piece is,
//! which slots are filled, what the tray looks like, and which piece is being
//! dragged. It validates drops according to a [`PlacementMode`], detects
//! completion by scanning every cell, and reports the visual consequences of
//! each operation as [`Effects`] for the presentation layer to apply.
//!
//! # Placement modes
//!
//! - [`PlacementMode::StrictSlot`]: a piece is accepted only by its own slot and
//!   is locked once placed. The tray keeps a placeholder where it was.
//! - [`PlacementMode::OpenSlot`]: any empty slot accepts any piece, and pieces
//!   can move between slots or back to the tray.
//! - [`PlacementMode::Snap`]: pieces move freely on the board and snap onto
//!   their final position when dropped close enough to it.
//!
//! # Examples
//!
//! ```
//! use jigsnap_core::{GridSize, ImageInfo, LayoutParams, Point, PuzzleConfig, Size};
//! use jigsnap_game::{DropOutcome, IgnoreReason, PlacementMode, Session};
//!
//! let grid = GridSize::new(2, 2).unwrap();
//! let image = ImageInfo { filename: "cat.jpg".into(), width: 400, height: 400 };
//! let config = PuzzleConfig::uniform(grid, image).unwrap();
//! let mut session = Session::with_viewport(
//!     config,
//!     Size::new(1200.0, 900.0),
//!     &LayoutParams::default(),
//!     PlacementMode::StrictSlot,
//! )
//! .unwrap();
//! session.start(7).unwrap();
//!
//! let mut ids = grid.ids();
//! let first = ids.next().unwrap();
//! let last = ids.last().unwrap();
//!
//! session.drag_start(first, Point::ZERO).unwrap();
//! let report = session.drop_on_slot(last);
//! assert_eq!(report.outcome, DropOutcome::Ignored(IgnoreReason::Mismatch));
//! assert_eq!(session.placed_count(), 0);
//! ```

mod board;
mod drag;
mod effect;
mod error;
mod mode;
mod outcome;
mod piece;
mod session;
mod tray;

pub use self::{
    board::Board,
    drag::{ActiveDrag, DragContext},
    effect::{Effect, Effects},
    error::GameError,
    mode::PlacementMode,
    outcome::{DropOutcome, DropReport, IgnoreReason},
    piece::{Piece, PieceLocation, PlacementState},
    session::{InvariantViolation, Phase, Session},
    tray::{Tray, TrayEntry},
};
