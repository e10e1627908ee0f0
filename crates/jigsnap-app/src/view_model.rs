//! Render-ready description of the current screen.
//!
//! The presentation layer renders these values as-is; it does not consult the
//! session. Everything is serializable so it can cross the wasm boundary.

use jigsnap_core::{PieceId, Point, Size};
use jigsnap_game::Phase;
use serde::Serialize;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
    pub struct PieceVisualState: u8 {
        const DRAGGING = 0b0000_0001;
        const PLACED = 0b0000_0010;
        const LOCKED = 0b0000_0100;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum AppViewModel {
    Entry,
    Puzzle(PuzzleViewModel),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleViewModel {
    pub container_classes: Vec<&'static str>,
    pub board: Size,
    pub tray: Size,
    /// Board slots in row-major order. Empty in snap mode.
    pub slots: Vec<SlotViewModel>,
    pub pieces: Vec<PieceViewModel>,
    /// Tray entries in visual order, `None` for placeholders. Empty in snap mode.
    pub tray_entries: Vec<Option<PieceId>>,
    pub overlay: Overlay,
    pub status: StatusViewModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotViewModel {
    pub id: PieceId,
    /// Top-left corner in board coordinates.
    pub position: Point,
    pub occupant: Option<PieceId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceViewModel {
    pub id: PieceId,
    pub src: String,
    pub size: Size,
    pub placement: PiecePlacement,
    pub draggable: bool,
    pub visual_state: PieceVisualState,
}

/// Where to render a piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PiecePlacement {
    /// Inside a board slot.
    Slot { slot: PieceId },
    /// At an index of the tray's flow layout.
    TrayEntry { index: usize },
    /// At an absolute tray-local position.
    Tray { position: Point },
    /// At an absolute board-local position.
    Board { position: Point },
}

/// The reference image drawn beneath the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Overlay {
    Hidden,
    /// Faint hint while cheat mode is on.
    Hint { src: String, opacity: f64 },
    /// Fully shown once the puzzle is complete.
    Revealed { src: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusViewModel {
    pub phase: Phase,
    pub placed: usize,
    pub total: usize,
    pub message: Option<&'static str>,
}
