use jigsnap_core::{PieceId, Point, PuzzleConfig, Rect, Size};

#[derive(Debug, Clone)]
pub enum Action {
    /// Leaves the entry screen for a new puzzle.
    Open {
        config: PuzzleConfig,
        viewport: Size,
        seed: u64,
    },
    Resize(Size),
    DragStart {
        piece: PieceId,
        grab_offset: Point,
    },
    DragEnd,
    DropOnSlot(PieceId),
    DropOnTray,
    /// A drop at a page position. `board_rect` is the board's page bounds.
    DropAt {
        pointer: Point,
        board_rect: Rect,
    },
    ToggleCheatMode,
    /// Discards the puzzle and returns to the entry screen.
    Reload,
}
