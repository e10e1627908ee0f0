use jigsnap_core::{Layout, LayoutError, LayoutParams, PieceId, Point, PuzzleConfig, Rect, Size, compute_layout};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::{
    ActiveDrag, Board, DragContext, DropOutcome, DropReport, Effect, Effects, GameError,
    IgnoreReason, Piece, PieceLocation, PlacementMode, Tray,
};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, serde::Serialize)]
pub enum Phase {
    /// Pieces are created but the game has not started.
    Setup,
    /// Drops are accepted.
    InProgress,
    /// Every piece is at its final position. Terminal.
    Complete,
}

/// A broken container invariant, reported by [`Session::check_invariants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvariantViolation {
    /// A piece is in more than one container, or in none.
    #[display("piece {piece} is in {containers} containers")]
    ContainerCount {
        /// The offending piece.
        piece: PieceId,
        /// Number of containers holding it.
        containers: usize,
    },
    /// A piece's recorded location disagrees with the containers.
    #[display("piece {piece} location disagrees with board or tray")]
    LocationMismatch {
        /// The offending piece.
        piece: PieceId,
    },
    /// Placed and unplaced counts do not add up to the piece count.
    #[display("placed {placed} + unplaced {unplaced} != {total}")]
    CountMismatch {
        /// Placed pieces.
        placed: usize,
        /// Unplaced pieces.
        unplaced: usize,
        /// Total pieces.
        total: usize,
    },
}

/// A puzzle session.
///
/// Owns the piece, board and tray model, the drag context, and the seeded
/// random source used for shuffling and tray placement. Every operation
/// mutates the model first and reports the visual consequences as
/// [`Effects`].
///
/// # Example
///
/// ```
/// use jigsnap_core::{GridSize, ImageInfo, LayoutParams, PieceId, Point, PuzzleConfig, Size};
/// use jigsnap_game::{PlacementMode, Session};
///
/// let grid = GridSize::new(1, 2).unwrap();
/// let image = ImageInfo { filename: "cat.jpg".into(), width: 200, height: 100 };
/// let config = PuzzleConfig::uniform(grid, image).unwrap();
/// let mut session = Session::with_viewport(
///     config,
///     Size::new(1000.0, 800.0),
///     &LayoutParams::default(),
///     PlacementMode::StrictSlot,
/// )
/// .unwrap();
/// session.start(42).unwrap();
///
/// for id in grid.ids() {
///     session.drag_start(id, Point::ZERO).unwrap();
///     let report = session.drop_on_slot(id);
///     session.drag_end();
///     assert_eq!(report.completed, id == PieceId::new(0, 1));
/// }
/// assert!(session.phase().is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: PuzzleConfig,
    layout: Layout,
    mode: PlacementMode,
    phase: Phase,
    pieces: Vec<Piece>,
    board: Board,
    tray: Tray,
    drag: DragContext,
    rng: Pcg64Mcg,
}

impl Session {
    /// Creates a session in the [`Phase::Setup`] phase.
    ///
    /// Every piece starts unplaced in the tray, in row-major order.
    #[must_use]
    pub fn new(config: PuzzleConfig, layout: Layout, mode: PlacementMode) -> Self {
        let grid = config.grid();
        let pieces = config
            .pieces()
            .iter()
            .map(|meta| Piece::new(meta.id, meta.position()))
            .collect();
        Self {
            board: Board::new(grid),
            tray: Tray::new(grid.ids()),
            config,
            layout,
            mode,
            phase: Phase::Setup,
            pieces,
            drag: DragContext::default(),
            rng: Pcg64Mcg::seed_from_u64(0),
        }
    }

    /// Creates a session, computing the layout for `viewport`.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the viewport cannot hold the puzzle.
    pub fn with_viewport(
        config: PuzzleConfig,
        viewport: Size,
        params: &LayoutParams,
        mode: PlacementMode,
    ) -> Result<Self, LayoutError> {
        let image = config.image();
        let layout = compute_layout((image.width, image.height), viewport, config.grid(), params)?;
        Ok(Self::new(config, layout, mode))
    }

    /// Returns a fresh session over the same configuration, layout and mode.
    ///
    /// Reloading a puzzle discards all progress.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.config.clone(), self.layout, self.mode)
    }

    /// Shuffles the tray and starts accepting drops.
    ///
    /// In snap mode every tray piece also gets a random tray position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyStarted`] outside the setup phase, and
    /// [`GameError::InvalidSnapRadius`] if the placement mode could never
    /// accept a snap.
    pub fn start(&mut self, seed: u64) -> Result<(), GameError> {
        if !self.phase.is_setup() {
            return Err(GameError::AlreadyStarted);
        }
        self.mode.validate()?;
        self.rng = Pcg64Mcg::seed_from_u64(seed);
        self.tray.shuffle(&mut self.rng);
        if self.mode.is_snap() {
            for index in 0..self.pieces.len() {
                let position = self.random_tray_position();
                self.pieces[index].set_location(PieceLocation::Tray {
                    position: Some(position),
                });
            }
        }
        self.phase = Phase::InProgress;
        log::info!(
            "puzzle started: {}x{} pieces, mode {:?}, seed {seed}",
            self.config.grid().rows(),
            self.config.grid().cols(),
            self.mode
        );
        Ok(())
    }

    /// The configuration this session was built from.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Placement mode.
    #[must_use]
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All pieces in row-major order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// A single piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.config
            .grid()
            .index_of(id)
            .map(|index| &self.pieces[index])
    }

    /// Slot occupancy.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tray contents.
    #[must_use]
    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    /// The drag in flight, if any.
    #[must_use]
    pub fn active_drag(&self) -> Option<ActiveDrag> {
        self.drag.active()
    }

    /// Number of pieces at their final position.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|piece| piece.placement_state().is_placed())
            .count()
    }

    /// Number of pieces not at their final position.
    #[must_use]
    pub fn unplaced_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|piece| piece.placement_state().is_unplaced())
            .count()
    }

    /// Final board position of `id` under the current layout.
    #[must_use]
    pub fn target_position(&self, id: PieceId) -> Option<Point> {
        self.piece(id)
            .map(|piece| self.layout.scale_point(piece.target()))
    }

    /// Begins dragging `id`.
    ///
    /// `grab_offset` is the pointer position relative to the piece's top-left
    /// corner, kept so the piece does not jump when dropped. A drag already in
    /// flight is replaced, and its piece shown again.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotInProgress`] outside the in-progress phase,
    /// [`GameError::UnknownPiece`] for ids outside the grid, and
    /// [`GameError::PieceLocked`] for pieces that can no longer move.
    pub fn drag_start(&mut self, id: PieceId, grab_offset: Point) -> Result<Effects, GameError> {
        if !self.phase.is_in_progress() {
            return Err(GameError::NotInProgress);
        }
        let piece = self.piece(id).ok_or(GameError::UnknownPiece { id })?;
        if !piece.is_movable() {
            return Err(GameError::PieceLocked { id });
        }
        let mut effects = Effects::new();
        if let Some(previous) = self.drag.begin(ActiveDrag {
            piece: id,
            grab_offset,
        }) {
            log::debug!("drag of {} replaced by {id}", previous.piece);
            effects.push(Effect::ShowPiece {
                piece: previous.piece,
            });
        }
        effects.push(Effect::HidePiece { piece: id });
        Ok(effects)
    }

    /// Ends the drag in flight, whether or not it was dropped.
    pub fn drag_end(&mut self) -> Effects {
        let mut effects = Effects::new();
        if let Some(drag) = self.drag.end() {
            effects.push(Effect::ShowPiece { piece: drag.piece });
        }
        effects
    }

    /// Drops the dragged piece onto a board slot (grid modes).
    ///
    /// In [`PlacementMode::StrictSlot`] only the piece's own slot accepts it,
    /// and the piece is then locked. In [`PlacementMode::OpenSlot`] any empty
    /// slot accepts it and it stays movable. Rejected drops change nothing.
    pub fn drop_on_slot(&mut self, slot: PieceId) -> DropReport {
        let drag = match self.accept_drop() {
            Ok(drag) => drag,
            Err(reason) => return DropReport::ignored(reason),
        };
        if !self.mode.is_grid() {
            return DropReport::ignored(IgnoreReason::WrongMode);
        }
        if !self.config.grid().contains(slot) {
            return DropReport::ignored(IgnoreReason::UnknownSlot);
        }
        let id = drag.piece;
        if self.mode.is_strict_slot() && slot != id {
            log::debug!("{id} rejected by slot {slot}");
            return DropReport::ignored(IgnoreReason::Mismatch);
        }
        if self.board.occupant(slot).is_some() {
            return DropReport::ignored(IgnoreReason::SlotOccupied);
        }

        match self.piece_location(id) {
            PieceLocation::Tray { .. } => {
                if self.mode.is_strict_slot() {
                    self.tray.vacate(id);
                } else {
                    self.tray.remove(id);
                }
            }
            PieceLocation::Slot(previous) => {
                self.board.take(previous);
            }
            PieceLocation::Board { .. } => {}
        }
        self.board.put(slot, id);
        self.set_piece_location(id, PieceLocation::Slot(slot));

        let mut effects = Effects::new();
        effects.push(Effect::PlaceInSlot { piece: id, slot });
        if self.mode.is_strict_slot() {
            self.lock_piece(id, &mut effects);
        }
        log::debug!("{id} dropped into slot {slot}");
        self.finish_drop(
            DropOutcome::Slotted {
                slot,
                correct: slot == id,
            },
            effects,
        )
    }

    /// Drops the dragged piece onto the tray.
    ///
    /// In [`PlacementMode::OpenSlot`] the piece leaves its slot and is appended
    /// to the tray. In snap mode it lands at a random tray position. The strict
    /// grid mode has no way back to the tray and ignores the drop.
    pub fn drop_on_tray(&mut self) -> DropReport {
        let drag = match self.accept_drop() {
            Ok(drag) => drag,
            Err(reason) => return DropReport::ignored(reason),
        };
        let id = drag.piece;
        match self.mode {
            PlacementMode::StrictSlot => DropReport::ignored(IgnoreReason::InvalidTarget),
            PlacementMode::OpenSlot => {
                match self.piece_location(id) {
                    PieceLocation::Slot(slot) => {
                        self.board.take(slot);
                    }
                    PieceLocation::Tray { .. } => {
                        self.tray.remove(id);
                    }
                    PieceLocation::Board { .. } => {}
                }
                self.tray.push(id);
                self.set_piece_location(id, PieceLocation::Tray { position: None });
                let mut effects = Effects::new();
                effects.push(Effect::ReturnToTray {
                    piece: id,
                    to: None,
                });
                self.finish_drop(DropOutcome::ReturnedToTray { position: None }, effects)
            }
            PlacementMode::Snap { .. } => self.return_to_random_tray_position(id),
        }
    }

    /// Drops the dragged piece at a pointer position (snap mode).
    ///
    /// `pointer` and `board_rect` are in the same (page) coordinates. The drop
    /// position is the pointer relative to the board origin, minus the grab
    /// offset recorded at drag start.
    ///
    /// - Within the snap radius of the piece's scaled final position, the piece
    ///   is aligned exactly onto it and locked.
    /// - Elsewhere on the board it stays at the raw drop position.
    /// - Off the board it returns to a random position in the tray.
    pub fn drop_at(&mut self, pointer: Point, board_rect: Rect) -> DropReport {
        let drag = match self.accept_drop() {
            Ok(drag) => drag,
            Err(reason) => return DropReport::ignored(reason),
        };
        let PlacementMode::Snap { snap_radius } = self.mode else {
            return DropReport::ignored(IgnoreReason::WrongMode);
        };
        let id = drag.piece;

        if !board_rect.contains(pointer) {
            return self.return_to_random_tray_position(id);
        }

        self.tray.remove(id);
        let position = pointer - board_rect.origin - drag.grab_offset;
        let target = self.layout.scale_point(self.pieces[self.index(id)].target());
        let mut effects = Effects::new();
        if position.distance(target) <= snap_radius {
            self.set_piece_location(
                id,
                PieceLocation::Board {
                    position: target,
                    snapped: true,
                },
            );
            effects.push(Effect::SnapPiece {
                piece: id,
                to: target,
            });
            self.lock_piece(id, &mut effects);
            log::debug!("{id} snapped to ({:.1}, {:.1})", target.x, target.y);
            self.finish_drop(DropOutcome::Snapped { position: target }, effects)
        } else {
            self.set_piece_location(
                id,
                PieceLocation::Board {
                    position,
                    snapped: false,
                },
            );
            effects.push(Effect::MoveOnBoard {
                piece: id,
                to: position,
            });
            self.finish_drop(DropOutcome::MovedOnBoard { position }, effects)
        }
    }

    /// Applies a new layout, rescaling every free position.
    ///
    /// Snapped pieces are re-pinned to their exact scaled final position; tray
    /// positions are kept inside the resized tray.
    pub fn relayout(&mut self, layout: Layout) {
        let ratio = layout.scale / self.layout.scale;
        self.layout = layout;
        for index in 0..self.pieces.len() {
            let piece = &self.pieces[index];
            let location = match piece.location() {
                PieceLocation::Board {
                    snapped: true,
                    ..
                } => PieceLocation::Board {
                    position: layout.scale_point(piece.target()),
                    snapped: true,
                },
                PieceLocation::Board {
                    position,
                    snapped: false,
                } => PieceLocation::Board {
                    position: position.scale(ratio),
                    snapped: false,
                },
                PieceLocation::Tray {
                    position: Some(position),
                } => PieceLocation::Tray {
                    position: Some(self.clamp_to_tray(position.scale(ratio))),
                },
                location @ (PieceLocation::Tray { position: None } | PieceLocation::Slot(_)) => {
                    location
                }
            };
            self.pieces[index].set_location(location);
        }
    }

    /// Verifies that every piece is in exactly one container and that
    /// placed and unplaced counts add up.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for piece in &self.pieces {
            let id = piece.id();
            let in_tray = self.tray.contains(id);
            let in_slot = self.board.slot_of(id);
            let on_board = matches!(piece.location(), PieceLocation::Board { .. });
            let containers = usize::from(in_tray) + usize::from(in_slot.is_some()) + usize::from(on_board);
            if containers != 1 {
                return Err(InvariantViolation::ContainerCount {
                    piece: id,
                    containers,
                });
            }
            let consistent = match piece.location() {
                PieceLocation::Tray { .. } => in_tray,
                PieceLocation::Slot(slot) => in_slot == Some(slot),
                PieceLocation::Board { .. } => true,
            };
            if !consistent {
                return Err(InvariantViolation::LocationMismatch { piece: id });
            }
        }
        let placed = self.placed_count();
        let unplaced = self.unplaced_count();
        let total = self.config.grid().len();
        if placed + unplaced != total {
            return Err(InvariantViolation::CountMismatch {
                placed,
                unplaced,
                total,
            });
        }
        Ok(())
    }

    fn index(&self, id: PieceId) -> usize {
        // Ids reaching here come from a validated drag.
        self.config.grid().index_of(id).unwrap_or_default()
    }

    fn piece_location(&self, id: PieceId) -> PieceLocation {
        self.pieces[self.index(id)].location()
    }

    fn set_piece_location(&mut self, id: PieceId, location: PieceLocation) {
        let index = self.index(id);
        self.pieces[index].set_location(location);
    }

    fn lock_piece(&mut self, id: PieceId, effects: &mut Effects) {
        let index = self.index(id);
        if self.pieces[index].lock() {
            effects.push(Effect::LockPiece { piece: id });
        }
    }

    fn accept_drop(&self) -> Result<ActiveDrag, IgnoreReason> {
        if !self.phase.is_in_progress() {
            return Err(IgnoreReason::NotInProgress);
        }
        let drag = self.drag.active().ok_or(IgnoreReason::NoActiveDrag)?;
        if !self.pieces[self.index(drag.piece)].is_movable() {
            return Err(IgnoreReason::Locked);
        }
        Ok(drag)
    }

    fn return_to_random_tray_position(&mut self, id: PieceId) -> DropReport {
        let position = self.random_tray_position();
        if !self.tray.contains(id) {
            self.tray.push(id);
        }
        self.set_piece_location(
            id,
            PieceLocation::Tray {
                position: Some(position),
            },
        );
        let mut effects = Effects::new();
        effects.push(Effect::ReturnToTray {
            piece: id,
            to: Some(position),
        });
        log::debug!("{id} returned to tray");
        self.finish_drop(
            DropOutcome::ReturnedToTray {
                position: Some(position),
            },
            effects,
        )
    }

    fn random_tray_position(&mut self) -> Point {
        let tray = self.layout.tray_bounds();
        let max_x = (tray.size.width - self.layout.piece_width).max(0.0);
        let max_y = (tray.size.height - self.layout.piece_height).max(0.0);
        Point::new(
            self.rng.random_range(0.0..=max_x),
            self.rng.random_range(0.0..=max_y),
        )
    }

    fn clamp_to_tray(&self, position: Point) -> Point {
        let tray = self.layout.tray_bounds();
        let max_x = (tray.size.width - self.layout.piece_width).max(0.0);
        let max_y = (tray.size.height - self.layout.piece_height).max(0.0);
        Point::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
    }

    /// Full scan of every cell against its own piece.
    fn scan_complete(&self) -> bool {
        match self.mode {
            PlacementMode::StrictSlot | PlacementMode::OpenSlot => self.board.is_solved(),
            PlacementMode::Snap { .. } => self
                .pieces
                .iter()
                .all(|piece| piece.placement_state().is_placed()),
        }
    }

    fn finish_drop(&mut self, outcome: DropOutcome, mut effects: Effects) -> DropReport {
        let completed = self.phase.is_in_progress() && self.scan_complete();
        if completed {
            self.phase = Phase::Complete;
            for piece in self.config.grid().ids() {
                self.lock_piece(piece, &mut effects);
            }
            effects.push(Effect::MarkComplete);
            effects.push(Effect::RevealReference);
            effects.push(Effect::SwapToFlatPieces);
            log::info!("Congratulations! Puzzle complete!");
        }
        DropReport {
            outcome,
            completed,
            effects,
        }
    }
}
