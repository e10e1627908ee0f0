use jigsnap_core::{PieceId, Point};
use jigsnap_game::{Piece, PieceLocation, Session, TrayEntry};

use crate::{
    state::{AppState, CHEAT_OVERLAY_OPACITY, Settings},
    view_model::{
        AppViewModel, Overlay, PiecePlacement, PieceViewModel, PieceVisualState,
        PuzzleViewModel, SlotViewModel, StatusViewModel,
    },
};

pub const CONTAINER_CLASS: &str = "puzzle-container";
pub const COMPLETE_CLASS: &str = "puzzle-complete";
pub const CHEAT_MODE_CLASS: &str = "cheat-mode";
pub const COMPLETE_MESSAGE: &str = "Congratulations! Puzzle complete!";

#[must_use]
pub fn build_app_view_model(app_state: &AppState) -> AppViewModel {
    match app_state.session() {
        None => AppViewModel::Entry,
        Some(session) => AppViewModel::Puzzle(build_puzzle_view_model(session, &app_state.settings)),
    }
}

#[must_use]
pub fn build_puzzle_view_model(session: &Session, settings: &Settings) -> PuzzleViewModel {
    let complete = session.phase().is_complete();
    let layout = session.layout();

    let mut container_classes = vec![CONTAINER_CLASS];
    if complete {
        container_classes.push(COMPLETE_CLASS);
    } else if settings.cheat_mode {
        container_classes.push(CHEAT_MODE_CLASS);
    }

    let (slots, tray_entries) = if session.mode().is_grid() {
        (build_slots(session), build_tray_entries(session))
    } else {
        (vec![], vec![])
    };

    PuzzleViewModel {
        container_classes,
        board: layout.board_size(),
        tray: layout.tray_bounds().size,
        slots,
        pieces: build_pieces(session, settings),
        tray_entries,
        overlay: build_overlay(session, settings),
        status: StatusViewModel {
            phase: session.phase(),
            placed: session.placed_count(),
            total: session.pieces().len(),
            message: complete.then_some(COMPLETE_MESSAGE),
        },
    }
}

fn build_slots(session: &Session) -> Vec<SlotViewModel> {
    let layout = session.layout();
    session
        .board()
        .iter()
        .map(|(id, occupant)| SlotViewModel {
            id,
            position: Point::new(
                f64::from(id.col()) * layout.piece_width,
                f64::from(id.row()) * layout.piece_height,
            ),
            occupant,
        })
        .collect()
}

fn build_tray_entries(session: &Session) -> Vec<Option<PieceId>> {
    session
        .tray()
        .entries()
        .iter()
        .map(|entry| match entry {
            TrayEntry::Piece(id) => Some(*id),
            TrayEntry::Placeholder => None,
        })
        .collect()
}

fn build_pieces(session: &Session, settings: &Settings) -> Vec<PieceViewModel> {
    let complete = session.phase().is_complete();
    let size = session.layout().piece_size();
    let dragging = session.active_drag().map(|drag| drag.piece);

    session
        .pieces()
        .iter()
        .map(|piece| {
            let id = piece.id();
            let src = if complete {
                settings.assets.flat_piece_url(id)
            } else {
                settings.assets.piece_url(id)
            };
            let mut visual_state = PieceVisualState::empty();
            visual_state.set(PieceVisualState::DRAGGING, dragging == Some(id));
            visual_state.set(
                PieceVisualState::PLACED,
                piece.placement_state().is_placed(),
            );
            visual_state.set(PieceVisualState::LOCKED, !piece.is_movable());
            PieceViewModel {
                id,
                src,
                size,
                placement: placement(session, piece),
                draggable: piece.is_movable() && session.phase().is_in_progress(),
                visual_state,
            }
        })
        .collect()
}

fn placement(session: &Session, piece: &Piece) -> PiecePlacement {
    match piece.location() {
        PieceLocation::Slot(slot) => PiecePlacement::Slot { slot },
        PieceLocation::Board { position, .. } => PiecePlacement::Board { position },
        PieceLocation::Tray {
            position: Some(position),
        } => PiecePlacement::Tray { position },
        PieceLocation::Tray { position: None } => PiecePlacement::TrayEntry {
            index: session.tray().index_of(piece.id()).unwrap_or_default(),
        },
    }
}

fn build_overlay(session: &Session, settings: &Settings) -> Overlay {
    let src = settings
        .assets
        .reference_url(&session.config().image().filename);
    if session.phase().is_complete() {
        Overlay::Revealed { src }
    } else if settings.cheat_mode {
        Overlay::Hint {
            src,
            opacity: CHEAT_OVERLAY_OPACITY,
        }
    } else {
        Overlay::Hidden
    }
}
