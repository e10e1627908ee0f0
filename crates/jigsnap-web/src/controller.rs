//! Target-independent core of the browser bindings.
//!
//! [`PuzzleController`] takes plain values as they arrive from JavaScript
//! (element ids as strings, coordinates as separate numbers) and routes them
//! through the app layer. The wasm wrapper only converts errors and values.

use jigsnap_app::{
    action::Action,
    action_handler::{self, ActionEffect, ActionError},
    state::{AppState, Settings},
    transition::TransitionQueue,
    view_model::AppViewModel,
    view_model_builder,
};
use jigsnap_core::{PieceId, PieceIdParseError, Point, PuzzleConfig, Rect, Size};
use jigsnap_game::Effect;

/// Error surfaced to JavaScript.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum BridgeError {
    /// An element id is not of the form `piece_{row}_{col}`.
    #[display("{_0}")]
    PieceId(PieceIdParseError),
    /// The action was rejected.
    #[display("{_0}")]
    Action(ActionError),
}

/// Owns the app state and pending transitions of one page.
#[derive(Debug)]
pub struct PuzzleController {
    app_state: AppState,
    transitions: TransitionQueue,
}

impl PuzzleController {
    /// Creates a controller on the entry screen.
    #[must_use]
    pub fn new(settings: Settings, viewport: Size) -> Self {
        Self {
            app_state: AppState::new(settings, viewport),
            transitions: TransitionQueue::default(),
        }
    }

    /// Current app state.
    #[must_use]
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Opens a puzzle at the current viewport size.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport cannot hold the puzzle.
    pub fn open(&mut self, config: PuzzleConfig, seed: u64) -> Result<ActionEffect, BridgeError> {
        let viewport = self.app_state.viewport;
        self.dispatch(Action::Open {
            config,
            viewport,
            seed,
        })
    }

    /// Handles a single action.
    ///
    /// # Errors
    ///
    /// Returns the handler's error; the state is left as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionEffect, BridgeError> {
        let mut effect = ActionEffect::default();
        action_handler::handle(&mut self.app_state, &mut self.transitions, &mut effect, action)?;
        Ok(effect)
    }

    /// Starts dragging the piece with the given element id.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed ids and refused drags.
    pub fn drag_start(
        &mut self,
        piece: &str,
        grab_x: f64,
        grab_y: f64,
    ) -> Result<ActionEffect, BridgeError> {
        let piece = piece.parse::<PieceId>()?;
        self.dispatch(Action::DragStart {
            piece,
            grab_offset: Point::new(grab_x, grab_y),
        })
    }

    /// Drops onto the slot with the given element id.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed ids or when no puzzle is open.
    pub fn drop_on_slot(&mut self, slot: &str) -> Result<ActionEffect, BridgeError> {
        let slot = slot.parse::<PieceId>()?;
        self.dispatch(Action::DropOnSlot(slot))
    }

    /// Drops at page position `(px, py)`, with the board's page bounds.
    ///
    /// # Errors
    ///
    /// Returns an error when no puzzle is open.
    pub fn drop_at(
        &mut self,
        (px, py): (f64, f64),
        (bx, by, bw, bh): (f64, f64, f64, f64),
    ) -> Result<ActionEffect, BridgeError> {
        self.dispatch(Action::DropAt {
            pointer: Point::new(px, py),
            board_rect: Rect::new(Point::new(bx, by), Size::new(bw, bh)),
        })
    }

    /// Builds the view model for the current screen.
    #[must_use]
    pub fn view(&self) -> AppViewModel {
        view_model_builder::build_app_view_model(&self.app_state)
    }

    /// Takes the pending presentation effects, oldest first.
    pub fn drain_transitions(&mut self) -> Vec<Effect> {
        self.transitions.drain()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jigsnap_app::state::PlacementKind;
    use jigsnap_game::{DropOutcome, IgnoreReason};

    use super::*;

    fn page_config() -> PuzzleConfig {
        let attributes: BTreeMap<String, String> = [
            ("rows", "1"),
            ("cols", "2"),
            ("image", "bridge.jpg"),
            ("width", "800"),
            ("height", "400"),
            (
                "pieces",
                r#"[{"id":"piece_0_1","x":400,"y":0},{"id":"piece_0_0","x":0,"y":0}]"#,
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
        PuzzleConfig::from_attributes(&attributes).unwrap()
    }

    #[test]
    fn test_rejects_malformed_element_ids() {
        let mut controller = PuzzleController::new(Settings::default(), Size::new(1920.0, 1080.0));
        controller.open(page_config(), 1).unwrap();
        assert!(matches!(
            controller.drag_start("tray", 0.0, 0.0),
            Err(BridgeError::PieceId(_))
        ));
        assert!(matches!(
            controller.drop_on_slot("slot_0_0"),
            Err(BridgeError::PieceId(_))
        ));
    }

    #[test]
    fn test_strict_session_through_string_ids() {
        let mut controller = PuzzleController::new(Settings::default(), Size::new(1920.0, 1080.0));
        controller.open(page_config(), 1).unwrap();

        controller.drag_start("piece_0_0", 5.0, 5.0).unwrap();
        let effect = controller.drop_on_slot("piece_0_1").unwrap();
        assert_eq!(
            effect.drop_outcome,
            Some(DropOutcome::Ignored(IgnoreReason::Mismatch))
        );
        let effect = controller.drop_on_slot("piece_0_0").unwrap();
        assert!(!effect.completed);
        controller.dispatch(Action::DragEnd).unwrap();

        controller.drag_start("piece_0_1", 0.0, 0.0).unwrap();
        assert!(controller.drop_on_slot("piece_0_1").unwrap().completed);
        controller.dispatch(Action::DragEnd).unwrap();

        let transitions = controller.drain_transitions();
        assert_eq!(transitions.first(), Some(&Effect::HidePiece { piece: PieceId::new(0, 0) }));
        assert!(transitions.contains(&Effect::MarkComplete));
        assert!(controller.drain_transitions().is_empty());

        let AppViewModel::Puzzle(vm) = controller.view() else {
            panic!("expected puzzle screen");
        };
        assert!(vm.container_classes.contains(&"puzzle-complete"));
    }

    #[test]
    fn test_snap_drop_in_page_coordinates() {
        let settings = Settings {
            mode: PlacementKind::Snap,
            ..Settings::default()
        };
        let mut controller = PuzzleController::new(settings, Size::new(1920.0, 1080.0));
        controller.open(page_config(), 9).unwrap();

        // Board at page (40, 60); piece_0_1 belongs at board (400, 0).
        controller.drag_start("piece_0_1", 10.0, 10.0).unwrap();
        let effect = controller
            .drop_at((455.0, 75.0), (40.0, 60.0, 800.0, 400.0))
            .unwrap();
        assert_eq!(
            effect.drop_outcome,
            Some(DropOutcome::Snapped {
                position: Point::new(400.0, 0.0)
            })
        );
    }

    #[test]
    fn test_view_serializes_entry_screen() {
        let controller = PuzzleController::new(Settings::default(), Size::new(800.0, 600.0));
        let json = serde_json::to_value(controller.view()).unwrap();
        assert_eq!(json["screen"], "entry");
    }
}
