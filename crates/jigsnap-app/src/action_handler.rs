use jigsnap_core::{LayoutError, PieceId, Point, PuzzleConfig, Rect, Size, compute_layout};
use jigsnap_game::{DropOutcome, DropReport, GameError, Session};

use crate::{
    action::Action,
    state::{AppState, Screen},
    transition::TransitionQueue,
};

#[derive(Default, Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEffect {
    /// The view model must be rebuilt.
    pub render_requested: bool,
    /// The last handled drop completed the puzzle.
    pub completed: bool,
    /// Outcome of the last handled drop.
    pub drop_outcome: Option<DropOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ActionError {
    #[display("no puzzle is open")]
    NoPuzzle,
    #[display("{_0}")]
    #[from]
    Layout(LayoutError),
    #[display("{_0}")]
    #[from]
    Game(GameError),
}

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    transitions: &'a mut TransitionQueue,
    effect: &'a mut ActionEffect,
}

pub fn handle(
    app_state: &mut AppState,
    transitions: &mut TransitionQueue,
    effect: &mut ActionEffect,
    action: Action,
) -> Result<(), ActionError> {
    let mut ctx = ActionContext {
        app_state,
        transitions,
        effect,
    };

    match action {
        Action::Open {
            config,
            viewport,
            seed,
        } => ctx.open(config, viewport, seed)?,
        Action::Resize(viewport) => ctx.resize(viewport)?,
        Action::DragStart { piece, grab_offset } => ctx.drag_start(piece, grab_offset)?,
        Action::DragEnd => {
            let effects = ctx.session_mut()?.drag_end();
            ctx.transitions.extend(effects);
        }
        Action::DropOnSlot(slot) => {
            let report = ctx.session_mut()?.drop_on_slot(slot);
            ctx.apply_drop(report);
        }
        Action::DropOnTray => {
            let report = ctx.session_mut()?.drop_on_tray();
            ctx.apply_drop(report);
        }
        Action::DropAt {
            pointer,
            board_rect,
        } => ctx.drop_at(pointer, board_rect)?,
        Action::ToggleCheatMode => {
            let settings = &mut ctx.app_state.settings;
            settings.cheat_mode = !settings.cheat_mode;
            ctx.effect.render_requested = true;
        }
        Action::Reload => {
            ctx.app_state.screen = Screen::Entry;
            ctx.transitions.clear();
            ctx.effect.render_requested = true;
        }
    }
    Ok(())
}

impl ActionContext<'_> {
    fn session_mut(&mut self) -> Result<&mut Session, ActionError> {
        self.app_state.session_mut().ok_or(ActionError::NoPuzzle)
    }

    fn open(
        &mut self,
        config: PuzzleConfig,
        viewport: Size,
        seed: u64,
    ) -> Result<(), ActionError> {
        let settings = &self.app_state.settings;
        let mut session = Session::with_viewport(
            config,
            viewport,
            &settings.layout_params,
            settings.placement_mode(),
        )?;
        session.start(seed)?;
        self.app_state.viewport = viewport;
        self.app_state.screen = Screen::Puzzle(Box::new(session));
        self.transitions.clear();
        self.effect.render_requested = true;
        Ok(())
    }

    fn resize(&mut self, viewport: Size) -> Result<(), ActionError> {
        self.app_state.viewport = viewport;
        let params = self.app_state.settings.layout_params;
        let Some(session) = self.app_state.session_mut() else {
            return Ok(());
        };
        let image = session.config().image();
        let layout = compute_layout(
            (image.width, image.height),
            viewport,
            session.config().grid(),
            &params,
        )?;
        session.relayout(layout);
        self.effect.render_requested = true;
        Ok(())
    }

    fn drag_start(&mut self, piece: PieceId, grab_offset: Point) -> Result<(), ActionError> {
        let effects = self.session_mut()?.drag_start(piece, grab_offset)?;
        self.transitions.extend(effects);
        Ok(())
    }

    fn drop_at(&mut self, pointer: Point, board_rect: Rect) -> Result<(), ActionError> {
        let report = self.session_mut()?.drop_at(pointer, board_rect);
        self.apply_drop(report);
        Ok(())
    }

    fn apply_drop(&mut self, report: DropReport) {
        if !report.outcome.is_ignored() {
            self.effect.render_requested = true;
        }
        self.effect.completed = report.completed;
        self.effect.drop_outcome = Some(report.outcome);
        self.transitions.extend(report.effects);
    }
}

#[cfg(test)]
mod tests {
    use jigsnap_core::{GridSize, ImageInfo, PieceId, Point, PuzzleConfig, Size};
    use jigsnap_game::{Effect, GameError, IgnoreReason};

    use super::{ActionEffect, ActionError, handle};
    use crate::{
        action::Action,
        state::{AppState, PlacementKind, Settings},
        transition::TransitionQueue,
    };

    const VIEWPORT: Size = Size::new(1280.0, 800.0);

    fn config() -> PuzzleConfig {
        let grid = GridSize::new(2, 2).unwrap();
        let image = ImageInfo {
            filename: "fox.jpg".to_owned(),
            width: 400,
            height: 300,
        };
        PuzzleConfig::uniform(grid, image).unwrap()
    }

    fn opened() -> (AppState, TransitionQueue) {
        let mut app_state = AppState::new(Settings::default(), VIEWPORT);
        let mut transitions = TransitionQueue::default();
        let mut effect = ActionEffect::default();
        handle(
            &mut app_state,
            &mut transitions,
            &mut effect,
            Action::Open {
                config: config(),
                viewport: VIEWPORT,
                seed: 4,
            },
        )
        .unwrap();
        assert!(effect.render_requested);
        (app_state, transitions)
    }

    fn run(app_state: &mut AppState, transitions: &mut TransitionQueue, action: Action) -> ActionEffect {
        let mut effect = ActionEffect::default();
        handle(app_state, transitions, &mut effect, action).unwrap();
        effect
    }

    #[test]
    fn test_drag_actions_without_puzzle_fail() {
        let mut app_state = AppState::new(Settings::default(), VIEWPORT);
        let mut transitions = TransitionQueue::default();
        let mut effect = ActionEffect::default();
        let result = handle(
            &mut app_state,
            &mut transitions,
            &mut effect,
            Action::DropOnTray,
        );
        assert_eq!(result, Err(ActionError::NoPuzzle));
        assert!(transitions.is_empty());
    }

    #[test]
    fn test_open_with_unusable_snap_radius_stays_on_entry() {
        let settings = Settings {
            mode: PlacementKind::Snap,
            snap_radius: f64::NAN,
            ..Settings::default()
        };
        let mut app_state = AppState::new(settings, VIEWPORT);
        let mut transitions = TransitionQueue::default();
        let mut effect = ActionEffect::default();
        let result = handle(
            &mut app_state,
            &mut transitions,
            &mut effect,
            Action::Open {
                config: config(),
                viewport: VIEWPORT,
                seed: 1,
            },
        );
        assert_eq!(result, Err(ActionError::Game(GameError::InvalidSnapRadius)));
        assert!(app_state.screen.is_entry());
        assert!(!effect.render_requested);
    }

    #[test]
    fn test_resize_without_puzzle_only_records_viewport() {
        let mut app_state = AppState::new(Settings::default(), VIEWPORT);
        let mut transitions = TransitionQueue::default();
        let effect = run(
            &mut app_state,
            &mut transitions,
            Action::Resize(Size::new(640.0, 480.0)),
        );
        assert!(!effect.render_requested);
        assert_eq!(app_state.viewport, Size::new(640.0, 480.0));
    }

    #[test]
    fn test_drops_queue_transitions_in_order() {
        let (mut app_state, mut transitions) = opened();
        let piece = PieceId::new(0, 1);

        run(
            &mut app_state,
            &mut transitions,
            Action::DragStart {
                piece,
                grab_offset: Point::ZERO,
            },
        );
        let effect = run(&mut app_state, &mut transitions, Action::DropOnSlot(piece));
        assert!(effect.render_requested);
        assert!(!effect.completed);
        run(&mut app_state, &mut transitions, Action::DragEnd);

        assert_eq!(
            transitions.drain(),
            vec![
                Effect::HidePiece { piece },
                Effect::PlaceInSlot { piece, slot: piece },
                Effect::LockPiece { piece },
                Effect::ShowPiece { piece },
            ]
        );
        assert!(transitions.is_empty());
    }

    #[test]
    fn test_ignored_drop_requests_no_render() {
        let (mut app_state, mut transitions) = opened();
        run(
            &mut app_state,
            &mut transitions,
            Action::DragStart {
                piece: PieceId::new(0, 0),
                grab_offset: Point::ZERO,
            },
        );
        transitions.clear();
        let effect = run(
            &mut app_state,
            &mut transitions,
            Action::DropOnSlot(PieceId::new(1, 1)),
        );
        assert!(!effect.render_requested);
        assert_eq!(
            effect.drop_outcome,
            Some(jigsnap_game::DropOutcome::Ignored(IgnoreReason::Mismatch))
        );
        assert!(transitions.is_empty());
    }

    #[test]
    fn test_completion_and_reload() {
        let (mut app_state, mut transitions) = opened();
        let mut completed = 0;
        for piece in GridSize::new(2, 2).unwrap().ids() {
            run(
                &mut app_state,
                &mut transitions,
                Action::DragStart {
                    piece,
                    grab_offset: Point::ZERO,
                },
            );
            if run(&mut app_state, &mut transitions, Action::DropOnSlot(piece)).completed {
                completed += 1;
            }
            run(&mut app_state, &mut transitions, Action::DragEnd);
        }
        assert_eq!(completed, 1);
        assert!(app_state.session().unwrap().phase().is_complete());
        assert!(transitions.drain().contains(&Effect::SwapToFlatPieces));

        run(&mut app_state, &mut transitions, Action::Reload);
        assert!(app_state.screen.is_entry());
    }

    #[test]
    fn test_resize_relayouts_session() {
        let (mut app_state, mut transitions) = opened();
        let before = *app_state.session().unwrap().layout();
        let effect = run(
            &mut app_state,
            &mut transitions,
            Action::Resize(Size::new(640.0, 480.0)),
        );
        assert!(effect.render_requested);
        let after = *app_state.session().unwrap().layout();
        assert!(after.scale < before.scale);
    }

    #[test]
    fn test_resize_to_tiny_viewport_keeps_layout() {
        let (mut app_state, mut transitions) = opened();
        let before = *app_state.session().unwrap().layout();
        let mut effect = ActionEffect::default();
        let result = handle(
            &mut app_state,
            &mut transitions,
            &mut effect,
            Action::Resize(Size::new(10.0, 10.0)),
        );
        assert!(matches!(result, Err(ActionError::Layout(_))));
        assert_eq!(*app_state.session().unwrap().layout(), before);
    }

    #[test]
    fn test_toggle_cheat_mode() {
        let (mut app_state, mut transitions) = opened();
        run(&mut app_state, &mut transitions, Action::ToggleCheatMode);
        assert!(app_state.settings.cheat_mode);
        run(&mut app_state, &mut transitions, Action::ToggleCheatMode);
        assert!(!app_state.settings.cheat_mode);
    }
}
