use jigsnap_core::Size;
use jigsnap_game::Session;

use super::Settings;

/// Which screen is shown.
#[derive(Debug, Clone, derive_more::IsVariant)]
pub enum Screen {
    /// The configuration/upload screen. No session exists.
    Entry,
    /// A puzzle being played.
    Puzzle(Box<Session>),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub viewport: Size,
    pub settings: Settings,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings, viewport: Size) -> Self {
        Self {
            screen: Screen::Entry,
            viewport,
            settings,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Entry => None,
            Screen::Puzzle(session) => Some(session.as_ref()),
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.screen {
            Screen::Entry => None,
            Screen::Puzzle(session) => Some(session.as_mut()),
        }
    }
}
