mod app_state;
mod settings;

pub use self::{
    app_state::{AppState, Screen},
    settings::{CHEAT_OVERLAY_OPACITY, PlacementKind, Settings},
};
