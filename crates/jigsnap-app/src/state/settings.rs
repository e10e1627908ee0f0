use jigsnap_core::{AssetPaths, LayoutParams};
use jigsnap_game::PlacementMode;
use serde::{Deserialize, Serialize};

/// Opacity of the reference image shown beneath the board in cheat mode.
pub const CHEAT_OVERLAY_OPACITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlacementKind {
    #[default]
    StrictSlot,
    OpenSlot,
    Snap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub mode: PlacementKind,
    pub snap_radius: f64,
    pub cheat_mode: bool,
    pub layout_params: LayoutParams,
    pub assets: AssetPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: PlacementKind::default(),
            snap_radius: PlacementMode::DEFAULT_SNAP_RADIUS,
            cheat_mode: false,
            layout_params: LayoutParams::default(),
            assets: AssetPaths::default(),
        }
    }
}

impl Settings {
    /// Placement mode for new sessions.
    #[must_use]
    pub fn placement_mode(&self) -> PlacementMode {
        match self.mode {
            PlacementKind::StrictSlot => PlacementMode::StrictSlot,
            PlacementKind::OpenSlot => PlacementMode::OpenSlot,
            PlacementKind::Snap => PlacementMode::Snap {
                snap_radius: self.snap_radius,
            },
        }
    }
}
