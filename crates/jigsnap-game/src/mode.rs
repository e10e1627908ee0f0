use crate::GameError;

/// How drops are validated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, derive_more::IsVariant, serde::Serialize, serde::Deserialize,
)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlacementMode {
    /// Pieces are dropped onto slots, and a slot accepts only its own piece.
    /// Accepted pieces are locked in place.
    #[default]
    StrictSlot,
    /// Pieces may go into any empty slot or back into the tray, and stay
    /// movable until the puzzle is complete.
    OpenSlot,
    /// Pieces are dropped anywhere on the board and snap onto their final
    /// position when released within `snap_radius` pixels of it.
    Snap {
        /// Maximum distance, in board pixels, for a drop to snap.
        snap_radius: f64,
    },
}

impl PlacementMode {
    /// Snap radius used by [`PlacementMode::snap`].
    pub const DEFAULT_SNAP_RADIUS: f64 = 30.0;

    /// Snap mode with the default radius.
    #[must_use]
    pub const fn snap() -> Self {
        Self::Snap {
            snap_radius: Self::DEFAULT_SNAP_RADIUS,
        }
    }

    /// Checks that the mode's parameters allow the puzzle to be completed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSnapRadius`] for a negative or non-finite
    /// snap radius.
    pub fn validate(&self) -> Result<(), GameError> {
        match self {
            Self::Snap { snap_radius } if !(snap_radius.is_finite() && *snap_radius >= 0.0) => {
                Err(GameError::InvalidSnapRadius)
            }
            _ => Ok(()),
        }
    }

    /// Whether drops target board slots.
    #[must_use]
    pub const fn is_grid(&self) -> bool {
        matches!(self, Self::StrictSlot | Self::OpenSlot)
    }
}
