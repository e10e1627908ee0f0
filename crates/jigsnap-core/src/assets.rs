//! Conventional asset locations.

use crate::PieceId;

/// Base paths for piece images and the uploaded reference image.
///
/// Piece images are served as `{pieces_base}/piece_{row}_{col}.png`, with a
/// `_flat` variant (no bevel) that replaces them once the puzzle is solved.
///
/// # Examples
///
/// ```
/// use jigsnap_core::{AssetPaths, PieceId};
///
/// let assets = AssetPaths::default();
/// assert_eq!(assets.piece_url(PieceId::new(0, 1)), "/output/piece_0_1.png");
/// assert_eq!(assets.flat_piece_url(PieceId::new(0, 1)), "/output/piece_0_1_flat.png");
/// assert_eq!(assets.reference_url("cat.jpg"), "/static/uploads/cat.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssetPaths {
    /// Directory serving sliced piece images.
    pub pieces_base: String,
    /// Directory serving uploaded source images.
    pub uploads_base: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            pieces_base: "/output".to_owned(),
            uploads_base: "/static/uploads".to_owned(),
        }
    }
}

impl AssetPaths {
    /// URL of the bevelled piece image.
    #[must_use]
    pub fn piece_url(&self, id: PieceId) -> String {
        format!("{}/{id}.png", trim_slash(&self.pieces_base))
    }

    /// URL of the flat piece image shown after completion.
    #[must_use]
    pub fn flat_piece_url(&self, id: PieceId) -> String {
        format!("{}/{id}_flat.png", trim_slash(&self.pieces_base))
    }

    /// URL of the full-resolution reference image.
    #[must_use]
    pub fn reference_url(&self, filename: &str) -> String {
        format!("{}/{filename}", trim_slash(&self.uploads_base))
    }
}

fn trim_slash(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}
