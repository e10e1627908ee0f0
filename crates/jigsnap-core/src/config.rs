//! Static puzzle configuration.
//!
//! A [`PuzzleConfig`] is read once when a puzzle page is set up and never
//! changes for the lifetime of the session. The page embeds it as `data-*`
//! attributes on a configuration element; [`PuzzleConfig::from_attributes`]
//! reads those through the [`AttributeSource`] abstraction so the parsing can
//! be exercised without a browser.

use std::collections::{BTreeMap, HashMap};

use crate::{GridSize, GridSizeError, PieceId, Point};

/// The source image the puzzle was cut from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageInfo {
    /// File name of the uploaded image, used to locate the reference image.
    pub filename: String,
    /// Width in source pixels.
    pub width: u32,
    /// Height in source pixels.
    pub height: u32,
}

/// Final position metadata for one piece, in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PieceMeta {
    /// The piece this entry describes.
    pub id: PieceId,
    /// Left edge of the piece in the solved image.
    pub x: f64,
    /// Top edge of the piece in the solved image.
    pub y: f64,
}

impl PieceMeta {
    /// Final top-left position in source pixels.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Error returned when a puzzle configuration is missing or inconsistent.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// A required attribute is absent.
    #[display("missing attribute `{name}`")]
    MissingAttribute {
        /// Attribute name.
        name: &'static str,
    },
    /// An attribute could not be parsed as a number.
    #[display("attribute `{name}` is not a valid number: {value:?}")]
    InvalidNumber {
        /// Attribute name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
    /// Row or column count is zero.
    #[display("invalid grid: {_0}")]
    #[from]
    InvalidGrid(GridSizeError),
    /// The piece metadata attribute is not valid JSON.
    #[display("invalid piece metadata: {source}")]
    #[from]
    InvalidPieces {
        /// The JSON error.
        source: serde_json::Error,
    },
    /// The image has a zero dimension.
    #[display("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// The metadata does not describe one piece per grid cell.
    #[display("expected {expected} pieces, found {actual}")]
    PieceCountMismatch {
        /// Number of grid cells.
        expected: usize,
        /// Number of metadata entries.
        actual: usize,
    },
    /// A metadata entry names a cell outside the grid.
    #[display("piece {id} lies outside the grid")]
    PieceOutOfGrid {
        /// The offending id.
        id: PieceId,
    },
    /// Two metadata entries share an id.
    #[display("piece {id} is listed more than once")]
    DuplicatePiece {
        /// The duplicated id.
        id: PieceId,
    },
}

/// Read access to page-embedded `data-*` attributes.
///
/// Names are passed without the `data-` prefix, e.g. `"rows"` for `data-rows`.
pub trait AttributeSource {
    /// Returns the attribute value, if present.
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T> AttributeSource for &T
where
    T: AttributeSource + ?Sized,
{
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }
}

/// Immutable puzzle parameters.
///
/// Piece metadata is stored in row-major grid order regardless of the order
/// it was supplied in.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleConfig {
    grid: GridSize,
    image: ImageInfo,
    pieces: Vec<PieceMeta>,
}

impl PuzzleConfig {
    /// Attribute holding the row count.
    pub const ATTR_ROWS: &'static str = "rows";
    /// Attribute holding the column count.
    pub const ATTR_COLS: &'static str = "cols";
    /// Attribute holding the uploaded image file name.
    pub const ATTR_IMAGE: &'static str = "image";
    /// Attribute holding the source image width.
    pub const ATTR_WIDTH: &'static str = "width";
    /// Attribute holding the source image height.
    pub const ATTR_HEIGHT: &'static str = "height";
    /// Attribute holding the JSON piece metadata list.
    pub const ATTR_PIECES: &'static str = "pieces";

    /// Creates a configuration from explicit piece metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is empty, or the metadata does not contain
    /// exactly one in-grid entry per cell.
    pub fn new(
        grid: GridSize,
        image: ImageInfo,
        pieces: Vec<PieceMeta>,
    ) -> Result<Self, ConfigError> {
        if image.width == 0 || image.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: image.width,
                height: image.height,
            });
        }
        if pieces.len() != grid.len() {
            return Err(ConfigError::PieceCountMismatch {
                expected: grid.len(),
                actual: pieces.len(),
            });
        }

        let mut ordered: Vec<Option<PieceMeta>> = vec![None; grid.len()];
        for meta in pieces {
            let index = grid
                .index_of(meta.id)
                .ok_or(ConfigError::PieceOutOfGrid { id: meta.id })?;
            if ordered[index].replace(meta).is_some() {
                return Err(ConfigError::DuplicatePiece { id: meta.id });
            }
        }
        // Count matched and no duplicates, so every cell is filled.
        let pieces = ordered.into_iter().flatten().collect();

        Ok(Self {
            grid,
            image,
            pieces,
        })
    }

    /// Creates a configuration for an image cut into equal cells.
    ///
    /// Cell size uses integer division of the image size, matching how the
    /// piece images are sliced.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyImage`] if the image has a zero dimension.
    pub fn uniform(grid: GridSize, image: ImageInfo) -> Result<Self, ConfigError> {
        let cell_width = image.width / u32::from(grid.cols());
        let cell_height = image.height / u32::from(grid.rows());
        let pieces = grid
            .ids()
            .map(|id| PieceMeta {
                id,
                x: f64::from(u32::from(id.col()) * cell_width),
                y: f64::from(u32::from(id.row()) * cell_height),
            })
            .collect();
        Self::new(grid, image, pieces)
    }

    /// Reads a configuration from page-embedded attributes.
    ///
    /// `rows`, `cols`, `image`, `width` and `height` are required. `pieces`
    /// is an optional JSON array of `{"id": "piece_r_c", "x": .., "y": ..}`
    /// objects; when absent, positions are derived with [`Self::uniform`].
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or malformed attribute, or any
    /// error from [`Self::new`].
    pub fn from_attributes<S>(source: &S) -> Result<Self, ConfigError>
    where
        S: AttributeSource + ?Sized,
    {
        let rows = required_number::<u16, _>(source, Self::ATTR_ROWS)?;
        let cols = required_number::<u16, _>(source, Self::ATTR_COLS)?;
        let grid = GridSize::new(rows, cols)?;
        let image = ImageInfo {
            filename: required(source, Self::ATTR_IMAGE)?,
            width: required_number(source, Self::ATTR_WIDTH)?,
            height: required_number(source, Self::ATTR_HEIGHT)?,
        };

        match source.attribute(Self::ATTR_PIECES) {
            Some(json) if !json.trim().is_empty() => {
                let pieces: Vec<PieceMeta> = serde_json::from_str(&json)?;
                Self::new(grid, image, pieces)
            }
            _ => {
                log::warn!("no piece metadata on page, deriving positions from a uniform grid");
                Self::uniform(grid, image)
            }
        }
    }

    /// Grid dimensions.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Source image details.
    #[must_use]
    pub fn image(&self) -> &ImageInfo {
        &self.image
    }

    /// Piece metadata in row-major order.
    #[must_use]
    pub fn pieces(&self) -> &[PieceMeta] {
        &self.pieces
    }

    /// Metadata for one piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&PieceMeta> {
        self.grid.index_of(id).map(|index| &self.pieces[index])
    }
}

fn required<S>(source: &S, name: &'static str) -> Result<String, ConfigError>
where
    S: AttributeSource + ?Sized,
{
    source
        .attribute(name)
        .ok_or(ConfigError::MissingAttribute { name })
}

fn required_number<T, S>(source: &S, name: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    S: AttributeSource + ?Sized,
{
    let value = required(source, name)?;
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn image(width: u32, height: u32) -> ImageInfo {
        ImageInfo {
            filename: "leaves.jpg".to_owned(),
            width,
            height,
        }
    }

    #[test]
    fn test_uniform_positions() {
        let grid = GridSize::new(2, 3).unwrap();
        let config = PuzzleConfig::uniform(grid, image(301, 200)).unwrap();
        assert_eq!(config.pieces().len(), 6);
        let meta = config.piece(PieceId::new(1, 2)).unwrap();
        assert_eq!(meta.position(), Point::new(200.0, 100.0));
    }

    #[test]
    fn test_new_reorders_and_validates() {
        let grid = GridSize::new(1, 2).unwrap();
        let pieces = vec![
            PieceMeta {
                id: PieceId::new(0, 1),
                x: 50.0,
                y: 0.0,
            },
            PieceMeta {
                id: PieceId::new(0, 0),
                x: 0.0,
                y: 0.0,
            },
        ];
        let config = PuzzleConfig::new(grid, image(100, 50), pieces).unwrap();
        assert_eq!(config.pieces()[0].id, PieceId::new(0, 0));
        assert_eq!(config.pieces()[1].id, PieceId::new(0, 1));

        let dup = vec![
            PieceMeta {
                id: PieceId::new(0, 0),
                x: 0.0,
                y: 0.0,
            };
            2
        ];
        assert!(matches!(
            PuzzleConfig::new(grid, image(100, 50), dup),
            Err(ConfigError::DuplicatePiece { .. })
        ));

        let outside = vec![
            PieceMeta {
                id: PieceId::new(0, 0),
                x: 0.0,
                y: 0.0,
            },
            PieceMeta {
                id: PieceId::new(1, 0),
                x: 0.0,
                y: 0.0,
            },
        ];
        assert!(matches!(
            PuzzleConfig::new(grid, image(100, 50), outside),
            Err(ConfigError::PieceOutOfGrid { id }) if id == PieceId::new(1, 0)
        ));

        assert!(matches!(
            PuzzleConfig::new(grid, image(100, 50), vec![]),
            Err(ConfigError::PieceCountMismatch {
                expected: 2,
                actual: 0
            })
        ));
        assert!(matches!(
            PuzzleConfig::uniform(grid, image(0, 50)),
            Err(ConfigError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_from_attributes_with_metadata() {
        let source = attrs(&[
            ("rows", "1"),
            ("cols", "2"),
            ("image", "leaves.jpg"),
            ("width", "100"),
            ("height", "50"),
            (
                "pieces",
                r#"[{"id":"piece_0_1","x":50,"y":0},{"id":"piece_0_0","x":0,"y":0}]"#,
            ),
        ]);
        let config = PuzzleConfig::from_attributes(&source).unwrap();
        assert_eq!(config.grid(), GridSize::new(1, 2).unwrap());
        assert_eq!(config.image().filename, "leaves.jpg");
        assert_eq!(
            config.piece(PieceId::new(0, 1)).unwrap().position(),
            Point::new(50.0, 0.0)
        );
    }

    #[test]
    fn test_from_attributes_falls_back_to_uniform() {
        let source = attrs(&[
            ("rows", "2"),
            ("cols", "2"),
            ("image", "leaves.jpg"),
            ("width", "100"),
            ("height", "80"),
        ]);
        let config = PuzzleConfig::from_attributes(&source).unwrap();
        assert_eq!(
            config.piece(PieceId::new(1, 1)).unwrap().position(),
            Point::new(50.0, 40.0)
        );
    }

    #[test]
    fn test_from_attributes_errors() {
        let missing = attrs(&[("rows", "2")]);
        assert!(matches!(
            PuzzleConfig::from_attributes(&missing),
            Err(ConfigError::MissingAttribute { name: "cols" })
        ));

        let bad_number = attrs(&[("rows", "two"), ("cols", "2")]);
        assert!(matches!(
            PuzzleConfig::from_attributes(&bad_number),
            Err(ConfigError::InvalidNumber { name: "rows", .. })
        ));

        let zero = attrs(&[("rows", "0"), ("cols", "2")]);
        assert!(matches!(
            PuzzleConfig::from_attributes(&zero),
            Err(ConfigError::InvalidGrid(_))
        ));

        let bad_json = attrs(&[
            ("rows", "1"),
            ("cols", "1"),
            ("image", "a.png"),
            ("width", "10"),
            ("height", "10"),
            ("pieces", "[{"),
        ]);
        assert!(matches!(
            PuzzleConfig::from_attributes(&bad_json),
            Err(ConfigError::InvalidPieces { .. })
        ));
    }
}
