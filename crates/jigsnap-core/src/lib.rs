//! Core value types for the Jigsnap puzzle.
//!
//! This crate holds the pieces of the puzzle that do not change while a game
//! is played:
//!
//! - [`piece_id`]: [`PieceId`], the `(row, col)` identity shared by pieces and slots
//! - [`grid`]: [`GridSize`] and row-major indexing
//! - [`geometry`]: pixel-space [`Point`], [`Size`] and [`Rect`]
//! - [`layout`]: the layout engine fitting board and tray into a viewport
//! - [`config`]: [`PuzzleConfig`], read once from page-embedded attributes
//! - [`assets`]: URL conventions for piece and reference images
//!
//! # Examples
//!
//! ```
//! use jigsnap_core::{GridSize, ImageInfo, LayoutParams, PieceId, PuzzleConfig, Size, compute_layout};
//!
//! let grid = GridSize::new(2, 2).unwrap();
//! let image = ImageInfo { filename: "cat.jpg".into(), width: 800, height: 600 };
//! let config = PuzzleConfig::uniform(grid, image).unwrap();
//!
//! let layout = compute_layout((800, 600), Size::new(1000.0, 800.0), grid, &LayoutParams::default())
//!     .unwrap();
//! let target = layout.scale_point(config.piece(PieceId::new(1, 1)).unwrap().position());
//! assert!(target.x > 0.0 && target.y > 0.0);
//! ```

pub mod assets;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod piece_id;

pub use self::{
    assets::AssetPaths,
    config::{AttributeSource, ConfigError, ImageInfo, PieceMeta, PuzzleConfig},
    geometry::{Point, Rect, Size},
    grid::{GridSize, GridSizeError},
    layout::{Layout, LayoutError, LayoutParams, compute_layout},
    piece_id::{PieceId, PieceIdParseError},
};
