//! Board and tray sizing.
//!
//! The board and the tray are laid out side by side, each with the aspect ratio
//! of the source image. [`compute_layout`] finds the largest scale (never above
//! `1.0`) at which both fit in the viewport, and derives board and piece sizes
//! from it.
//!
//! The computation is pure and deterministic. Callers re-run it whenever the
//! viewport changes.
//!
//! # Examples
//!
//! ```
//! use jigsnap_core::{GridSize, LayoutParams, Size, compute_layout};
//!
//! let grid = GridSize::new(2, 4).unwrap();
//! let layout = compute_layout(
//!     (1000, 500),
//!     Size::new(4000.0, 2000.0),
//!     grid,
//!     &LayoutParams::default(),
//! )
//! .unwrap();
//! assert_eq!(layout.scale, 1.0);
//! assert_eq!(layout.board_width, 1000);
//! assert_eq!(layout.piece_width, 250.0);
//! ```

use crate::{GridSize, Point, Rect, Size};

/// Fixed spacing that the layout must reserve around the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutParams {
    /// Combined horizontal and vertical padding of the page and container.
    pub padding: f64,
    /// Gap between the board and the tray.
    pub gap: f64,
    /// Height of any title or controls rendered above the puzzle.
    pub chrome_height: f64,
}

impl LayoutParams {
    /// Default page padding in pixels.
    pub const DEFAULT_PADDING: f64 = 40.0;
    /// Default board/tray gap in pixels.
    pub const DEFAULT_GAP: f64 = 20.0;
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            padding: Self::DEFAULT_PADDING,
            gap: Self::DEFAULT_GAP,
            chrome_height: 0.0,
        }
    }
}

/// Result of a layout computation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Layout {
    /// Board width in whole pixels.
    pub board_width: u32,
    /// Board height in whole pixels.
    pub board_height: u32,
    /// Width of a single piece.
    pub piece_width: f64,
    /// Height of a single piece.
    pub piece_height: f64,
    /// Ratio of board pixels to source image pixels, in `(0, 1]`.
    pub scale: f64,
}

impl Layout {
    /// Board size in pixels. The tray has the same size.
    #[must_use]
    pub fn board_size(&self) -> Size {
        Size::new(f64::from(self.board_width), f64::from(self.board_height))
    }

    /// Size of a single piece.
    #[must_use]
    pub fn piece_size(&self) -> Size {
        Size::new(self.piece_width, self.piece_height)
    }

    /// Tray bounds in tray-local coordinates.
    #[must_use]
    pub fn tray_bounds(&self) -> Rect {
        Rect::from_size(self.board_size())
    }

    /// Maps a source-image pixel coordinate onto the board.
    #[must_use]
    pub fn scale_point(&self, source: Point) -> Point {
        source.scale(self.scale)
    }
}

/// Error returned by [`compute_layout`].
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The source image has a zero dimension.
    #[display("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// Padding and chrome leave no room for the puzzle.
    #[display("viewport {width}x{height} leaves no room for the puzzle")]
    ViewportTooSmall {
        /// Viewport width.
        width: f64,
        /// Viewport height.
        height: f64,
    },
    /// A spacing parameter is negative or not finite.
    #[display("layout parameter {name} must be finite and non-negative, got {value}")]
    InvalidParam {
        /// Field name in [`LayoutParams`].
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The parameters do not yield a positive, finite scale.
    #[display("no positive scale fits the puzzle, got {scale}")]
    NoScale {
        /// The computed scale.
        scale: f64,
    },
}

impl LayoutParams {
    fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in [
            ("padding", self.padding),
            ("gap", self.gap),
            ("chrome_height", self.chrome_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParam { name, value });
            }
        }
        Ok(())
    }
}

/// Computes board and piece dimensions for the given image and viewport.
///
/// The gap between board and tray is fitted at the same scale as the images,
/// while pages render it unscaled. A shrunk layout can therefore overshoot the
/// available width by up to `gap * (1 - scale)` pixels; this is accepted.
///
/// # Errors
///
/// Returns [`LayoutError::EmptyImage`] if either image dimension is zero,
/// [`LayoutError::InvalidParam`] for a negative or non-finite spacing,
/// [`LayoutError::ViewportTooSmall`] if the viewport (after padding and chrome)
/// has no positive area or is not finite, and [`LayoutError::NoScale`] if no
/// positive scale results.
pub fn compute_layout(
    (image_width, image_height): (u32, u32),
    viewport: Size,
    grid: GridSize,
    params: &LayoutParams,
) -> Result<Layout, LayoutError> {
    if image_width == 0 || image_height == 0 {
        return Err(LayoutError::EmptyImage {
            width: image_width,
            height: image_height,
        });
    }
    params.validate()?;

    let available_width = viewport.width - params.padding;
    let available_height = viewport.height - params.padding - params.chrome_height;
    if !(available_width.is_finite() && available_height.is_finite())
        || available_width <= 0.0
        || available_height <= 0.0
    {
        return Err(LayoutError::ViewportTooSmall {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let image_width = f64::from(image_width);
    let image_height = f64::from(image_height);

    // Board and tray sit side by side, both image-sized.
    let content_width = image_width * 2.0 + params.gap;
    let content_height = image_height;

    let width_scale = available_width / content_width;
    let height_scale = available_height / content_height;
    let scale = width_scale.min(height_scale).min(1.0);
    if !(scale.is_finite() && scale > 0.0) {
        return Err(LayoutError::NoScale { scale });
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let board_width = (image_width * scale).floor() as u32;
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let board_height = (image_height * scale).floor() as u32;

    let layout = Layout {
        board_width,
        board_height,
        piece_width: f64::from(board_width) / f64::from(grid.cols()),
        piece_height: f64::from(board_height) / f64::from(grid.rows()),
        scale,
    };
    log::debug!(
        "layout: board {}x{}, piece {:.1}x{:.1}, scale {:.3}",
        layout.board_width,
        layout.board_height,
        layout.piece_width,
        layout.piece_height,
        layout.scale
    );
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(rows: u16, cols: u16) -> GridSize {
        GridSize::new(rows, cols).unwrap()
    }

    #[test]
    fn test_no_upscaling_in_wide_viewport() {
        let layout = compute_layout(
            (1000, 500),
            Size::new(5000.0, 3000.0),
            grid(2, 4),
            &LayoutParams::default(),
        )
        .unwrap();
        assert!((layout.scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(layout.board_width, 1000);
        assert_eq!(layout.board_height, 500);
        assert!((layout.piece_width - f64::from(layout.board_width) / 4.0).abs() < f64::EPSILON);
        assert!((layout.piece_height - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_width_constrained() {
        // available width 1020 - 40 = 980 over content 2*1000 + 20 = 2020
        let layout = compute_layout(
            (1000, 500),
            Size::new(1020.0, 3000.0),
            grid(2, 4),
            &LayoutParams::default(),
        )
        .unwrap();
        let expected = 980.0 / 2020.0;
        assert!((layout.scale - expected).abs() < 1e-12);
        assert_eq!(layout.board_width, 485);
        assert_eq!(layout.board_height, 242);
    }

    #[test]
    fn test_height_constrained_with_chrome() {
        let params = LayoutParams {
            chrome_height: 60.0,
            ..LayoutParams::default()
        };
        // available height 400 - 40 - 60 = 300 over 500
        let layout =
            compute_layout((1000, 500), Size::new(5000.0, 400.0), grid(3, 3), &params).unwrap();
        assert!((layout.scale - 0.6).abs() < 1e-12);
        assert_eq!(layout.board_width, 600);
        assert_eq!(layout.board_height, 300);
        assert!((layout.piece_height - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            compute_layout(
                (0, 10),
                Size::new(100.0, 100.0),
                grid(1, 1),
                &LayoutParams::default()
            ),
            Err(LayoutError::EmptyImage {
                width: 0,
                height: 10
            })
        );
        assert!(matches!(
            compute_layout(
                (10, 10),
                Size::new(30.0, 500.0),
                grid(1, 1),
                &LayoutParams::default()
            ),
            Err(LayoutError::ViewportTooSmall { .. })
        ));
        assert!(matches!(
            compute_layout(
                (10, 10),
                Size::new(f64::NAN, 500.0),
                grid(1, 1),
                &LayoutParams::default()
            ),
            Err(LayoutError::ViewportTooSmall { .. })
        ));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let viewport = Size::new(1100.0, 3000.0);
        for (name, params) in [
            (
                "gap",
                LayoutParams {
                    gap: f64::NAN,
                    ..LayoutParams::default()
                },
            ),
            (
                "gap",
                LayoutParams {
                    gap: -3000.0,
                    ..LayoutParams::default()
                },
            ),
            (
                "padding",
                LayoutParams {
                    padding: f64::INFINITY,
                    ..LayoutParams::default()
                },
            ),
            (
                "chrome_height",
                LayoutParams {
                    chrome_height: -1.0,
                    ..LayoutParams::default()
                },
            ),
        ] {
            let result = compute_layout((1000, 500), viewport, grid(2, 2), &params);
            assert!(
                matches!(result, Err(LayoutError::InvalidParam { name: n, .. }) if n == name),
                "{name}: {result:?}"
            );
        }
    }

    #[test]
    fn test_huge_gap_still_fits_width() {
        let params = LayoutParams {
            gap: 1e9,
            ..LayoutParams::default()
        };
        let layout = compute_layout((1000, 500), Size::new(1100.0, 3000.0), grid(2, 2), &params)
            .unwrap();
        assert!(layout.scale > 0.0);
        assert!(f64::from(layout.board_width) * 2.0 <= 1060.0);
    }

    #[test]
    fn test_scale_underflow_rejected() {
        let params = LayoutParams {
            padding: 0.0,
            gap: f64::MAX,
            chrome_height: 0.0,
        };
        // 1e-300 / f64::MAX underflows to zero.
        assert!(matches!(
            compute_layout((1000, 500), Size::new(1e-300, 3000.0), grid(2, 2), &params),
            Err(LayoutError::NoScale { .. })
        ));
    }

    #[test]
    fn test_scale_point() {
        let layout = compute_layout(
            (1000, 500),
            Size::new(1020.0, 3000.0),
            grid(2, 4),
            &LayoutParams::default(),
        )
        .unwrap();
        let p = layout.scale_point(Point::new(250.0, 250.0));
        assert!((p.x - 250.0 * layout.scale).abs() < 1e-12);
        assert!((p.y - 250.0 * layout.scale).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_board_and_tray_fit_viewport(
            width in 1u32..5000,
            height in 1u32..5000,
            vw in 100.0f64..4000.0,
            vh in 100.0f64..4000.0,
            rows in 1u16..12,
            cols in 1u16..12,
        ) {
            let params = LayoutParams::default();
            let layout = compute_layout((width, height), Size::new(vw, vh), grid(rows, cols), &params).unwrap();
            prop_assert!(layout.scale > 0.0 && layout.scale <= 1.0);
            prop_assert!(layout.board_width <= width);
            prop_assert!(layout.board_height <= height);
            // Rendered gap is unscaled; the fit allows it to overshoot by gap * (1 - scale).
            let rendered_width = f64::from(layout.board_width) * 2.0 + params.gap;
            let overshoot = params.gap * (1.0 - layout.scale);
            prop_assert!(rendered_width <= vw - params.padding + overshoot + 1e-6);
            prop_assert!(f64::from(layout.board_height) <= vh - params.padding + 1e-6);
            prop_assert!((layout.piece_width * f64::from(cols) - f64::from(layout.board_width)).abs() < 1e-6);
        }
    }
}
