//! Grid dimensions and row-major indexing.

use crate::PieceId;

/// Row and column counts of a puzzle.
///
/// Both counts are at least one. Cells are addressed in row-major order.
///
/// # Examples
///
/// ```
/// use jigsnap_core::{GridSize, PieceId};
///
/// let grid = GridSize::new(2, 3).unwrap();
/// assert_eq!(grid.len(), 6);
/// assert_eq!(grid.index_of(PieceId::new(1, 0)), Some(3));
/// assert_eq!(grid.ids().last(), Some(PieceId::new(1, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: u16,
    cols: u16,
}

/// Error returned when constructing a [`GridSize`] with a zero dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("grid must have at least one row and column, got {rows}x{cols}")]
pub struct GridSizeError {
    /// Requested row count.
    pub rows: u16,
    /// Requested column count.
    pub cols: u16,
}

impl GridSize {
    /// Creates a grid size.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError`] if `rows` or `cols` is zero.
    pub const fn new(rows: u16, cols: u16) -> Result<Self, GridSizeError> {
        if rows == 0 || cols == 0 {
            return Err(GridSizeError { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> u16 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> u16 {
        self.cols
    }

    /// Returns the total number of cells (`rows * cols`).
    #[must_use]
    pub const fn len(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Always `false`; a grid has at least one cell.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Returns whether `id` addresses a cell inside this grid.
    #[must_use]
    pub const fn contains(self, id: PieceId) -> bool {
        id.row() < self.rows && id.col() < self.cols
    }

    /// Returns the row-major index of `id`, or `None` if it lies outside the grid.
    #[must_use]
    pub const fn index_of(self, id: PieceId) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        Some(id.row() as usize * self.cols as usize + id.col() as usize)
    }

    /// Returns the id at a row-major index, or `None` if out of range.
    #[must_use]
    pub fn id_at(self, index: usize) -> Option<PieceId> {
        if index >= self.len() {
            return None;
        }
        let cols = usize::from(self.cols);
        let row = u16::try_from(index / cols).ok()?;
        let col = u16::try_from(index % cols).ok()?;
        Some(PieceId::new(row, col))
    }

    /// Iterates over every cell id in row-major order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn ids(self) -> impl DoubleEndedIterator<Item = PieceId> + ExactSizeIterator {
        let cols = usize::from(self.cols);
        (0..self.len()).map(move |i| PieceId::new((i / cols) as u16, (i % cols) as u16))
    }
}
