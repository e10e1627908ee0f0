//! Slot occupancy for the grid placement modes.

use jigsnap_core::{GridSize, PieceId};

/// A `rows × cols` grid of slots, each holding zero or one piece.
///
/// Slots share their identity with the piece that belongs in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: GridSize,
    slots: Vec<Option<PieceId>>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            slots: vec![None; grid.len()],
        }
    }

    /// Grid dimensions.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Returns the piece in `slot`, or `None` if the slot is empty or outside the grid.
    #[must_use]
    pub fn occupant(&self, slot: PieceId) -> Option<PieceId> {
        self.grid.index_of(slot).and_then(|i| self.slots[i])
    }

    /// Returns the slot currently holding `piece`.
    #[must_use]
    pub fn slot_of(&self, piece: PieceId) -> Option<PieceId> {
        self.iter()
            .find_map(|(slot, occupant)| (occupant == Some(piece)).then_some(slot))
    }

    /// Puts `piece` into `slot`, returning the previous occupant.
    ///
    /// Does nothing and returns `None` when `slot` is outside the grid.
    pub(crate) fn put(&mut self, slot: PieceId, piece: PieceId) -> Option<PieceId> {
        let index = self.grid.index_of(slot)?;
        self.slots[index].replace(piece)
    }

    /// Empties `slot`, returning its previous occupant.
    pub(crate) fn take(&mut self, slot: PieceId) -> Option<PieceId> {
        let index = self.grid.index_of(slot)?;
        self.slots[index].take()
    }

    /// Iterates over `(slot, occupant)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, Option<PieceId>)> + '_ {
        self.grid.ids().zip(self.slots.iter().copied())
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Full scan: every slot holds exactly its own piece.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.iter()
            .all(|(slot, occupant)| occupant == Some(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_take_and_scan() {
        let grid = GridSize::new(1, 2).unwrap();
        let a = PieceId::new(0, 0);
        let b = PieceId::new(0, 1);
        let mut board = Board::new(grid);
        assert!(!board.is_solved());

        assert_eq!(board.put(a, b), None);
        assert_eq!(board.occupant(a), Some(b));
        assert_eq!(board.slot_of(b), Some(a));
        assert_eq!(board.put(b, a), None);
        assert_eq!(board.occupied_count(), 2);
        // Full but swapped.
        assert!(!board.is_solved());

        assert_eq!(board.take(a), Some(b));
        assert_eq!(board.take(b), Some(a));
        board.put(a, a);
        board.put(b, b);
        assert!(board.is_solved());
    }

    #[test]
    fn test_outside_slot_is_ignored() {
        let mut board = Board::new(GridSize::new(1, 1).unwrap());
        let outside = PieceId::new(5, 5);
        assert_eq!(board.put(outside, PieceId::new(0, 0)), None);
        assert_eq!(board.occupant(outside), None);
        assert_eq!(board.occupied_count(), 0);
    }
}
