//! The holding area for pieces that are not on the board.

use jigsnap_core::PieceId;
use rand::{Rng, seq::SliceRandom as _};

/// One position in the tray's visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, serde::Serialize)]
pub enum TrayEntry {
    /// A piece waiting to be placed.
    Piece(PieceId),
    /// A gap left behind by a piece that moved onto the board, keeping the
    /// remaining pieces where they were.
    Placeholder,
}

/// Ordered tray contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tray {
    entries: Vec<TrayEntry>,
}

impl Tray {
    /// Creates a tray holding `pieces` in the given order.
    pub fn new<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = PieceId>,
    {
        Self {
            entries: pieces.into_iter().map(TrayEntry::Piece).collect(),
        }
    }

    /// Entries in visual order.
    #[must_use]
    pub fn entries(&self) -> &[TrayEntry] {
        &self.entries
    }

    /// Pieces in visual order, skipping placeholders.
    pub fn pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            TrayEntry::Piece(id) => Some(*id),
            TrayEntry::Placeholder => None,
        })
    }

    /// Whether `piece` is in the tray.
    #[must_use]
    pub fn contains(&self, piece: PieceId) -> bool {
        self.index_of(piece).is_some()
    }

    /// Entry index of `piece`.
    #[must_use]
    pub fn index_of(&self, piece: PieceId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| *entry == TrayEntry::Piece(piece))
    }

    /// Moves `piece` out, leaving a placeholder in its entry.
    pub(crate) fn vacate(&mut self, piece: PieceId) -> bool {
        match self.index_of(piece) {
            Some(index) => {
                self.entries[index] = TrayEntry::Placeholder;
                true
            }
            None => false,
        }
    }

    /// Moves `piece` out, closing the gap.
    pub(crate) fn remove(&mut self, piece: PieceId) -> bool {
        match self.index_of(piece) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Appends `piece` at the end.
    pub(crate) fn push(&mut self, piece: PieceId) {
        self.entries.push(TrayEntry::Piece(piece));
    }

    pub(crate) fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.entries.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn ids(n: u16) -> Vec<PieceId> {
        (0..n).map(|c| PieceId::new(0, c)).collect()
    }

    #[test]
    fn test_vacate_leaves_placeholder() {
        let mut tray = Tray::new(ids(3));
        assert!(tray.vacate(PieceId::new(0, 1)));
        assert_eq!(tray.entries()[1], TrayEntry::Placeholder);
        assert_eq!(tray.entries().len(), 3);
        assert!(!tray.contains(PieceId::new(0, 1)));
        assert!(!tray.vacate(PieceId::new(0, 1)));
    }

    #[test]
    fn test_remove_and_push() {
        let mut tray = Tray::new(ids(3));
        assert!(tray.remove(PieceId::new(0, 0)));
        assert_eq!(tray.entries().len(), 2);
        tray.push(PieceId::new(0, 0));
        assert_eq!(
            tray.pieces().collect::<Vec<_>>(),
            vec![PieceId::new(0, 1), PieceId::new(0, 2), PieceId::new(0, 0)]
        );
    }

    #[test]
    fn test_shuffle_is_seeded_permutation() {
        let mut a = Tray::new(ids(16));
        let mut b = Tray::new(ids(16));
        a.shuffle(&mut Pcg64Mcg::seed_from_u64(7));
        b.shuffle(&mut Pcg64Mcg::seed_from_u64(7));
        assert_eq!(a, b);
        let mut sorted = a.pieces().collect::<Vec<_>>();
        sorted.sort();
        assert_eq!(sorted, ids(16));
    }
}
