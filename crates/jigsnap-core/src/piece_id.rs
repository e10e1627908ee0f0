//! Piece identity.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Identity of a puzzle piece: the grid cell it belongs to.
///
/// Piece ids double as slot ids: the slot at `(row, col)` accepts exactly the
/// piece whose id is `(row, col)`. The canonical text form is
/// `piece_{row}_{col}`, which is also the stem of the piece image file name.
///
/// # Examples
///
/// ```
/// use jigsnap_core::PieceId;
///
/// let id = PieceId::new(1, 2);
/// assert_eq!(id.to_string(), "piece_1_2");
/// assert_eq!("piece_1_2".parse::<PieceId>(), Ok(id));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct PieceId {
    row: u16,
    col: u16,
}

impl PieceId {
    const PREFIX: &'static str = "piece_";

    /// Creates an id from a row and column.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Returns the row of this piece's home cell.
    #[must_use]
    pub const fn row(self) -> u16 {
        self.row
    }

    /// Returns the column of this piece's home cell.
    #[must_use]
    pub const fn col(self) -> u16 {
        self.col
    }
}

impl Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}_{}", Self::PREFIX, self.row, self.col)
    }
}

/// Error returned when parsing a [`PieceId`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PieceIdParseError {
    /// The text does not start with `piece_`.
    #[display("missing `piece_` prefix in {text:?}")]
    MissingPrefix {
        /// The rejected input.
        text: String,
    },
    /// The row and column are not separated by `_`.
    #[display("missing row/column separator in {text:?}")]
    MissingSeparator {
        /// The rejected input.
        text: String,
    },
    /// The row or column is not a valid number.
    #[display("invalid coordinate {part:?} in {text:?}")]
    InvalidCoordinate {
        /// The offending coordinate text.
        part: String,
        /// The rejected input.
        text: String,
    },
}

impl FromStr for PieceId {
    type Err = PieceIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| PieceIdParseError::MissingPrefix { text: s.to_owned() })?;
        let (row, col) = rest
            .split_once('_')
            .ok_or_else(|| PieceIdParseError::MissingSeparator { text: s.to_owned() })?;
        let parse = |part: &str| {
            part.parse::<u16>()
                .map_err(|_| PieceIdParseError::InvalidCoordinate {
                    part: part.to_owned(),
                    text: s.to_owned(),
                })
        };
        Ok(Self::new(parse(row)?, parse(col)?))
    }
}

impl From<PieceId> for String {
    fn from(id: PieceId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for PieceId {
    type Error = PieceIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id = PieceId::new(3, 14);
        assert_eq!(id.to_string(), "piece_3_14");
        assert_eq!("piece_3_14".parse::<PieceId>(), Ok(id));
        assert_eq!(id.row(), 3);
        assert_eq!(id.col(), 14);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "tile_0_0".parse::<PieceId>(),
            Err(PieceIdParseError::MissingPrefix { .. })
        ));
        assert!(matches!(
            "piece_00".parse::<PieceId>(),
            Err(PieceIdParseError::MissingSeparator { .. })
        ));
        assert!(matches!(
            "piece_a_1".parse::<PieceId>(),
            Err(PieceIdParseError::InvalidCoordinate { part, .. }) if part == "a"
        ));
        assert!(matches!(
            "piece_1_-1".parse::<PieceId>(),
            Err(PieceIdParseError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let id = PieceId::new(0, 1);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"piece_0_1\"");
        let back: PieceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
