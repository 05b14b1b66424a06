use crate::{ParseError, TileColor};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A board cell. Always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    col: u8,
    row: u8,
}

impl Cell {
    pub const WIDTH: usize = 8;
    pub const HEIGHT: usize = 8;
    pub const COUNT: usize = Self::WIDTH * Self::HEIGHT;

    pub const fn new(col: usize, row: usize) -> Self {
        assert!(col < Self::WIDTH && row < Self::HEIGHT);

        Self {
            col: col as u8,
            row: row as u8,
        }
    }

    pub fn try_new(col: i64, row: i64) -> Option<Self> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        if col < Self::WIDTH && row < Self::HEIGHT {
            Some(Self::new(col, row))
        } else {
            None
        }
    }

    pub const fn col(self) -> usize {
        self.col as usize
    }

    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Row-major, top-left first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::HEIGHT).flat_map(|row| (0..Self::WIDTH).map(move |col| Self::new(col, row)))
    }

    pub fn tile_color(self) -> TileColor {
        TileColor::from_index((self.col() + self.row()) % TileColor::COUNT)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

#[derive(Deserialize)]
struct RawCell {
    col: i64,
    row: i64,
}

impl TryFrom<RawCell> for Cell {
    type Error = ParseError;

    fn try_from(raw: RawCell) -> Result<Self, ParseError> {
        Self::try_new(raw.col, raw.row).ok_or(ParseError)
    }
}
