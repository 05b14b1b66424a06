use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const COUNT: usize = 2;
    pub const ALL: [Self; Self::COUNT] = [Self::White, Self::Black];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Team {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|team| team.name() == s)
            .ok_or(ParseError)
    }
}

/// Tile color affinity of a piece, and the color of a board tile.
///
/// Variants are in board order: the tile under `(col, row)` is
/// `TileColor::ALL[(col + row) % 8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TileColor {
    Brown,
    Turquoise,
    Blue,
    Yellow,
    Pink,
    Green,
    Red,
    Orange,
}

impl TileColor {
    pub const COUNT: usize = 8;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Brown,
        Self::Turquoise,
        Self::Blue,
        Self::Yellow,
        Self::Pink,
        Self::Green,
        Self::Red,
        Self::Orange,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        match Self::ALL.get(index) {
            Some(&color) => color,
            None => panic!("Invalid TileColor index"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Brown => "brown",
            Self::Turquoise => "turquoise",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
        }
    }

    /// Upper case first letter of the name. Not unique: brown and blue share `B`.
    pub fn initial(self) -> char {
        char::from(self.name().as_bytes()[0].to_ascii_uppercase())
    }
}

impl Display for TileColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TileColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or(ParseError)
    }
}
