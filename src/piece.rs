use crate::{Cell, ParseError, Team, TileColor};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Stable for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

impl Display for PieceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WirePiece", into = "WirePiece")]
pub struct Piece {
    pub id: PieceId,
    pub cell: Cell,
    pub color: TileColor,
    pub team: Team,
}

impl Piece {
    /// Two characters: color initial and team initial, e.g. `Pw` for the white pink piece.
    pub fn symbol(&self) -> String {
        let team = match self.team {
            Team::White => 'w',
            Team::Black => 'b',
        };
        format!("{}{team}", self.color.initial())
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {} at {}", self.id, self.team, self.color, self.cell)
    }
}

#[derive(Serialize, Deserialize)]
struct WirePiece {
    id: PieceId,
    col: i64,
    row: i64,
    color: TileColor,
    team: Team,
}

impl TryFrom<WirePiece> for Piece {
    type Error = ParseError;

    fn try_from(wire: WirePiece) -> Result<Self, ParseError> {
        Ok(Self {
            id: wire.id,
            cell: Cell::try_new(wire.col, wire.row).ok_or(ParseError)?,
            color: wire.color,
            team: wire.team,
        })
    }
}

impl From<Piece> for WirePiece {
    fn from(piece: Piece) -> Self {
        Self {
            id: piece.id,
            col: piece.cell.col() as i64,
            row: piece.cell.row() as i64,
            color: piece.color,
            team: piece.team,
        }
    }
}
