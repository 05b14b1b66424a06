use crate::{Cell, Piece, PieceId, Team, TileColor};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Complete authoritative game state as served by the remote game service.
///
/// Replaced wholesale on every load and commit, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn: Team,
    pub forced_color: Option<TileColor>,
    pub winner: Option<Team>,
    pub pieces: Vec<Piece>,
}

impl GameSnapshot {
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.cell == cell)
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether the rules let `piece` be picked up this turn.
    pub fn is_movable(&self, piece: &Piece) -> bool {
        piece.team == self.turn && self.forced_color.is_none_or(|color| piece.color == color)
    }

    pub fn forced_color_label(&self) -> &'static str {
        match self.forced_color {
            Some(color) => color.name(),
            None => "any",
        }
    }
}

impl Display for GameSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let winner = match self.winner {
            Some(team) => team.name(),
            None => "none",
        };
        writeln!(
            f,
            "turn: {} | forced color: {} | winner: {winner}",
            self.turn,
            self.forced_color_label()
        )?;
        let header: Vec<String> = (0..Cell::WIDTH).map(|col| col.to_string()).collect();
        writeln!(f, "    {}", header.join("  "))?;
        for row in 0..Cell::HEIGHT {
            write!(f, "{row} |")?;
            for col in 0..Cell::WIDTH {
                let cell = Cell::new(col, row);
                match self.piece_at(cell) {
                    Some(piece) => write!(f, " {}", piece.symbol())?,
                    None => {
                        let tile = cell.tile_color().initial().to_ascii_lowercase();
                        write!(f, " {tile}.")?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
