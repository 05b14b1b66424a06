use crate::{Cell, GameSnapshot, LegalMoves, Piece, PieceId};

/// Selected piece and the legal destinations fetched for it.
///
/// The piece is held by identity and resolved against the current snapshot.
/// Destinations are only non-empty while a piece is selected. Every change of
/// the selected piece bumps `stamp`, which invalidates destinations still in
/// flight for the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    piece: Option<PieceId>,
    destinations: Vec<Cell>,
    stamp: u64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn piece(&self) -> Option<PieceId> {
        self.piece
    }

    pub fn is_selected(&self, id: PieceId) -> bool {
        self.piece == Some(id)
    }

    pub fn destinations(&self) -> &[Cell] {
        &self.destinations
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.destinations.contains(&cell)
    }

    pub fn stamp(&self) -> u64 {
        self.stamp
    }

    /// Selects `id` with no destinations yet.
    pub fn select(&mut self, id: PieceId) {
        self.piece = Some(id);
        self.destinations.clear();
        self.stamp += 1;
    }

    pub fn clear(&mut self) {
        if self.piece.is_some() {
            self.stamp += 1;
        }
        self.piece = None;
        self.destinations.clear();
    }

    /// Replaces the destinations with `moves` if they were fetched for the
    /// current selection. Returns whether they were accepted.
    pub fn populate(&mut self, stamp: u64, moves: LegalMoves) -> bool {
        if stamp != self.stamp || self.piece != Some(moves.piece_id) {
            return false;
        }
        self.destinations = moves.moves;
        true
    }

    /// The selected piece as it is in `snapshot`, if it is still there.
    pub fn resolve<'a>(&self, snapshot: &'a GameSnapshot) -> Option<&'a Piece> {
        snapshot.piece(self.piece?)
    }
}
