use crate::{Cell, PieceId};

/// What the user asked the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Select a piece. Selecting the already selected piece deselects it.
    Select(PieceId),
    Deselect,
    /// Move the selected piece.
    AttemptMove(Cell),
    /// Reset the game on the server and reload it.
    Restart,
}
