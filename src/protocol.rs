//! JSON bodies exchanged with the remote game service.

use crate::{Cell, PieceId};
use serde::{Deserialize, Serialize};

/// Body of `POST /move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub piece_id: PieceId,
    pub to_col: u8,
    pub to_row: u8,
}

impl MoveRequest {
    pub fn new(piece_id: PieceId, to: Cell) -> Self {
        Self {
            piece_id,
            to_col: to.col() as u8,
            to_row: to.row() as u8,
        }
    }

    pub fn to(&self) -> Cell {
        Cell::new(self.to_col.into(), self.to_row.into())
    }
}

/// Body of a `GET /valid-moves/{id}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoves {
    pub piece_id: PieceId,
    pub moves: Vec<Cell>,
}

/// Error body of a non-success response.
///
/// `detail` is usually a string; validation failures send a list of objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// Message to show for a non-success response: the server's `detail` when it
/// sent one, otherwise a generic line naming the status.
pub fn error_message(status: u16, body: &[u8]) -> String {
    let body: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    match body.detail {
        Some(serde_json::Value::String(detail)) => detail,
        Some(serde_json::Value::Null) | None => format!("Request failed: {status}"),
        Some(detail) => detail.to_string(),
    }
}
