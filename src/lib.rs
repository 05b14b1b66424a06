mod board;
mod cell;
mod color;
mod drag;
mod error;
mod geometry;
mod intent;
mod piece;
pub mod protocol;
mod selection;
mod service;
mod session;
mod snapshot;

pub use board::{BoardSurface, CellView, PieceView};
pub use cell::Cell;
pub use color::{Team, TileColor};
pub use drag::DragGesture;
pub use error::{ParseError, ServiceError};
pub use geometry::{GridPos, Point, TileGeometry};
pub use intent::Intent;
pub use piece::{Piece, PieceId};
pub use protocol::{LegalMoves, MoveRequest};
pub use selection::Selection;
pub use service::{GameService, HttpGameService};
pub use session::{Outgoing, Request, RequestKind, Response, Session, Ticket};
pub use snapshot::GameSnapshot;
