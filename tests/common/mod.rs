#![allow(dead_code)]

use kamisado_client::{
    Cell, GameService, GameSnapshot, LegalMoves, MoveRequest, Piece, PieceId, ServiceError, Team,
    TileColor,
};
use std::{collections::HashMap, sync::Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchSnapshot,
    FetchLegalMoves(PieceId),
    CommitMove(MoveRequest),
    Reset,
}

#[derive(Debug)]
struct FakeState {
    initial: GameSnapshot,
    snapshot: GameSnapshot,
    legal_moves: HashMap<PieceId, Vec<Cell>>,
    failure: Option<ServiceError>,
    calls: Vec<Call>,
}

impl FakeState {
    fn call(&mut self, call: Call) -> Result<(), ServiceError> {
        self.calls.push(call);
        match self.failure.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// In-memory game service. Serves whatever legal moves the test configured,
/// and applies committed moves with the baseline win rule.
#[derive(Debug)]
pub struct FakeService {
    state: Mutex<FakeState>,
}

impl FakeService {
    pub fn new(snapshot: GameSnapshot) -> Self {
        Self {
            state: Mutex::new(FakeState {
                initial: snapshot.clone(),
                snapshot,
                legal_moves: HashMap::new(),
                failure: None,
                calls: Vec::new(),
            }),
        }
    }

    pub fn with_moves(self, id: u32, moves: &[(usize, usize)]) -> Self {
        self.set_moves(id, moves);
        self
    }

    pub fn set_moves(&self, id: u32, moves: &[(usize, usize)]) {
        let moves = moves.iter().map(|&(col, row)| Cell::new(col, row)).collect();
        _ = self.state.lock().unwrap().legal_moves.insert(PieceId(id), moves);
    }

    pub fn fail_next(&self, error: ServiceError) {
        self.state.lock().unwrap().failure = Some(error);
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        self.state.lock().unwrap().snapshot = snapshot;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.lock().unwrap().snapshot.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }
}

impl GameService for FakeService {
    fn fetch_snapshot(&self) -> Result<GameSnapshot, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.call(Call::FetchSnapshot)?;
        Ok(state.snapshot.clone())
    }

    fn fetch_legal_moves(&self, piece_id: PieceId) -> Result<LegalMoves, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.call(Call::FetchLegalMoves(piece_id))?;
        Ok(LegalMoves {
            piece_id,
            moves: state.legal_moves.get(&piece_id).cloned().unwrap_or_default(),
        })
    }

    fn commit_move(&self, request: &MoveRequest) -> Result<GameSnapshot, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.call(Call::CommitMove(*request))?;
        let to = request.to();
        let snapshot = &mut state.snapshot;
        let Some(piece) = snapshot
            .pieces
            .iter_mut()
            .find(|piece| piece.id == request.piece_id)
        else {
            return Err(ServiceError::Status {
                status: 404,
                message: "Piece not found".to_string(),
            });
        };
        piece.cell = to;
        let team = piece.team;
        snapshot.forced_color = Some(to.tile_color());
        let reached_baseline = match team {
            Team::White => to.row() == 0,
            Team::Black => to.row() == Cell::HEIGHT - 1,
        };
        if reached_baseline {
            snapshot.winner = Some(team);
        } else {
            snapshot.turn = team.opposite();
        }
        let snapshot = snapshot.clone();
        state.legal_moves.clear();
        Ok(snapshot)
    }

    fn reset(&self) -> Result<(), ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.call(Call::Reset)?;
        state.snapshot = state.initial.clone();
        Ok(())
    }
}

pub fn piece(id: u32, col: usize, row: usize, color: TileColor, team: Team) -> Piece {
    Piece {
        id: PieceId(id),
        cell: Cell::new(col, row),
        color,
        team,
    }
}

pub fn snapshot(turn: Team, forced_color: Option<TileColor>, pieces: Vec<Piece>) -> GameSnapshot {
    GameSnapshot {
        turn,
        forced_color,
        winner: None,
        pieces,
    }
}

/// Opening position: black on row 0 with ids 0..8, white on row 7 with ids 8..16,
/// colors in board order along each row.
pub fn initial_snapshot() -> GameSnapshot {
    let black = TileColor::ALL
        .into_iter()
        .enumerate()
        .map(|(col, color)| piece(col as u32, col, 0, color, Team::Black));
    let white = TileColor::ALL
        .into_iter()
        .enumerate()
        .map(|(col, color)| piece(8 + col as u32, col, 7, color, Team::White));
    snapshot(Team::White, None, black.chain(white).collect())
}

pub fn network_error() -> ServiceError {
    ServiceError::Network("connection refused".to_string())
}
