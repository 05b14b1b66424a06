use crate::{
    Cell, GameService, GameSnapshot, Intent, LegalMoves, MoveRequest, Piece, PieceId, Selection,
    ServiceError, Team,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    FetchSnapshot,
    FetchLegalMoves,
    CommitMove,
    Reset,
}

/// A call to the remote game service requested by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchSnapshot,
    FetchLegalMoves(PieceId),
    CommitMove(MoveRequest),
    Reset,
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::FetchSnapshot => RequestKind::FetchSnapshot,
            Self::FetchLegalMoves(_) => RequestKind::FetchLegalMoves,
            Self::CommitMove(_) => RequestKind::CommitMove,
            Self::Reset => RequestKind::Reset,
        }
    }

    /// Blocks until `service` answers.
    pub fn perform<S: GameService + ?Sized>(&self, service: &S) -> Result<Response, ServiceError> {
        match self {
            Self::FetchSnapshot => service.fetch_snapshot().map(Response::Snapshot),
            Self::FetchLegalMoves(piece_id) => service
                .fetch_legal_moves(*piece_id)
                .map(Response::LegalMoves),
            Self::CommitMove(request) => service.commit_move(request).map(Response::Committed),
            Self::Reset => service.reset().map(|()| Response::ResetDone),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Snapshot(GameSnapshot),
    LegalMoves(LegalMoves),
    Committed(GameSnapshot),
    ResetDone,
}

/// Identifies one request and the session state it was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    seq: u64,
    generation: u64,
    selection: u64,
}

impl Ticket {
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// A request to perform, and the ticket to hand back with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub ticket: Ticket,
    pub request: Request,
}

/// Game session controller.
///
/// Owns the authoritative snapshot and the selection. It performs no I/O:
/// intents produce [`Outgoing`] requests, and their outcomes come back
/// through [`Session::handle_response`], in any order and at any time.
///
/// While a snapshot fetch, a commit or a reset is in flight the board is busy
/// and ignores selection and move intents. Each restart starts a new
/// generation; responses from an older generation are dropped. Once the
/// server confirms a reset the old snapshot is dropped, so a failed reload
/// leaves no board to interact with until a load succeeds.
#[derive(Debug, Default)]
pub struct Session {
    snapshot: Option<GameSnapshot>,
    selection: Selection,
    generation: u64,
    next_seq: u64,
    in_flight: Vec<Outgoing>,
    restarting: bool,
    last_error: Option<ServiceError>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selection.resolve(self.snapshot.as_ref()?)
    }

    /// Legal destinations to highlight. Empty once the game is over.
    pub fn destinations(&self) -> &[Cell] {
        if self.is_over() {
            &[]
        } else {
            self.selection.destinations()
        }
    }

    pub fn is_over(&self) -> bool {
        self.snapshot.as_ref().is_some_and(GameSnapshot::is_over)
    }

    pub fn winner(&self) -> Option<Team> {
        self.snapshot.as_ref()?.winner
    }

    pub fn is_busy(&self) -> bool {
        self.restarting
            || self
                .in_flight
                .iter()
                .any(|outgoing| outgoing.request.kind() != RequestKind::FetchLegalMoves)
    }

    pub fn is_pending(&self, kind: RequestKind) -> bool {
        self.in_flight
            .iter()
            .any(|outgoing| outgoing.request.kind() == kind)
    }

    pub fn pending_requests(&self) -> impl Iterator<Item = &Request> {
        self.in_flight.iter().map(|outgoing| &outgoing.request)
    }

    /// Whether selection and move intents are accepted at all.
    pub fn is_interactive(&self) -> bool {
        self.snapshot.is_some() && !self.is_over() && !self.is_busy()
    }

    pub fn is_piece_enabled(&self, piece: &Piece) -> bool {
        self.is_interactive()
            && self
                .snapshot
                .as_ref()
                .is_some_and(|snapshot| snapshot.is_movable(piece))
    }

    pub fn last_error(&self) -> Option<&ServiceError> {
        self.last_error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Fetches the snapshot from scratch, dropping the selection.
    pub fn load(&mut self) -> Option<Outgoing> {
        self.selection.clear();
        self.refresh()
    }

    /// Fetches the snapshot again. The selection survives if nothing changed.
    pub fn refresh(&mut self) -> Option<Outgoing> {
        if self.is_pending(RequestKind::FetchSnapshot) {
            log::debug!("snapshot fetch already in flight");
            return None;
        }
        Some(self.issue(Request::FetchSnapshot))
    }

    pub fn dispatch(&mut self, intent: Intent) -> Option<Outgoing> {
        match intent {
            Intent::Select(id) => self.select(id),
            Intent::Deselect => {
                self.selection.clear();
                None
            }
            Intent::AttemptMove(cell) => self.attempt_move(cell),
            Intent::Restart => self.restart(),
        }
    }

    fn select(&mut self, id: PieceId) -> Option<Outgoing> {
        if !self.is_interactive() {
            log::debug!("select {id} ignored: board is not interactive");
            return None;
        }
        let snapshot = self.snapshot.as_ref()?;
        let Some(piece) = snapshot.piece(id) else {
            log::debug!("select {id} ignored: no such piece");
            return None;
        };
        if !snapshot.is_movable(piece) {
            log::debug!("select {id} ignored: {piece} cannot move this turn");
            return None;
        }
        if self.selection.is_selected(id) {
            self.selection.clear();
            return None;
        }
        self.selection.select(id);
        Some(self.issue(Request::FetchLegalMoves(id)))
    }

    fn attempt_move(&mut self, cell: Cell) -> Option<Outgoing> {
        if !self.is_interactive() {
            log::debug!("move to {cell} ignored: board is not interactive");
            return None;
        }
        let snapshot = self.snapshot.as_ref()?;
        let Some(piece) = self.selection.resolve(snapshot) else {
            if let Some(id) = self.selection.piece() {
                log::debug!("selected piece {id} is gone, deselecting");
                self.selection.clear();
            }
            return None;
        };
        if !self.selection.contains(cell) {
            log::debug!("move to {cell} ignored: not a legal destination of {piece}");
            return None;
        }
        let request = MoveRequest::new(piece.id, cell);
        Some(self.issue(Request::CommitMove(request)))
    }

    fn restart(&mut self) -> Option<Outgoing> {
        if self.restarting || self.is_pending(RequestKind::CommitMove) {
            log::debug!("restart ignored: request in flight");
            return None;
        }
        self.generation += 1;
        self.restarting = true;
        self.selection.clear();
        Some(self.issue(Request::Reset))
    }

    fn issue(&mut self, request: Request) -> Outgoing {
        self.next_seq += 1;
        let outgoing = Outgoing {
            ticket: Ticket {
                seq: self.next_seq,
                generation: self.generation,
                selection: self.selection.stamp(),
            },
            request,
        };
        log::debug!("request {}: {:?}", self.next_seq, outgoing.request);
        self.in_flight.push(outgoing.clone());
        outgoing
    }

    /// Applies the outcome of a request issued earlier.
    ///
    /// Returns a follow-up request: a completed reset reloads the snapshot.
    pub fn handle_response(
        &mut self,
        ticket: Ticket,
        outcome: Result<Response, ServiceError>,
    ) -> Option<Outgoing> {
        let Some(index) = self
            .in_flight
            .iter()
            .position(|outgoing| outgoing.ticket == ticket)
        else {
            log::warn!("response to unknown request {}", ticket.seq);
            return None;
        };
        let Outgoing { request, .. } = self.in_flight.remove(index);
        if ticket.generation != self.generation {
            log::debug!("dropping stale response to request {}", ticket.seq);
            return None;
        }
        match outcome {
            Ok(response) => {
                self.last_error = None;
                self.apply(ticket, request, response)
            }
            Err(error) => {
                self.fail(ticket, &request, error);
                None
            }
        }
    }

    fn apply(&mut self, ticket: Ticket, request: Request, response: Response) -> Option<Outgoing> {
        match (request, response) {
            (Request::FetchSnapshot, Response::Snapshot(snapshot)) => {
                self.restarting = false;
                self.replace_snapshot(snapshot);
                None
            }
            (Request::FetchLegalMoves(id), Response::LegalMoves(moves)) => {
                if moves.piece_id != id {
                    log::warn!("asked for moves of piece {id}, got piece {}", moves.piece_id);
                    if self.selection.stamp() == ticket.selection {
                        self.selection.clear();
                    }
                } else if !self.selection.populate(ticket.selection, moves) {
                    log::debug!("dropping moves of piece {id}: selection changed");
                }
                None
            }
            (Request::CommitMove(mov), Response::Committed(snapshot)) => {
                log::info!("piece {} moved to {}", mov.piece_id, mov.to());
                self.selection.clear();
                self.replace_snapshot(snapshot);
                None
            }
            (Request::Reset, Response::ResetDone) => {
                log::info!("game reset");
                // The old position is gone on the server.
                self.snapshot = None;
                self.selection.clear();
                Some(self.issue(Request::FetchSnapshot))
            }
            (request, _) => {
                let error =
                    ServiceError::InvalidResponse(format!("unexpected response to {request:?}"));
                self.fail(ticket, &request, error);
                None
            }
        }
    }

    fn fail(&mut self, ticket: Ticket, request: &Request, error: ServiceError) {
        log::warn!("request {} {request:?} failed: {error}", ticket.seq);
        match request {
            Request::FetchLegalMoves(_) => {
                if self.selection.stamp() == ticket.selection {
                    self.selection.clear();
                }
            }
            Request::FetchSnapshot | Request::Reset => self.restarting = false,
            Request::CommitMove(_) => {}
        }
        self.last_error = Some(error);
    }

    fn replace_snapshot(&mut self, snapshot: GameSnapshot) {
        if self.snapshot.as_ref() == Some(&snapshot) {
            return;
        }
        if let Some(id) = self.selection.piece() {
            log::debug!("snapshot changed, deselecting piece {id}");
            self.selection.clear();
        }
        log::debug!("new snapshot\n{snapshot}");
        if let Some(winner) = snapshot.winner {
            log::info!("{winner} wins");
        }
        self.snapshot = Some(snapshot);
    }

    /// Dispatches `intent` and performs the resulting requests against
    /// `service` until the session settles.
    pub fn execute<S: GameService + ?Sized>(&mut self, service: &S, intent: Intent) {
        let next = self.dispatch(intent);
        self.drive(service, next);
    }

    /// [`Session::load`] performed against `service`.
    pub fn run_load<S: GameService + ?Sized>(&mut self, service: &S) {
        let next = self.load();
        self.drive(service, next);
    }

    fn drive<S: GameService + ?Sized>(&mut self, service: &S, mut next: Option<Outgoing>) {
        while let Some(Outgoing { ticket, request }) = next {
            let outcome = request.perform(service);
            next = self.handle_response(ticket, outcome);
        }
    }
}
