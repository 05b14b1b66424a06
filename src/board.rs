use crate::{Cell, DragGesture, Intent, Piece, PieceId, Point, Session, TileColor, TileGeometry};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub cell: Cell,
    pub tile_color: TileColor,
    /// Top-left corner.
    pub origin: Point,
    /// The cell is a legal destination of the selected piece.
    pub highlighted: bool,
    /// Center of the destination marker, for highlighted cells.
    pub marker: Option<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceView {
    pub piece: Piece,
    /// Top-left corner: the authoritative cell, or the drag position.
    pub position: Point,
    pub disabled: bool,
    pub selected: bool,
    pub dragging: bool,
}

/// Board interaction surface.
///
/// Derives what to draw from the session, and turns pointer events into
/// intents for it. Holds nothing but the gesture in progress: one pointer, so
/// at most one piece is dragged at a time.
#[derive(Debug)]
pub struct BoardSurface {
    geometry: TileGeometry,
    drag: Option<DragGesture>,
    board_press: bool,
}

impl BoardSurface {
    pub fn new(geometry: TileGeometry) -> Self {
        Self {
            geometry,
            drag: None,
            board_press: false,
        }
    }

    pub fn geometry(&self) -> TileGeometry {
        self.geometry
    }

    pub fn dragged_piece(&self) -> Option<PieceId> {
        self.drag.map(|drag| drag.piece())
    }

    pub fn cells(&self, session: &Session) -> Vec<CellView> {
        let destinations = session.destinations();
        Cell::all()
            .map(|cell| {
                let highlighted = destinations.contains(&cell);
                CellView {
                    cell,
                    tile_color: cell.tile_color(),
                    origin: self.geometry.cell_to_pixel(cell),
                    highlighted,
                    marker: highlighted.then(|| self.geometry.cell_center(cell)),
                }
            })
            .collect()
    }

    /// Pieces in paint order: the dragged piece comes last.
    pub fn pieces(&self, session: &Session) -> Vec<PieceView> {
        let Some(snapshot) = session.snapshot() else {
            return Vec::new();
        };
        let mut views: Vec<PieceView> = snapshot
            .pieces
            .iter()
            .map(|piece| {
                let authoritative = self.geometry.cell_to_pixel(piece.cell);
                let drag = self.drag.filter(|drag| drag.piece() == piece.id);
                PieceView {
                    piece: *piece,
                    position: drag.map_or(authoritative, |drag| {
                        drag.render_position(authoritative)
                    }),
                    disabled: !session.is_piece_enabled(piece),
                    selected: session.selection().is_selected(piece.id),
                    dragging: drag.is_some_and(|drag| drag.is_dragging()),
                }
            })
            .collect();
        views.sort_by_key(|view| view.dragging);
        views
    }

    pub fn pointer_pressed(&mut self, session: &Session, pointer: Point) -> Option<Intent> {
        self.cancel();
        let cell = self.geometry.grid_pos_at(pointer).cell()?;
        let snapshot = session.snapshot()?;
        let Some(piece) = snapshot.piece_at(cell) else {
            self.board_press = true;
            return None;
        };
        let mut drag = DragGesture::new(piece.id);
        let intent = drag.press(
            pointer,
            self.geometry.cell_to_pixel(piece.cell),
            !session.is_piece_enabled(piece),
            session.selection().is_selected(piece.id),
        );
        if drag.is_dragging() {
            self.drag = Some(drag);
        }
        intent
    }

    pub fn pointer_moved(&mut self, pointer: Point) {
        if let Some(drag) = &mut self.drag {
            drag.pointer_moved(pointer);
        }
    }

    /// A click on empty board space moves the selected piece there when it is
    /// a legal destination, and deselects otherwise.
    pub fn pointer_released(&mut self, session: &Session, pointer: Point) -> Option<Intent> {
        if let Some(mut drag) = self.drag.take() {
            let piece_exists = session
                .snapshot()
                .is_some_and(|snapshot| snapshot.piece(drag.piece()).is_some());
            if !piece_exists {
                drag.cancel();
                return None;
            }
            return drag.release(self.geometry, session.destinations());
        }
        if !std::mem::take(&mut self.board_press) {
            return None;
        }
        match self.geometry.grid_pos_at(pointer).cell() {
            Some(cell) if session.destinations().contains(&cell) => Some(Intent::AttemptMove(cell)),
            _ => Some(Intent::Deselect),
        }
    }

    /// Abandons any gesture in progress.
    pub fn cancel(&mut self) {
        self.drag = None;
        self.board_press = false;
    }
}
