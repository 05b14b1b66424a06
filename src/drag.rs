use crate::{Cell, Intent, PieceId, Point, TileGeometry};

/// Pointer drag of one piece.
///
/// Only visual: the dragged position is never written into the snapshot. The
/// piece renders at its authoritative cell again as soon as the gesture ends,
/// and at its new cell once a snapshot with the committed move arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    piece: PieceId,
    state: DragState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging(Drag),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    /// Pointer position minus piece origin at the time of the press.
    grab_offset: Point,
    /// Authoritative top-left of the piece when the gesture started.
    origin: Point,
    /// Current top-left of the piece.
    position: Point,
    was_selected: bool,
}

impl DragGesture {
    /// Displacement up to which a press and release count as a click.
    pub const CLICK_SLOP: f32 = 2.0;

    pub fn new(piece: PieceId) -> Self {
        Self {
            piece,
            state: DragState::Idle,
        }
    }

    pub fn piece(&self) -> PieceId {
        self.piece
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Starts a drag unless the piece is disabled.
    ///
    /// Returns the selection request for a piece that is not selected yet, so
    /// its legal destinations load while it is being dragged.
    pub fn press(
        &mut self,
        pointer: Point,
        origin: Point,
        disabled: bool,
        selected: bool,
    ) -> Option<Intent> {
        if disabled || self.is_dragging() {
            return None;
        }
        self.state = DragState::Dragging(Drag {
            grab_offset: pointer - origin,
            origin,
            position: origin,
            was_selected: selected,
        });
        if selected {
            None
        } else {
            Some(Intent::Select(self.piece))
        }
    }

    pub fn pointer_moved(&mut self, pointer: Point) {
        if let DragState::Dragging(drag) = &mut self.state {
            drag.position = pointer - drag.grab_offset;
        }
    }

    /// Ends the gesture and snaps the piece back to its authoritative position.
    ///
    /// A release without displacement is a click: it toggles the selection of a
    /// piece that was already selected when pressed. A drop is turned into a move
    /// attempt only when it lands on one of `destinations`.
    pub fn release(&mut self, geometry: TileGeometry, destinations: &[Cell]) -> Option<Intent> {
        let DragState::Dragging(drag) = self.state else {
            return None;
        };
        self.state = DragState::Idle;

        if (drag.position - drag.origin).length() <= Self::CLICK_SLOP {
            return drag.was_selected.then_some(Intent::Select(self.piece));
        }

        let grid_pos = geometry.pixel_to_cell(drag.position);
        let Some(cell) = grid_pos.cell() else {
            log::debug!(
                "piece {} dropped off the board at ({},{})",
                self.piece,
                grid_pos.col,
                grid_pos.row
            );
            return None;
        };
        if !destinations.contains(&cell) {
            log::debug!("piece {} dropped on {cell}, not a legal destination", self.piece);
            return None;
        }
        Some(Intent::AttemptMove(cell))
    }

    /// Abandons the gesture without any intent, e.g. when the pointer is lost.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Where to draw the piece whose authoritative top-left is `authoritative`.
    pub fn render_position(&self, authoritative: Point) -> Point {
        match self.state {
            DragState::Idle => authoritative,
            DragState::Dragging(drag) => drag.position,
        }
    }
}
