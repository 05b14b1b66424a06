use crate::worker::RemoteWorker;
use eframe::{
    App,
    egui::{
        self, Align2, CentralPanel, Color32, Frame, Id, Order, Painter, Pos2, Rect, Sense,
        SidePanel, Stroke, StrokeKind, Theme, Ui, Vec2,
    },
};
use kamisado_client::{
    BoardSurface, GameService, Intent, Outgoing, PieceView, Point, Session, Team, TileColor,
    TileGeometry,
};
use std::sync::Arc;

pub struct KamisadoApp {
    session: Session,
    board: BoardSurface,
    worker: RemoteWorker,
}

impl KamisadoApp {
    pub fn new(
        ctx: &eframe::CreationContext,
        service: Arc<dyn GameService>,
        geometry: TileGeometry,
    ) -> Self {
        let mut app = Self {
            session: Session::new(),
            board: BoardSurface::new(geometry),
            worker: RemoteWorker::new(service, ctx.egui_ctx.clone()),
        };
        app.load();
        app
    }

    fn tile_color(color: TileColor) -> Color32 {
        match color {
            TileColor::Brown => Color32::from_rgb(139, 69, 19),
            TileColor::Turquoise => Color32::from_rgb(64, 224, 208),
            TileColor::Blue => Color32::from_rgb(30, 144, 255),
            TileColor::Yellow => Color32::from_rgb(255, 215, 0),
            TileColor::Pink => Color32::from_rgb(255, 105, 180),
            TileColor::Green => Color32::from_rgb(50, 205, 50),
            TileColor::Red => Color32::from_rgb(220, 20, 60),
            TileColor::Orange => Color32::from_rgb(255, 165, 0),
        }
    }

    fn team_color(team: Team) -> Color32 {
        match team {
            Team::White => Color32::from_rgb(240, 240, 235),
            Team::Black => Color32::from_rgb(30, 30, 30),
        }
    }

    fn load(&mut self) {
        self.board.cancel();
        if let Some(outgoing) = self.session.load() {
            self.submit(outgoing);
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        if let Some(outgoing) = self.session.dispatch(intent) {
            self.submit(outgoing);
        }
    }

    fn submit(&self, outgoing: Outgoing) {
        self.worker.submit(outgoing);
    }

    fn process_responses(&mut self) {
        for (ticket, outcome) in self.worker.completed() {
            if let Some(outgoing) = self.session.handle_response(ticket, outcome) {
                self.submit(outgoing);
            }
        }
    }

    fn update_side_panel(&mut self, ui: &mut Ui) {
        match self.session.snapshot() {
            Some(snapshot) => {
                _ = ui.heading(format!("Turn: {}", snapshot.turn));
                _ = ui.label(format!("Forced color: {}", snapshot.forced_color_label()));
            }
            None => {
                _ = ui.heading("Loading…");
            }
        }
        if self.session.is_busy() {
            _ = ui.spinner();
        }
        _ = ui.separator();

        if ui.button("Restart Game").clicked() {
            self.dispatch(Intent::Restart);
        }
        if self.session.snapshot().is_none()
            && !self.session.is_busy()
            && ui.button("Reload").clicked()
        {
            self.load();
        }

        if let Some(error) = self.session.last_error() {
            _ = ui.separator();
            _ = ui.colored_label(Color32::DARK_RED, error.to_string());
            if ui.button("Dismiss").clicked() {
                self.session.dismiss_error();
            }
        }
    }

    fn update_board(&mut self, ui: &mut Ui) {
        let board_size = self.board.geometry().board_size();
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(board_size), Sense::click_and_drag());
        let origin = response.rect.min;

        self.handle_pointer(ui, &response, origin);

        let tile_size = self.board.geometry().tile_size();
        for view in self.board.cells(&self.session) {
            let rect =
                Rect::from_min_size(to_screen(origin, view.origin), Vec2::splat(tile_size));
            _ = painter.rect_filled(rect, 0.0, Self::tile_color(view.tile_color));
            if view.highlighted {
                _ = painter.rect_stroke(
                    rect,
                    0.0,
                    Stroke::new(4.0, Color32::WHITE),
                    StrokeKind::Inside,
                );
            }
        }
        for view in self.board.cells(&self.session) {
            if let Some(marker) = view.marker {
                _ = painter.circle_filled(
                    to_screen(origin, marker),
                    5.0,
                    Color32::from_black_alpha(153),
                );
            }
        }
        for view in self.board.pieces(&self.session) {
            self.draw_piece(&painter, origin, &view);
        }

        if self.session.is_over() {
            _ = painter.rect_filled(response.rect, 0.0, Color32::from_black_alpha(153));
        }
    }

    fn handle_pointer(&mut self, ui: &Ui, response: &egui::Response, origin: Pos2) {
        let (pressed, released, down, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.latest_pos(),
            )
        });
        let Some(pos) = pointer else {
            if released {
                self.board.cancel();
            }
            return;
        };
        let point = Point::new(pos.x - origin.x, pos.y - origin.y);

        if pressed
            && response.contains_pointer()
            && let Some(intent) = self.board.pointer_pressed(&self.session, point)
        {
            self.dispatch(intent);
        }
        self.board.pointer_moved(point);
        if released {
            if let Some(intent) = self.board.pointer_released(&self.session, point) {
                self.dispatch(intent);
            }
        } else if !pressed && !down {
            // Release happened outside the window.
            self.board.cancel();
        }
    }

    fn draw_piece(&self, painter: &Painter, origin: Pos2, view: &PieceView) {
        let tile_size = self.board.geometry().tile_size();
        let center = to_screen(origin, view.position) + Vec2::splat(0.5 * tile_size);
        let mut body = Self::team_color(view.piece.team);
        let mut accent = Self::tile_color(view.piece.color);
        if view.disabled {
            body = body.gamma_multiply(0.7);
            accent = accent.gamma_multiply(0.7);
        }
        _ = painter.circle_filled(center, 0.42 * tile_size, body);
        _ = painter.circle_filled(center, 0.24 * tile_size, accent);
        if view.selected {
            _ = painter.circle_stroke(
                center,
                0.45 * tile_size,
                Stroke::new(3.0, Color32::WHITE),
            );
        }
    }

    fn draw_winner(&mut self, ctx: &egui::Context, winner: Team) {
        _ = egui::Area::new(Id::new("winner"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                _ = Frame::popup(ui.style()).show(ui, |ui| {
                    _ = ui.heading(format!("{} WINS!!", winner.name().to_uppercase()));
                    if ui.button("Restart Game").clicked() {
                        self.dispatch(Intent::Restart);
                    }
                });
            });
    }
}

fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    origin + Vec2::new(point.x, point.y)
}

impl App for KamisadoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_theme(Theme::Light);
        self.process_responses();

        _ = SidePanel::right("side panel").show(ctx, |ui| self.update_side_panel(ui));
        _ = CentralPanel::default().show(ctx, |ui| self.update_board(ui));

        if let Some(winner) = self.session.winner() {
            self.draw_winner(ctx, winner);
        }
    }
}
