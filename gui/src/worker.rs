use eframe::egui;
use kamisado_client::{GameService, Outgoing, Response, ServiceError, Ticket};
use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};
use threadpool::ThreadPool;

pub type Completed = (Ticket, Result<Response, ServiceError>);

/// Performs session requests off the UI thread.
///
/// A single worker thread, so requests complete in the order they were
/// submitted. Each completion wakes the UI.
pub struct RemoteWorker {
    pool: ThreadPool,
    service: Arc<dyn GameService>,
    ctx: egui::Context,
    sender: Sender<Completed>,
    receiver: Receiver<Completed>,
}

impl RemoteWorker {
    pub fn new(service: Arc<dyn GameService>, ctx: egui::Context) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            pool: ThreadPool::new(1),
            service,
            ctx,
            sender,
            receiver,
        }
    }

    pub fn submit(&self, outgoing: Outgoing) {
        let service = self.service.clone();
        let sender = self.sender.clone();
        let ctx = self.ctx.clone();
        self.pool.execute(move || {
            let Outgoing { ticket, request } = outgoing;
            let outcome = request.perform(&*service);
            if sender.send((ticket, outcome)).is_err() {
                log::debug!("request {} finished after shutdown", ticket.seq());
            }
            ctx.request_repaint();
        });
    }

    pub fn completed(&self) -> Vec<Completed> {
        self.receiver.try_iter().collect()
    }
}
