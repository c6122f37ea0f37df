use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::api::{ApiClient, FetchError, IngestAck, SubmitError};
use crate::model::{IngestPayload, StoredEvent};

/// Completed background request, drained by the app once per frame.
pub enum ApiEvent {
    SubmitFinished(Result<IngestAck, SubmitError>),
    RecentFetched(Result<Vec<StoredEvent>, FetchError>),
    HealthChecked(bool),
}

/// Dispatches requests onto detached threads so the UI thread never blocks.
/// Nothing is cancelled and nothing is serialized: overlapping requests land
/// in completion order.
pub struct ApiHandle {
    client: Arc<ApiClient>,
    tx: Sender<ApiEvent>,
    rx: Receiver<ApiEvent>,
    repaint: Option<eframe::egui::Context>,
}

impl ApiHandle {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client: Arc::new(client),
            tx,
            rx,
            repaint: None,
        }
    }

    pub fn with_repaint(mut self, ctx: eframe::egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn submit(&self, payload: IngestPayload) {
        self.spawn(move |client| ApiEvent::SubmitFinished(client.submit(&payload)));
    }

    pub fn fetch_recent(&self, limit: u32) {
        self.spawn(move |client| ApiEvent::RecentFetched(client.fetch_recent(limit)));
    }

    pub fn check_health(&self) {
        self.spawn(move |client| ApiEvent::HealthChecked(client.health()));
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.rx.try_recv().ok()
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&ApiClient) -> ApiEvent + Send + 'static,
    {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        thread::spawn(move || {
            // The receiver may already be gone on shutdown.
            let _ = tx.send(job(&client));
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}
