mod run;
mod ui_state;

use crate::api::{ApiEvent, ApiHandle, SubmitError};
use crate::config::ConsoleCfg;
use crate::model::{EventDraft, MetricEdit, RecentEvents, StoredEvent};

pub use run::run;
pub use ui_state::UiState;

#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Success(String),
    Error(String),
}

impl Status {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendHealth {
    Unknown,
    Ok,
    Unreachable,
}

pub struct ConsoleApp {
    pub cfg: ConsoleCfg,
    pub draft: EventDraft,
    pub status: Option<Status>,
    pub recent: RecentEvents,
    pub selected: Option<StoredEvent>,
    pub backend: BackendHealth,
    pub ui: UiState,
    api: ApiHandle,
}

impl ConsoleApp {
    pub fn new(cfg: ConsoleCfg, api: ApiHandle) -> Self {
        let draft = EventDraft::seeded();
        let ui = UiState::for_draft(&draft);
        let app = Self {
            cfg,
            draft,
            status: None,
            recent: RecentEvents::default(),
            selected: None,
            backend: BackendHealth::Unknown,
            ui,
            api,
        };
        app.api.fetch_recent(app.cfg.ui.recent_limit);
        app.api.check_health();
        app
    }

    /// Clears the banner, then either aborts on bad tags (no network call) or
    /// hands the payload to a worker. Nothing stops overlapping submissions.
    pub fn submit(&mut self) {
        self.status = None;
        match self.draft.to_payload() {
            Ok(payload) => self.api.submit(payload),
            Err(err) => self.status = Some(Status::Error(err.to_string())),
        }
    }

    pub fn refresh_events(&self) {
        self.api.fetch_recent(self.cfg.ui.recent_limit);
    }

    pub fn poll_api(&mut self) {
        while let Some(event) = self.api.try_recv() {
            self.handle_api_event(event);
        }
    }

    fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::SubmitFinished(Ok(ack)) => {
                self.status = Some(Status::Success(format!("Ingested! ID: {}", ack.id)));
                self.refresh_events();
            }
            ApiEvent::SubmitFinished(Err(SubmitError::Rejected { body, .. })) => {
                self.status = Some(Status::Error(format!("Error: {body}")));
            }
            ApiEvent::SubmitFinished(Err(SubmitError::Transport(msg))) => {
                self.status = Some(Status::Error(format!("Network error: {msg}")));
            }
            ApiEvent::RecentFetched(Ok(events)) => {
                self.recent.replace(events);
            }
            ApiEvent::RecentFetched(Err(err)) => {
                // Soft failure: the list stays stale, only a diagnostic is kept.
                tracing::warn!(error = %err, "failed to fetch recent events");
            }
            ApiEvent::HealthChecked(ok) => {
                self.backend = if ok {
                    BackendHealth::Ok
                } else {
                    BackendHealth::Unreachable
                };
            }
        }
    }

    pub fn add_metric(&mut self) {
        self.draft = self.draft.with_metric_added();
        self.ui.value_inputs.push("0".to_string());
    }

    pub fn remove_metric(&mut self, index: usize) {
        self.draft = self.draft.with_metric_removed(index);
        if index < self.ui.value_inputs.len() {
            self.ui.value_inputs.remove(index);
        }
    }

    pub fn edit_metric(&mut self, index: usize, edit: MetricEdit) {
        self.draft = self.draft.with_metric_edit(index, edit);
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &eframe::egui::Context, frame: &mut eframe::Frame) {
        self.poll_api();
        crate::ui::render_app(ctx, frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, IngestAck};
    use crate::model::Quality;

    fn offline_app() -> ConsoleApp {
        // Nothing listens here; the startup fetch and health probe just fail
        // on their worker threads.
        let api = ApiHandle::new(ApiClient::new("http://127.0.0.1:1/api/v1"));
        ConsoleApp::new(ConsoleCfg::default(), api)
    }

    #[test]
    fn invalid_tags_surface_without_a_network_call() {
        let mut app = offline_app();
        app.draft.tags = "{not json".into();
        app.submit();
        assert_eq!(
            app.status,
            Some(Status::Error("Invalid JSON in tags".into()))
        );
    }

    #[test]
    fn submit_clears_the_previous_banner() {
        let mut app = offline_app();
        app.status = Some(Status::Success("Ingested! ID: old".into()));
        app.draft.tags = "also not json".into();
        app.submit();
        assert!(app.status.as_ref().is_some_and(|s| s.is_error()));
    }

    #[test]
    fn success_event_sets_the_banner_message() {
        let mut app = offline_app();
        app.handle_api_event(ApiEvent::SubmitFinished(Ok(IngestAck {
            id: "evt-42".into(),
        })));
        assert_eq!(
            app.status,
            Some(Status::Success("Ingested! ID: evt-42".into()))
        );
    }

    #[test]
    fn rejected_event_sets_the_error_banner() {
        let mut app = offline_app();
        app.handle_api_event(ApiEvent::SubmitFinished(Err(SubmitError::Rejected {
            status: 500,
            body: r#"{"detail":"bad device"}"#.into(),
        })));
        assert_eq!(
            app.status,
            Some(Status::Error(r#"Error: {"detail":"bad device"}"#.into()))
        );
    }

    #[test]
    fn transport_event_sets_the_network_banner() {
        let mut app = offline_app();
        app.handle_api_event(ApiEvent::SubmitFinished(Err(SubmitError::Transport(
            "connection refused".into(),
        ))));
        assert_eq!(
            app.status,
            Some(Status::Error("Network error: connection refused".into()))
        );
    }

    #[test]
    fn fetch_failure_leaves_the_list_alone() {
        let mut app = offline_app();
        app.handle_api_event(ApiEvent::RecentFetched(Err(
            crate::api::FetchError::Status(500),
        )));
        assert!(app.recent.is_empty());
        assert_eq!(app.status, None);
    }

    #[test]
    fn metric_handlers_keep_value_buffers_aligned() {
        let mut app = offline_app();
        assert_eq!(app.ui.value_inputs.len(), app.draft.metrics().len());

        app.add_metric();
        assert_eq!(app.ui.value_inputs.len(), 2);
        assert_eq!(app.ui.value_inputs[1], "0");

        app.edit_metric(1, MetricEdit::Quality(Quality::Bad));
        assert_eq!(app.draft.metrics()[1].quality, Quality::Bad);

        app.remove_metric(0);
        assert_eq!(app.ui.value_inputs.len(), 1);
        assert_eq!(app.draft.metrics().len(), 1);
    }

    #[test]
    fn health_event_updates_backend_state() {
        let mut app = offline_app();
        assert_eq!(app.backend, BackendHealth::Unknown);
        app.handle_api_event(ApiEvent::HealthChecked(true));
        assert_eq!(app.backend, BackendHealth::Ok);
        app.handle_api_event(ApiEvent::HealthChecked(false));
        assert_eq!(app.backend, BackendHealth::Unreachable);
    }
}
