use serde::Deserialize;
use serde_json::Value;

use crate::model::{Metric, Quality};

/// Event as returned by `GET /events`. Read-only on this side; the backend
/// owns it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoredEvent {
    pub id: String,
    pub timestamp: String,
    pub device_id: String,
    #[serde(default)]
    pub source: Option<String>,
    pub payload: EventPayload,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub tags: Value,
    #[serde(default)]
    pub note: Option<String>,
}

impl StoredEvent {
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or("-")
    }

    pub fn note_text(&self) -> Option<&str> {
        self.payload.note.as_deref().filter(|n| !n.is_empty())
    }
}

impl EventPayload {
    pub fn worst_quality(&self) -> Quality {
        self.metrics
            .iter()
            .map(|m| m.quality)
            .max_by_key(|q| q.rank())
            .unwrap_or(Quality::Ok)
    }
}
