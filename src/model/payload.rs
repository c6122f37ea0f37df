use serde::Serialize;
use serde_json::Value;

use crate::model::{EventDraft, Metric};

pub const SCHEMA_VERSION: &str = "1.0";

/// Wire shape for `POST /ingest`. Built fresh per submission attempt; the
/// draft's raw tags text is parsed into a JSON value here.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IngestPayload {
    pub schema_version: String,
    pub timestamp: String,
    pub device_id: String,
    pub source: String,
    pub metrics: Vec<Metric>,
    pub tags: Value,
    pub note: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    InvalidTags,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTags => write!(f, "Invalid JSON in tags"),
        }
    }
}

impl std::error::Error for DraftError {}

impl EventDraft {
    pub fn to_payload(&self) -> Result<IngestPayload, DraftError> {
        let tags = parse_tags(&self.tags)?;
        Ok(IngestPayload {
            schema_version: SCHEMA_VERSION.to_string(),
            timestamp: self.timestamp.clone(),
            device_id: self.device_id.clone(),
            source: self.source.clone(),
            metrics: self.metrics().to_vec(),
            tags,
            note: self.note.clone(),
        })
    }
}

/// Empty text means "no tags"; anything else must parse as JSON.
fn parse_tags(raw: &str) -> Result<Value, DraftError> {
    if raw.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw).map_err(|_| DraftError::InvalidTags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quality;
    use serde_json::json;

    fn draft_with_tags(tags: &str) -> EventDraft {
        let mut draft = EventDraft::seeded();
        draft.tags = tags.to_string();
        draft
    }

    #[test]
    fn valid_tags_are_parsed_not_passed_through() {
        let payload = draft_with_tags(r#"{"location": "lab"}"#).to_payload().unwrap();
        assert_eq!(payload.tags, json!({"location": "lab"}));
    }

    #[test]
    fn empty_tags_become_null() {
        let payload = draft_with_tags("").to_payload().unwrap();
        assert_eq!(payload.tags, Value::Null);
    }

    #[test]
    fn invalid_tags_abort_with_exact_message() {
        let err = draft_with_tags("{not json").to_payload().unwrap_err();
        assert_eq!(err, DraftError::InvalidTags);
        assert_eq!(err.to_string(), "Invalid JSON in tags");
    }

    #[test]
    fn whitespace_only_tags_are_invalid() {
        assert!(draft_with_tags("   ").to_payload().is_err());
    }

    #[test]
    fn payload_carries_schema_version_and_draft_fields() {
        let mut draft = draft_with_tags("{}");
        draft.note = "calibration".into();
        let value = serde_json::to_value(draft.to_payload().unwrap()).unwrap();

        assert_eq!(value["schema_version"], "1.0");
        assert_eq!(value["device_id"], "ajxbs-rpi-01");
        assert_eq!(value["tags"], json!({}));
        assert_eq!(value["note"], "calibration");
        assert_eq!(value["metrics"][0]["name"], "ph");
        assert_eq!(value["metrics"][0]["quality"], "ok");
    }

    #[test]
    fn nan_value_serializes_as_null() {
        let draft = EventDraft::seeded().with_metrics(vec![Metric {
            name: "ph".into(),
            value: f64::NAN,
            unit: String::new(),
            quality: Quality::Ok,
        }]);
        let value = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert!(value["metrics"][0]["value"].is_null());
    }
}
