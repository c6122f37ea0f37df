use serde::Deserialize;
use serde_json::Value;

use crate::model::{IngestPayload, StoredEvent};

/// Blocking HTTP client for the telemetry backend. Callers run it on worker
/// threads; every request is a single best-effort attempt with no retry.
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Transport(String),
    Rejected { status: u16, body: String },
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Rejected { status, body } => {
                write!(f, "rejected with status {status}: {body}")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Transport(String),
    Status(u16),
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Status(code) => write!(f, "unexpected status {code}"),
            Self::Decode(e) => write!(f, "decode: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IngestAck {
    #[serde(default)]
    pub id: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn submit(&self, payload: &IngestPayload) -> Result<IngestAck, SubmitError> {
        let resp = self
            .http
            .post(format!("{}/ingest", self.base_url))
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        interpret_submit(status, &body)
    }

    pub fn fetch_recent(&self, limit: u32) -> Result<Vec<StoredEvent>, FetchError> {
        let resp = self
            .http
            .get(format!("{}/events", self.base_url))
            .query(&[("limit", limit)])
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status(status));
        }
        let body = resp
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub fn health(&self) -> bool {
        match self.http.get(format!("{}/health", self.base_url)).send() {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}

/// The body is parsed as JSON regardless of status; a body that is not JSON
/// counts as a transport failure, same as the connection dying mid-response.
fn interpret_submit(status: u16, body: &str) -> Result<IngestAck, SubmitError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| SubmitError::Transport(e.to_string()))?;

    if (200..300).contains(&status) {
        Ok(serde_json::from_value(value).unwrap_or_default())
    } else {
        Err(SubmitError::Rejected {
            status,
            body: value.to_string(),
        })
    }
}
