mod client;
mod worker;

pub use client::{ApiClient, FetchError, IngestAck, SubmitError};
pub use worker::{ApiEvent, ApiHandle};
