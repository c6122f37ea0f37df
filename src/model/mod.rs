mod draft;
mod event;
mod metric;
mod payload;
mod recent;

pub use draft::{EventDraft, MetricEdit};
pub use event::{EventPayload, StoredEvent};
pub use metric::{Metric, Quality};
pub use payload::{DraftError, IngestPayload, SCHEMA_VERSION};
pub use recent::RecentEvents;
