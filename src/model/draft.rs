use crate::model::{Metric, Quality};
use crate::util::time;

/// Editable form state for the next submission. Update operations return a
/// fresh draft instead of mutating in place; the app swaps the whole value.
#[derive(Clone, Debug, PartialEq)]
pub struct EventDraft {
    pub timestamp: String,
    pub device_id: String,
    pub source: String,
    metrics: Vec<Metric>,
    /// Raw JSON text; parsed only at submit time.
    pub tags: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MetricEdit {
    Name(String),
    /// Raw input text; coerced to f64, parse failures become NaN.
    Value(String),
    Unit(String),
    Quality(Quality),
}

impl EventDraft {
    pub fn seeded() -> Self {
        Self {
            timestamp: time::now_rfc3339(),
            device_id: "ajxbs-rpi-01".into(),
            source: "waterlogger".into(),
            metrics: vec![Metric {
                name: "ph".into(),
                value: 7.0,
                unit: "pH".into(),
                quality: Quality::Ok,
            }],
            tags: r#"{"location": "lab"}"#.into(),
            note: String::new(),
        }
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn with_metric_edit(&self, index: usize, edit: MetricEdit) -> Self {
        let mut next = self.clone();
        if let Some(metric) = next.metrics.get_mut(index) {
            match edit {
                MetricEdit::Name(name) => metric.name = name,
                MetricEdit::Value(raw) => metric.value = coerce_value(&raw),
                MetricEdit::Unit(unit) => metric.unit = unit,
                MetricEdit::Quality(quality) => metric.quality = quality,
            }
        }
        next
    }

    pub fn with_metric_added(&self) -> Self {
        let mut next = self.clone();
        next.metrics.push(Metric::blank());
        next
    }

    /// No guard against emptying the list; the backend rejects an empty
    /// metrics array at submit time.
    pub fn with_metric_removed(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.metrics.len() {
            next.metrics.remove(index);
        }
        next
    }

    #[cfg(test)]
    pub(crate) fn with_metrics(mut self, metrics: Vec<Metric>) -> Self {
        self.metrics = metrics;
        self
    }
}

fn coerce_value(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}
