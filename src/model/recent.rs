use crate::model::StoredEvent;

/// Transient cache of the backend's most recent events, most-recent-first.
/// Every successful fetch replaces the whole list; there is no merging.
#[derive(Default)]
pub struct RecentEvents {
    events: Vec<StoredEvent>,
}

impl RecentEvents {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoredEvent> {
        self.events.iter()
    }

    pub fn replace(&mut self, events: Vec<StoredEvent>) {
        self.events = events;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventPayload;

    fn event(id: &str) -> StoredEvent {
        StoredEvent {
            id: id.into(),
            timestamp: "2026-08-06T10:00:00+00:00".into(),
            device_id: "dev".into(),
            source: None,
            payload: EventPayload::default(),
        }
    }

    #[test]
    fn replace_swaps_the_list_verbatim() {
        let mut recent = RecentEvents::default();
        assert!(recent.is_empty());

        recent.replace(vec![event("a"), event("b")]);
        assert_eq!(recent.len(), 2);

        recent.replace(vec![event("c")]);
        let ids: Vec<_> = recent.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c"]);
    }
}
