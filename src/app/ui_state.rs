use crate::model::EventDraft;

/// Transient widget state with no bearing on what gets submitted.
#[derive(Default)]
pub struct UiState {
    /// Raw text behind each metric's value field, index-aligned with the
    /// draft's metrics.
    pub value_inputs: Vec<String>,
    pub filter: String,
    pub show_about: bool,
}

impl UiState {
    pub fn for_draft(draft: &EventDraft) -> Self {
        Self {
            value_inputs: draft.metrics().iter().map(|m| m.value.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_mirror_the_seeded_draft() {
        let draft = EventDraft::seeded();
        let ui = UiState::for_draft(&draft);
        assert_eq!(ui.value_inputs, vec!["7".to_string()]);
    }
}
