//! Expand/collapse state for rendered cards.
//!
//! State is keyed by [`AffirmationId`] so that a view reused for a different
//! record never inherits the previous record's state.

use std::collections::BTreeMap;

use crate::types::AffirmationId;

/// State of a single card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub expanded: bool,
}

impl CardState {
    pub fn collapsed() -> Self {
        Self { expanded: false }
    }

    pub fn expanded() -> Self {
        Self { expanded: true }
    }

    /// Flip between collapsed and expanded
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// Card state for a whole list, keyed by record
///
/// Records without an entry are collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardStates {
    states: BTreeMap<AffirmationId, CardState>,
}

impl CardStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: AffirmationId) -> CardState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn is_expanded(&self, id: AffirmationId) -> bool {
        self.get(id).expanded
    }

    /// Toggle one card, returning its new state
    pub fn toggle(&mut self, id: AffirmationId) -> CardState {
        let state = self.states.entry(id).or_default();
        state.toggle();
        let state = *state;
        tracing::debug!(%id, expanded = state.expanded, "Toggled card");
        state
    }

    /// Ids of every expanded card in display order
    pub fn expanded_ids(&self) -> Vec<AffirmationId> {
        self.states
            .iter()
            .filter(|(_, state)| state.expanded)
            .map(|(id, _)| *id)
            .collect()
    }
}
