//! Multi-select answers keyed by question index.

#[cfg(test)]
#[path = "answers_test.rs"]
mod answers_test;

use std::collections::BTreeMap;

use serde::Serialize;

/// Selected options per question, in the order they were chosen.
///
/// Serializes as `{"<index>": ["option", ...]}`. A question whose last option
/// is deselected is removed so the submitted map only lists answered questions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<usize, Vec<String>>);

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `option` for question `index`. Returns whether it is now selected.
    pub fn toggle(&mut self, index: usize, option: &str) -> bool {
        let entry = self.0.entry(index).or_default();
        let selected = if let Some(pos) = entry.iter().position(|o| o == option) {
            entry.remove(pos);
            false
        } else {
            entry.push(option.to_owned());
            true
        };
        if entry.is_empty() {
            self.0.remove(&index);
        }
        selected
    }

    #[must_use]
    pub fn is_selected(&self, index: usize, option: &str) -> bool {
        self.selections(index).iter().any(|o| o == option)
    }

    #[must_use]
    pub fn selections(&self, index: usize) -> &[String] {
        self.0.get(&index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of questions with at least one selection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
