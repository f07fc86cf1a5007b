//! Browser-style back/forward history over result sets

use super::types::ResultSet;

/// Two stacks of previously displayed result sets.
///
/// Recording a new navigation clears the forward stack; only explicit
/// back/forward movement swaps views between the stacks.
#[derive(Debug, Default)]
pub struct HistoryStacks {
    back: Vec<ResultSet>,
    forward: Vec<ResultSet>,
}

impl HistoryStacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the currently displayed set before a new navigation replaces it.
    pub fn record(&mut self, current: ResultSet) {
        self.back.push(current);
        self.forward.clear();
    }

    /// Pop the previous view, pushing `current` onto the forward stack.
    /// Returns `None` (and leaves `current` unconsumed semantically) when
    /// there is nothing to go back to.
    pub fn go_back(&mut self, current: ResultSet) -> Option<ResultSet> {
        let previous = self.back.pop()?;
        self.forward.push(current);
        Some(previous)
    }

    pub fn go_forward(&mut self, current: ResultSet) -> Option<ResultSet> {
        let next = self.forward.pop()?;
        self.back.push(current);
        Some(next)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Track;

    fn results(name: &str) -> ResultSet {
        ResultSet::from_tracks(vec![Track {
            track_name: name.to_string(),
            track_number: 1,
            album_name: String::new(),
            artist_name: String::new(),
            track_uri: String::new(),
            popularity: None,
        }])
    }

    #[test]
    fn back_then_forward_restores_both_views() {
        let mut history = HistoryStacks::new();
        let a = results("a");
        let b = results("b");

        // Displaying A, then navigating to B.
        history.record(a.clone());

        let restored = history.go_back(b.clone()).unwrap();
        assert_eq!(restored, a);
        assert!(history.can_go_forward());

        let restored = history.go_forward(a.clone()).unwrap();
        assert_eq!(restored, b);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn new_navigation_clears_forward_history() {
        let mut history = HistoryStacks::new();
        history.record(results("a"));
        let _ = history.go_back(results("b"));
        assert!(history.can_go_forward());

        history.record(results("a"));
        assert!(!history.can_go_forward());
        assert!(history.can_go_back());
    }

    #[test]
    fn empty_stacks_are_no_ops() {
        let mut history = HistoryStacks::new();
        assert_eq!(history.go_back(results("a")), None);
        assert_eq!(history.go_forward(results("a")), None);
        // A failed pop must not leak the current view onto the other stack.
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }
}
