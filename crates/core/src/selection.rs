use crate::ids::ConversationId;

/// Tracks the active conversation together with the last identifier the
/// switch detector processed.
///
/// `previous` exists only so a conversation switch can be detected exactly
/// once; nothing outside [`SelectionState::take_switch`] may read it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    current: Option<ConversationId>,
    previous: Option<ConversationId>,
}

impl SelectionState {
    /// Creates the mount-time state: nothing selected, nothing processed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ConversationId> {
        self.current.as_ref()
    }

    pub fn set_current(&mut self, id: Option<ConversationId>) {
        self.current = id;
    }

    /// Edge-triggered switch detection.
    ///
    /// Returns `true` exactly once per distinct change of the current id and
    /// marks the change as processed. Re-evaluation with an unchanged id is a
    /// no-op, so callers may invoke this from any number of code paths
    /// without double-firing the switch rule.
    pub fn take_switch(&mut self) -> bool {
        if self.current == self.previous {
            return false;
        }

        self.previous = self.current.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_fires_once_per_distinct_change() {
        let mut selection = SelectionState::new();

        selection.set_current(Some(ConversationId::new("dm_1")));
        assert!(selection.take_switch());
        assert!(!selection.take_switch());

        selection.set_current(Some(ConversationId::new("dm_2")));
        assert!(selection.take_switch());
        assert!(!selection.take_switch());
    }

    #[test]
    fn reselecting_the_same_id_is_not_a_switch() {
        let mut selection = SelectionState::new();
        selection.set_current(Some(ConversationId::new("dm_1")));
        assert!(selection.take_switch());

        // Same value through a fresh allocation still counts as "unchanged".
        selection.set_current(Some(ConversationId::new(String::from("dm_1"))));
        assert!(!selection.take_switch());
    }

    #[test]
    fn clearing_the_selection_is_a_switch() {
        let mut selection = SelectionState::new();
        selection.set_current(Some(ConversationId::new("dm_1")));
        assert!(selection.take_switch());

        selection.set_current(None);
        assert!(selection.take_switch());
        assert!(!selection.take_switch());
    }
}
