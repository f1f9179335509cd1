use crate::ids::ConversationId;
use crate::panel::PanelVisibilityState;
use crate::selection::SelectionState;

/// Outcome of one intent application.
///
/// `Ignored` covers expected precondition failures (for example opening the
/// detail panel with nothing selected); those are normal no-ops, never
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    Applied,
    Ignored,
}

/// Serialized view state for the messaging shell.
///
/// Owns selection and panel visibility and applies every user intent
/// synchronously, so the switch-transition rule always runs to completion
/// before a caller can resolve layout for the new selection. A render with a
/// stale open panel and a freshly selected, unpinned conversation therefore
/// cannot occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    selection: SelectionState,
    panel: PanelVisibilityState,
}

impl ShellState {
    /// Creates the mount-time state with the restored durable feed flag.
    pub fn new(notification_collapsed: bool) -> Self {
        Self {
            selection: SelectionState::new(),
            panel: PanelVisibilityState::with_notification_collapsed(notification_collapsed),
        }
    }

    pub fn selected(&self) -> Option<&ConversationId> {
        self.selection.current()
    }

    pub fn panel(&self) -> PanelVisibilityState {
        self.panel
    }

    /// Activates a conversation and runs the switch-transition rule.
    ///
    /// Selecting the id that is already current is not a switch: the detector
    /// compares values and leaves the panel untouched.
    pub fn select_conversation(&mut self, id: ConversationId) {
        self.selection.set_current(Some(id));
        self.process_switch();
    }

    /// Clears the selection (mobile back navigation).
    ///
    /// Back always closes the detail panel, pinned or not.
    pub fn go_back(&mut self) {
        self.selection.set_current(None);
        self.panel.detail_open = false;
        self.process_switch();
    }

    /// Flips the detail panel.
    ///
    /// The panel requires an active conversation; without one the intent is
    /// ignored.
    pub fn toggle_detail_panel(&mut self) -> IntentOutcome {
        if self.selection.current().is_none() {
            return IntentOutcome::Ignored;
        }

        self.panel.detail_open = !self.panel.detail_open;
        IntentOutcome::Applied
    }

    /// Closes the detail panel unconditionally (its close button).
    pub fn close_detail_panel(&mut self) {
        self.panel.detail_open = false;
    }

    /// Flips the pin flag.
    ///
    /// Pinning while open preserves the panel across later switches;
    /// unpinning does not retroactively close it.
    pub fn toggle_pin(&mut self) {
        self.panel.pinned = !self.panel.pinned;
    }

    /// Flips the notification feed collapse flag and returns the new value
    /// so the caller can persist it.
    pub fn toggle_notification_feed(&mut self) -> bool {
        self.panel.notification_collapsed = !self.panel.notification_collapsed;
        self.panel.notification_collapsed
    }

    /// Collapses the notification feed (its close button) and returns the
    /// new value for persistence.
    pub fn collapse_notification_feed(&mut self) -> bool {
        self.panel.notification_collapsed = true;
        self.panel.notification_collapsed
    }

    fn process_switch(&mut self) {
        if !self.selection.take_switch() {
            return;
        }

        // An unpinned open panel belongs to the conversation it was opened
        // for; a switch closes it. Pinned panels ride along.
        if !self.panel.pinned && self.panel.detail_open {
            self.panel.detail_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ConversationId {
        ConversationId::new(raw)
    }

    #[test]
    fn unpinned_detail_panel_closes_on_conversation_switch() {
        let mut shell = ShellState::new(false);
        shell.select_conversation(id("dm_1"));
        assert_eq!(shell.toggle_detail_panel(), IntentOutcome::Applied);
        assert!(shell.panel().detail_open);

        shell.select_conversation(id("dm_2"));
        assert!(!shell.panel().detail_open);
    }

    #[test]
    fn pinned_detail_panel_survives_conversation_switch() {
        let mut shell = ShellState::new(false);
        shell.select_conversation(id("dm_1"));
        shell.toggle_pin();
        shell.toggle_detail_panel();
        assert!(shell.panel().detail_open);

        shell.select_conversation(id("dm_2"));
        assert!(shell.panel().detail_open);
        assert_eq!(shell.selected(), Some(&id("dm_2")));
    }

    #[test]
    fn reselecting_the_same_conversation_keeps_the_panel_open() {
        let mut shell = ShellState::new(false);
        shell.select_conversation(id("dm_2"));
        shell.toggle_detail_panel();

        shell.select_conversation(id("dm_2"));
        assert!(shell.panel().detail_open);
    }

    #[test]
    fn back_navigation_closes_detail_even_when_pinned() {
        let mut shell = ShellState::new(false);
        shell.select_conversation(id("dm_1"));
        shell.toggle_pin();
        shell.toggle_detail_panel();
        assert!(shell.panel().detail_open);

        shell.go_back();
        assert!(!shell.panel().detail_open);
        assert_eq!(shell.selected(), None);
    }

    #[test]
    fn detail_toggle_without_selection_is_ignored() {
        let mut shell = ShellState::new(false);
        assert_eq!(shell.toggle_detail_panel(), IntentOutcome::Ignored);
        assert!(!shell.panel().detail_open);
    }

    #[test]
    fn unpinning_does_not_retroactively_close_the_panel() {
        let mut shell = ShellState::new(false);
        shell.select_conversation(id("dm_1"));
        shell.toggle_pin();
        shell.toggle_detail_panel();

        shell.toggle_pin();
        assert!(shell.panel().detail_open);
        assert!(!shell.panel().pinned);
    }

    #[test]
    fn notification_feed_toggle_reports_the_new_value() {
        let mut shell = ShellState::new(false);
        assert!(shell.toggle_notification_feed());
        assert!(!shell.toggle_notification_feed());

        let restored = ShellState::new(true);
        assert!(restored.panel().notification_collapsed);
    }

    #[test]
    fn switch_scenario_matches_expected_panel_lifecycle() {
        // Start: nothing selected, panel closed, unpinned.
        let mut shell = ShellState::new(false);

        shell.select_conversation(id("dm_1"));
        assert!(!shell.panel().detail_open);

        shell.toggle_detail_panel();
        assert!(shell.panel().detail_open);

        shell.select_conversation(id("dm_2"));
        assert!(!shell.panel().detail_open);

        shell.select_conversation(id("dm_2"));
        assert!(!shell.panel().detail_open);
    }

    #[test]
    fn pinned_scenario_keeps_panel_across_switch() {
        let mut shell = ShellState::new(false);
        shell.select_conversation(id("dm_1"));
        shell.toggle_pin();
        assert!(shell.panel().pinned);

        shell.toggle_detail_panel();
        assert!(shell.panel().detail_open);

        shell.select_conversation(id("dm_2"));
        assert!(shell.panel().detail_open);
    }
}
