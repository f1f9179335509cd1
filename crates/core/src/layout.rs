use crate::ids::ConversationId;
use crate::panel::PanelVisibilityState;

/// Content choice for the third pane slot.
///
/// On desktop the slot shows the notification feed or the user-detail panel,
/// never both. `None` means the slot stays collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThirdPaneContent {
    Notifications,
    UserDetail,
    None,
}

/// Fully derived pane set for one render.
///
/// Recomputed from scratch on every call to [`resolve`]; never stored and
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDecision {
    pub show_list_pane: bool,
    pub show_conversation_pane: bool,
    pub show_third_pane: bool,
    pub third_pane_content: ThirdPaneContent,
}

/// Maps shell state to the set of panes to render.
///
/// `detail_ready` reports whether the selected conversation's channel and
/// counterpart user have resolved from the store. An open detail panel with
/// unresolved data falls back to the notification feed instead of rendering
/// an empty detail shell.
///
/// A selected conversation that is missing from the store still yields
/// `show_conversation_pane = true`; the pane itself renders a loading state
/// so mobile back-navigation keeps working.
pub fn resolve(
    desktop: bool,
    current: Option<&ConversationId>,
    panel: PanelVisibilityState,
    detail_ready: bool,
) -> LayoutDecision {
    let show_list_pane = desktop || current.is_none();
    let show_conversation_pane = desktop || current.is_some();
    let show_third_pane = desktop;

    let third_pane_content = if !show_third_pane {
        ThirdPaneContent::None
    } else if panel.detail_open && detail_ready {
        ThirdPaneContent::UserDetail
    } else if !panel.notification_collapsed {
        ThirdPaneContent::Notifications
    } else {
        ThirdPaneContent::None
    };

    LayoutDecision {
        show_list_pane,
        show_conversation_pane,
        show_third_pane,
        third_pane_content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(detail_open: bool, collapsed: bool) -> PanelVisibilityState {
        PanelVisibilityState {
            detail_open,
            pinned: false,
            notification_collapsed: collapsed,
        }
    }

    #[test]
    fn desktop_always_shows_list_and_conversation_panes() {
        let id = ConversationId::new("dm_1");

        for current in [None, Some(&id)] {
            let decision = resolve(true, current, panel(false, false), false);
            assert!(decision.show_list_pane);
            assert!(decision.show_conversation_pane);
            assert!(decision.show_third_pane);
        }
    }

    #[test]
    fn mobile_shows_exactly_one_primary_pane() {
        let id = ConversationId::new("dm_1");

        let idle = resolve(false, None, panel(false, false), false);
        assert!(idle.show_list_pane);
        assert!(!idle.show_conversation_pane);

        let active = resolve(false, Some(&id), panel(false, false), false);
        assert!(!active.show_list_pane);
        assert!(active.show_conversation_pane);
    }

    #[test]
    fn mobile_never_renders_a_third_pane() {
        let id = ConversationId::new("dm_1");
        let decision = resolve(false, Some(&id), panel(true, false), true);
        assert!(!decision.show_third_pane);
        assert_eq!(decision.third_pane_content, ThirdPaneContent::None);
    }

    #[test]
    fn third_pane_prefers_user_detail_over_notifications() {
        let id = ConversationId::new("dm_1");
        let decision = resolve(true, Some(&id), panel(true, false), true);
        assert_eq!(decision.third_pane_content, ThirdPaneContent::UserDetail);
    }

    #[test]
    fn unresolved_counterpart_falls_back_to_notifications() {
        let id = ConversationId::new("dm_unknown");
        let decision = resolve(true, Some(&id), panel(true, false), false);
        assert_eq!(decision.third_pane_content, ThirdPaneContent::Notifications);
        // The conversation pane still renders (as a loading state).
        assert!(decision.show_conversation_pane);
    }

    #[test]
    fn collapsed_feed_leaves_the_slot_empty() {
        let decision = resolve(true, None, panel(false, true), false);
        assert_eq!(decision.third_pane_content, ThirdPaneContent::None);
        assert!(decision.show_third_pane);
    }

    #[test]
    fn notification_feed_is_the_desktop_default() {
        let decision = resolve(true, None, panel(false, false), false);
        assert_eq!(decision.third_pane_content, ThirdPaneContent::Notifications);
    }
}
