/// Visibility flags for the contextual side panel and the notification feed.
///
/// `detail_open` and `pinned` are session-only. `notification_collapsed` is
/// the one durable flag in the system; the app layer loads it at mount and
/// persists it on every toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibilityState {
    /// Whether the user-detail panel is open.
    pub detail_open: bool,
    /// Whether the detail panel survives conversation switches.
    pub pinned: bool,
    /// Whether the notification feed slot is collapsed.
    pub notification_collapsed: bool,
}

impl PanelVisibilityState {
    /// Creates the mount-time state with the restored durable flag.
    pub fn with_notification_collapsed(collapsed: bool) -> Self {
        Self {
            detail_open: false,
            pinned: false,
            notification_collapsed: collapsed,
        }
    }
}
