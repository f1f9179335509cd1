use mica_storage::ChannelId;

/// Emitted when a row in the conversation list is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationSelected {
    pub channel_id: ChannelId,
}

/// Emitted by the conversation header's back control on narrow windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackRequested;

/// Emitted when the user asks to show or hide the counterpart details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailToggled;

/// Emitted by the detail pane's own close control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailClosed;

/// Emitted when the user pins or unpins the detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinToggled;

/// Emitted by the conversation header's activity control. Toggles whether
/// the notification feed occupies the third pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedToggled;

/// Emitted by the feed's own close control. Always collapses, never toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedDismissed;

/// Emitted whenever the number of unread notifications changes, so the
/// conversation header can badge its activity control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedUnreadChanged {
    pub unread: usize,
}

/// Emitted when the user submits the message composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSubmitted {
    pub content: String,
}
