/// Event contracts for shell wiring.
pub mod events;

pub mod conversation_pane;
pub mod detail_pane;
pub mod list_pane;
pub mod notification_feed;
pub mod time;

pub use conversation_pane::{ConversationPane, ConversationSnapshot, MessageView};
pub use detail_pane::{DetailPane, DetailSubject};
pub use events::{
    BackRequested, ConversationSelected, DetailClosed, DetailToggled, FeedDismissed, FeedToggled,
    FeedUnreadChanged, MessageSubmitted, PinToggled,
};
pub use list_pane::{ConversationEntry, ConversationListPane};
pub use notification_feed::NotificationFeed;
