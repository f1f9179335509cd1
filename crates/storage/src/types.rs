use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, MessageId, UserId};

/// Presence bucket shown next to a user's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Away => "Away",
            Self::Offline => "Offline",
        }
    }
}

/// Directory entry for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub presence: Presence,
    /// Human-readable last-seen line, e.g. "Last seen 2 hours ago".
    #[serde(default)]
    pub last_seen_label: Option<String>,
}

impl UserRecord {
    /// Uppercased first letter of the username, used for initials avatars.
    pub fn avatar_initial(&self) -> char {
        self.username
            .chars()
            .next()
            .map(|character| character.to_ascii_uppercase())
            .unwrap_or('?')
    }

    /// Status line for headers and panels, falling back to the presence label.
    pub fn status_line(&self) -> &str {
        self.last_seen_label
            .as_deref()
            .unwrap_or_else(|| self.presence.label())
    }
}

/// Channel flavor. Only direct messages resolve a counterpart user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    DirectMessage,
    Group,
}

/// Directory entry for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: ChannelId,
    pub name: String,
    pub kind: ChannelKind,
    #[serde(default)]
    pub recipient_ids: Vec<UserId>,
    #[serde(default)]
    pub unread_count: u32,
}

impl ChannelRecord {
    /// For a direct message, the participant that is not the viewer.
    pub fn counterpart_of(&self, viewer_id: &UserId) -> Option<&UserId> {
        if self.kind != ChannelKind::DirectMessage {
            return None;
        }

        self.recipient_ids.iter().find(|id| *id != viewer_id)
    }
}

/// One message in a channel log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub content: String,
    pub sent_at_unix_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart_skips_the_viewer() {
        let channel = ChannelRecord {
            id: ChannelId::new("dm_1"),
            name: "Alice Wonderland".to_string(),
            kind: ChannelKind::DirectMessage,
            recipient_ids: vec![UserId::new("user_app"), UserId::new("user_1")],
            unread_count: 0,
        };

        assert_eq!(
            channel.counterpart_of(&UserId::new("user_app")),
            Some(&UserId::new("user_1"))
        );
    }

    #[test]
    fn group_channels_have_no_counterpart() {
        let channel = ChannelRecord {
            id: ChannelId::new("group_1"),
            name: "Project".to_string(),
            kind: ChannelKind::Group,
            recipient_ids: vec![UserId::new("user_app"), UserId::new("user_1")],
            unread_count: 0,
        };

        assert_eq!(channel.counterpart_of(&UserId::new("user_app")), None);
    }

    #[test]
    fn status_line_prefers_the_last_seen_label() {
        let user = UserRecord {
            id: UserId::new("user_3"),
            username: "Charlie Brown".to_string(),
            presence: Presence::Offline,
            last_seen_label: Some("Last seen 2 hours ago".to_string()),
        };

        assert_eq!(user.status_line(), "Last seen 2 hours ago");
        assert_eq!(user.avatar_initial(), 'C');
    }
}
