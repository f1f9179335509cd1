use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ids::{ChannelId, MessageId, UserId};
use crate::seed::{SeedData, embedded_seed};
use crate::types::{ChannelRecord, MessageRecord, UserRecord};
use crate::{ChannelDirectory, MessageLog, UserDirectory};

/// In-memory directory and message log.
///
/// Channels keep their seed order so the conversation list is stable across
/// renders. Direct-message channels resolve their display name from the
/// counterpart's directory entry at read time, so a username change would
/// show up everywhere without touching the channel record.
pub struct MemoryStore {
    viewer_id: UserId,
    users: HashMap<UserId, UserRecord>,
    channels: Vec<ChannelRecord>,
    messages: HashMap<ChannelId, Vec<MessageRecord>>,
    next_message_seq: u64,
}

impl MemoryStore {
    /// Builds a store from the embedded seed fixture. A malformed fixture is
    /// a build-time defect, so at runtime it degrades to an empty store
    /// instead of failing startup.
    pub fn seeded() -> Self {
        match embedded_seed() {
            Ok(seed) => Self::from_seed(seed),
            Err(error) => {
                tracing::error!(%error, "embedded seed rejected, starting with an empty store");
                Self::empty()
            }
        }
    }

    pub fn empty() -> Self {
        Self {
            viewer_id: UserId::new("user_app"),
            users: HashMap::new(),
            channels: Vec::new(),
            messages: HashMap::new(),
            next_message_seq: 1,
        }
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let now = unix_now_seconds();

        let users = seed
            .users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();

        let mut messages: HashMap<ChannelId, Vec<MessageRecord>> = HashMap::new();
        let mut seeded_count = 0_u64;
        for message in seed.messages {
            seeded_count += 1;
            messages
                .entry(message.channel_id.clone())
                .or_default()
                .push(MessageRecord {
                    id: message.id,
                    channel_id: message.channel_id,
                    author_id: message.author_id,
                    content: message.content,
                    sent_at_unix_seconds: now.saturating_sub(message.minutes_ago * 60),
                });
        }

        // Ages within a channel may tie at second granularity; the fixture
        // lists messages oldest-first, so a stable sort preserves that.
        for log in messages.values_mut() {
            log.sort_by_key(|message| message.sent_at_unix_seconds);
        }

        Self {
            viewer_id: seed.viewer_id,
            users,
            channels: seed.channels,
            messages,
            next_message_seq: seeded_count + 1,
        }
    }

    pub fn viewer_id(&self) -> &UserId {
        &self.viewer_id
    }

    /// Latest message in a channel, used for list previews.
    pub fn last_message(&self, channel_id: &ChannelId) -> Option<MessageRecord> {
        self.messages
            .get(channel_id)
            .and_then(|log| log.last())
            .cloned()
    }

    /// Clears the unread counter when the viewer opens a channel.
    pub fn mark_channel_read(&mut self, channel_id: &ChannelId) {
        if let Some(channel) = self
            .channels
            .iter_mut()
            .find(|channel| &channel.id == channel_id)
        {
            channel.unread_count = 0;
        }
    }

    fn resolve_channel(&self, channel: &ChannelRecord) -> ChannelRecord {
        let mut resolved = channel.clone();
        if let Some(counterpart) = channel
            .counterpart_of(&self.viewer_id)
            .and_then(|id| self.users.get(id))
        {
            resolved.name = counterpart.username.clone();
        }
        resolved
    }
}

impl UserDirectory for MemoryStore {
    fn get_user(&self, user_id: &UserId) -> Option<UserRecord> {
        self.users.get(user_id).cloned()
    }

    fn list_users(&self) -> Vec<UserRecord> {
        let mut users: Vec<_> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }
}

impl ChannelDirectory for MemoryStore {
    fn get_channel(&self, channel_id: &ChannelId) -> Option<ChannelRecord> {
        self.channels
            .iter()
            .find(|channel| &channel.id == channel_id)
            .map(|channel| self.resolve_channel(channel))
    }

    fn list_channels(&self) -> Vec<ChannelRecord> {
        self.channels
            .iter()
            .map(|channel| self.resolve_channel(channel))
            .collect()
    }
}

impl MessageLog for MemoryStore {
    fn messages_for_channel(&self, channel_id: &ChannelId) -> Vec<MessageRecord> {
        self.messages.get(channel_id).cloned().unwrap_or_default()
    }

    fn append_message(&mut self, channel_id: &ChannelId, content: &str) -> Option<MessageRecord> {
        if !self.channels.iter().any(|channel| &channel.id == channel_id) {
            return None;
        }

        let message = MessageRecord {
            id: MessageId::new(format!("msg_{}", self.next_message_seq)),
            channel_id: channel_id.clone(),
            author_id: self.viewer_id.clone(),
            content: content.to_string(),
            sent_at_unix_seconds: unix_now_seconds(),
        };
        self.next_message_seq += 1;

        self.messages
            .entry(channel_id.clone())
            .or_default()
            .push(message.clone());

        Some(message)
    }
}

fn unix_now_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_resolves_direct_message_names_from_the_directory() {
        let store = MemoryStore::seeded();

        let channel = store
            .get_channel(&ChannelId::new("dm_1"))
            .expect("dm_1 is seeded");
        assert_eq!(channel.name, "Alice Wonderland");
        assert_eq!(channel.unread_count, 2);
    }

    #[test]
    fn unknown_records_come_back_empty_rather_than_failing() {
        let mut store = MemoryStore::seeded();
        let ghost = ChannelId::new("dm_missing");

        assert!(store.get_channel(&ghost).is_none());
        assert!(store.messages_for_channel(&ghost).is_empty());
        assert!(store.last_message(&ghost).is_none());
        assert!(store.append_message(&ghost, "hello?").is_none());
        assert!(store.get_user(&UserId::new("user_missing")).is_none());
    }

    #[test]
    fn appended_messages_land_at_the_end_and_become_the_preview() {
        let mut store = MemoryStore::seeded();
        let channel = ChannelId::new("dm_2");

        let before = store.messages_for_channel(&channel).len();
        let sent = store
            .append_message(&channel, "On my way.")
            .expect("dm_2 is seeded");

        let log = store.messages_for_channel(&channel);
        assert_eq!(log.len(), before + 1);
        assert_eq!(log.last(), Some(&sent));
        assert_eq!(store.last_message(&channel), Some(sent.clone()));
        assert_eq!(sent.author_id, *store.viewer_id());
    }

    #[test]
    fn message_ids_never_collide_with_seeded_ones() {
        let mut store = MemoryStore::seeded();
        let channel = ChannelId::new("dm_1");

        let first = store.append_message(&channel, "one").expect("dm_1 exists");
        let second = store.append_message(&channel, "two").expect("dm_1 exists");

        assert_ne!(first.id, second.id);
        let log = store.messages_for_channel(&channel);
        let mut ids: Vec<_> = log.iter().map(|message| message.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), log.len());
    }

    #[test]
    fn marking_a_channel_read_clears_its_unread_counter() {
        let mut store = MemoryStore::seeded();
        let channel = ChannelId::new("dm_1");

        store.mark_channel_read(&channel);

        let resolved = store.get_channel(&channel).expect("dm_1 is seeded");
        assert_eq!(resolved.unread_count, 0);
    }

    #[test]
    fn seeded_logs_are_oldest_first() {
        let store = MemoryStore::seeded();
        let log = store.messages_for_channel(&ChannelId::new("dm_1"));

        assert_eq!(log.len(), 3);
        assert!(
            log.windows(2)
                .all(|pair| pair[0].sent_at_unix_seconds <= pair[1].sent_at_unix_seconds)
        );
        assert_eq!(log[0].content, "Hey, are you free for a call?");
        assert_eq!(log[2].content, "No worries! Ping me when you are.");
    }
}
