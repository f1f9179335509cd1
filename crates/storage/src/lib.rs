#![deny(unsafe_code)]

//! In-memory message/conversation store backing the shell.
//!
//! Lookups are synchronous and infallible: a missing record is `None` or an
//! empty collection, never an error. The only fallible path is parsing the
//! embedded seed fixture, and that degrades to an empty store at startup.

pub mod ids;
pub mod memory;
pub mod seed;
pub mod types;

pub use ids::{ChannelId, MessageId, UserId};
pub use memory::MemoryStore;
pub use seed::{SeedData, SeedError, embedded_seed};
pub use types::{ChannelKind, ChannelRecord, MessageRecord, Presence, UserRecord};

pub trait UserDirectory {
    fn get_user(&self, user_id: &UserId) -> Option<UserRecord>;
    fn list_users(&self) -> Vec<UserRecord>;
}

pub trait ChannelDirectory {
    fn get_channel(&self, channel_id: &ChannelId) -> Option<ChannelRecord>;
    fn list_channels(&self) -> Vec<ChannelRecord>;
}

pub trait MessageLog {
    fn messages_for_channel(&self, channel_id: &ChannelId) -> Vec<MessageRecord>;
    fn append_message(&mut self, channel_id: &ChannelId, content: &str) -> Option<MessageRecord>;
}

pub trait Directory: UserDirectory + ChannelDirectory + MessageLog {}

impl<T> Directory for T where T: UserDirectory + ChannelDirectory + MessageLog {}
