use serde::Deserialize;
use snafu::{ResultExt, Snafu};

use crate::ids::{ChannelId, MessageId, UserId};
use crate::types::{ChannelRecord, UserRecord};

const SEED_JSON: &str = include_str!("seed.json");

/// Fixture dataset the in-memory store boots from.
///
/// Message timestamps are stored as ages rather than absolute instants so the
/// seeded history always reads as recent activity.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub viewer_id: UserId,
    pub users: Vec<UserRecord>,
    pub channels: Vec<ChannelRecord>,
    #[serde(default)]
    pub messages: Vec<SeedMessage>,
}

/// One seeded message with a relative age in minutes.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub content: String,
    pub minutes_ago: u64,
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SeedError {
    #[snafu(display("failed to parse embedded seed data on `{stage}`: {source}"))]
    ParseSeed {
        stage: &'static str,
        source: serde_json::Error,
    },
}

/// Parses the embedded seed fixture.
pub fn embedded_seed() -> Result<SeedData, SeedError> {
    serde_json::from_str(SEED_JSON).context(ParseSeedSnafu {
        stage: "parse-embedded-seed-json",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_parses_and_is_internally_consistent() {
        let seed = embedded_seed().expect("embedded seed must parse");

        assert!(seed.users.iter().any(|user| user.id == seed.viewer_id));
        assert!(!seed.channels.is_empty());

        for channel in &seed.channels {
            for recipient in &channel.recipient_ids {
                assert!(
                    seed.users.iter().any(|user| &user.id == recipient),
                    "channel {} references unknown user {recipient}",
                    channel.id
                );
            }
        }

        for message in &seed.messages {
            assert!(
                seed.channels
                    .iter()
                    .any(|channel| channel.id == message.channel_id),
                "message {} references unknown channel {}",
                message.id,
                message.channel_id
            );
        }
    }
}
