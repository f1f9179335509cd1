use std::fmt;

/// Opaque identifier for one conversation.
///
/// Equality is the only operation the coordination layer performs on it; the
/// value is whatever key the store uses for the underlying channel. Switch
/// detection compares by value, never by pointer identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(String);

impl ConversationId {
    /// Creates a typed conversation identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ConversationId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value_not_identity() {
        let left = ConversationId::new("dm_1");
        let right = ConversationId::new(String::from("dm_1"));
        assert_eq!(left, right);
        assert_ne!(left, ConversationId::new("dm_2"));
    }
}
