use serde::{Deserialize, Serialize};

/// Host importance of a channel. Ordering follows how intrusive delivery is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    uniffi::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    None,
    Low,
    Default,
    High,
}

/// Marks a channel as owned by a conversation, grouped under a parent channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Record)]
pub struct ConversationLink {
    pub parent_channel_id: String,
    pub conversation_id: String,
}

/// Snapshot of a host notification channel.
///
/// Values are never cached between operations: every lifecycle call re-reads
/// the host and produces a fresh descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct ChannelDescriptor {
    pub id: String,
    pub title: String,
    pub importance: Importance,
    pub sound: Option<String>,
    pub vibration: bool,
    /// `None` for global channels and for orphans that merely share an id.
    pub link: Option<ConversationLink>,
}

impl ChannelDescriptor {
    /// A plain (unlinked) channel, as created for the global channel set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, importance: Importance) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            importance,
            sound: None,
            vibration: false,
            link: None,
        }
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.link.as_ref().map(|l| l.conversation_id.as_str())
    }

    /// True when the channel belongs to `conversation_id` under `parent_channel_id`.
    pub fn is_linked_to(&self, parent_channel_id: &str, conversation_id: &str) -> bool {
        self.link.as_ref().is_some_and(|l| {
            l.parent_channel_id == parent_channel_id && l.conversation_id == conversation_id
        })
    }
}
