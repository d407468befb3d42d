pub mod channel;
pub mod legacy;
pub mod notification;

pub use channel::{ChannelDescriptor, ConversationLink, Importance};
pub use legacy::LegacySettings;
pub use notification::ActiveNotification;
