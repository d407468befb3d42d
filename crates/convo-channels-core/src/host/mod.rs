//! Interfaces to the host subsystems the engine drives.
//!
//! The host owns every channel; the engine only reads snapshots and pushes
//! replacements. All calls are synchronous and bounded.

use std::collections::BTreeSet;

use crate::error::HostError;
use crate::models::{ActiveNotification, ChannelDescriptor};

mod file;
mod memory;

pub use file::JsonFileHost;
pub use memory::{HostOp, HostState, MemoryNotificationHost, MemoryShortcutHost};

/// The host notification manager.
pub trait NotificationHost: Send + Sync {
    /// Current snapshot of a channel, `None` if the host has no channel with this id.
    fn get_channel(&self, id: &str) -> Result<Option<ChannelDescriptor>, HostError>;

    /// Create the channel, or replace an existing channel with the same id.
    fn create_or_replace(&self, channel: &ChannelDescriptor) -> Result<(), HostError>;

    /// Delete a channel. Deleting an unknown id is a no-op.
    fn delete_channel(&self, id: &str) -> Result<(), HostError>;

    fn list_active_notifications(&self) -> Result<Vec<ActiveNotification>, HostError>;
}

/// The host launcher shortcut manager.
pub trait ShortcutHost: Send + Sync {
    fn remove_shortcuts(&self, ids: &BTreeSet<String>) -> Result<(), HostError>;
}
