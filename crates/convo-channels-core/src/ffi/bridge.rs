//! Adapters from the foreign callback interfaces to the engine's host traits.

use std::collections::BTreeSet;

use super::{ForeignNotificationHost, ForeignRingtoneResolver, ForeignShortcutHost};
use crate::error::HostError;
use crate::host::{NotificationHost, ShortcutHost};
use crate::models::{ActiveNotification, ChannelDescriptor};
use crate::ringtone::RingtoneResolver;

pub(super) struct NotificationBridge {
    inner: Box<dyn ForeignNotificationHost>,
}

impl NotificationBridge {
    pub(super) fn new(inner: Box<dyn ForeignNotificationHost>) -> Self {
        Self { inner }
    }
}

impl NotificationHost for NotificationBridge {
    fn get_channel(&self, id: &str) -> Result<Option<ChannelDescriptor>, HostError> {
        self.inner.get_channel(id.to_string())
    }

    fn create_or_replace(&self, channel: &ChannelDescriptor) -> Result<(), HostError> {
        self.inner.create_or_replace(channel.clone())
    }

    fn delete_channel(&self, id: &str) -> Result<(), HostError> {
        self.inner.delete_channel(id.to_string())
    }

    fn list_active_notifications(&self) -> Result<Vec<ActiveNotification>, HostError> {
        self.inner.list_active_notifications()
    }
}

pub(super) struct RingtoneBridge {
    inner: Box<dyn ForeignRingtoneResolver>,
}

impl RingtoneBridge {
    pub(super) fn new(inner: Box<dyn ForeignRingtoneResolver>) -> Self {
        Self { inner }
    }
}

impl RingtoneResolver for RingtoneBridge {
    fn resolve(&self, conversation_id: &str, legacy_ringtone: Option<&str>) -> String {
        self.inner.resolve(
            conversation_id.to_string(),
            legacy_ringtone.map(str::to_string),
        )
    }
}

pub(super) struct ShortcutBridge {
    inner: Box<dyn ForeignShortcutHost>,
}

impl ShortcutBridge {
    pub(super) fn new(inner: Box<dyn ForeignShortcutHost>) -> Self {
        Self { inner }
    }
}

impl ShortcutHost for ShortcutBridge {
    fn remove_shortcuts(&self, ids: &BTreeSet<String>) -> Result<(), HostError> {
        // Sets cross the FFI boundary as lists.
        self.inner.remove_shortcuts(ids.iter().cloned().collect())
    }
}
