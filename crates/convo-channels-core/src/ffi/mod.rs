//! FFI module for UniFFI bindings
//!
//! Exposes the channel engine to the Kotlin/Swift host. The host implements
//! the notification, ringtone and shortcut subsystems as callback interfaces;
//! everything else stays in Rust. No async functions, only basic types.

use std::sync::{Arc, RwLock};

use crate::config::ChannelConfig;
use crate::error::{ChannelError, HostError};
use crate::host::{NotificationHost, ShortcutHost};
use crate::lifecycle::{ChannelLifecycleManager, DeletionReport, GlobalChannels, RemovalOutcome};
use crate::models::{ActiveNotification, ChannelDescriptor, LegacySettings};
use crate::retention::{DeletedConversation, RetentionPolicy};
use crate::ringtone::RingtoneResolver;

mod bridge;

use bridge::{NotificationBridge, RingtoneBridge, ShortcutBridge};

/// Host notification manager, implemented on the platform side.
///
/// # Thread Safety
/// Methods are called synchronously from whichever thread invoked the engine.
#[uniffi::export(callback_interface)]
pub trait ForeignNotificationHost: Send + Sync {
    fn get_channel(&self, id: String) -> Result<Option<ChannelDescriptor>, HostError>;
    fn create_or_replace(&self, channel: ChannelDescriptor) -> Result<(), HostError>;
    fn delete_channel(&self, id: String) -> Result<(), HostError>;
    fn list_active_notifications(&self) -> Result<Vec<ActiveNotification>, HostError>;
}

/// Must always return a usable URI, falling back internally.
#[uniffi::export(callback_interface)]
pub trait ForeignRingtoneResolver: Send + Sync {
    fn resolve(&self, conversation_id: String, legacy_ringtone: Option<String>) -> String;
}

#[uniffi::export(callback_interface)]
pub trait ForeignShortcutHost: Send + Sync {
    fn remove_shortcuts(&self, ids: Vec<String>) -> Result<(), HostError>;
}

/// Channel engine exposed to foreign languages.
#[derive(uniffi::Object)]
pub struct ChannelEngine {
    manager: ChannelLifecycleManager,
    /// Set by `ensure_global_channels`; conversation channels require it.
    globals: RwLock<Option<GlobalChannels>>,
}

impl ChannelEngine {
    /// Build an engine over Rust-side hosts.
    pub fn with_hosts(
        notifications: Arc<dyn NotificationHost>,
        ringtones: Arc<dyn RingtoneResolver>,
        shortcuts: Arc<dyn ShortcutHost>,
        config: ChannelConfig,
    ) -> Self {
        Self {
            manager: ChannelLifecycleManager::new(notifications, ringtones, shortcuts, config),
            globals: RwLock::new(None),
        }
    }

    fn globals(&self) -> Result<GlobalChannels, ChannelError> {
        let guard = self.globals.read().map_err(|_| ChannelError::LockError {
            resource: "globals".to_string(),
        })?;
        guard
            .clone()
            .ok_or_else(|| ChannelError::PreconditionViolation {
                message: "ensure_global_channels() has not been called".to_string(),
            })
    }
}

#[uniffi::export]
impl ChannelEngine {
    #[uniffi::constructor]
    pub fn new(
        notifications: Box<dyn ForeignNotificationHost>,
        ringtones: Box<dyn ForeignRingtoneResolver>,
        shortcuts: Box<dyn ForeignShortcutHost>,
        config: ChannelConfig,
    ) -> Arc<Self> {
        Arc::new(Self::with_hosts(
            Arc::new(NotificationBridge::new(notifications)),
            Arc::new(RingtoneBridge::new(ringtones)),
            Arc::new(ShortcutBridge::new(shortcuts)),
            config,
        ))
    }

    /// Create the global channels if missing. Call once per process start,
    /// before any conversation channel is touched.
    pub fn ensure_global_channels(&self) -> Result<(), ChannelError> {
        let globals = self.manager.ensure_global_channels()?;
        let mut guard = self.globals.write().map_err(|_| ChannelError::LockError {
            resource: "globals".to_string(),
        })?;
        *guard = Some(globals);
        Ok(())
    }

    /// Create or re-sync a conversation's channel from its legacy preferences.
    pub fn create_conversation_channel(
        &self,
        conversation_id: String,
        conversation_title: String,
        legacy: LegacySettings,
    ) -> Result<ChannelDescriptor, ChannelError> {
        let globals = self.globals()?;
        self.manager
            .create_or_update(&globals, &conversation_id, &conversation_title, &legacy)
    }

    pub fn get_conversation_channel(
        &self,
        conversation_id: String,
    ) -> Result<Option<ChannelDescriptor>, ChannelError> {
        self.manager.lookup(&conversation_id)
    }

    pub fn delete_channel(&self, conversation_id: String) -> Result<DeletionReport, ChannelError> {
        self.manager.delete(&conversation_id)
    }

    pub fn get_active_notification(
        &self,
        channel_id: String,
    ) -> Result<Option<ActiveNotification>, ChannelError> {
        self.manager.active_notification(&channel_id)
    }

    /// Apply the retention policy to a conversation the user just deleted.
    pub fn retire_conversation(
        &self,
        conversation_id: String,
        already_soft_deleted: bool,
    ) -> Result<RemovalOutcome, ChannelError> {
        self.manager
            .retire_conversation(&conversation_id, already_soft_deleted)
    }

    /// Delete channels of soft-deleted conversations past retention.
    /// `now_ms` defaults to the current time.
    pub fn purge_expired_channels(
        &self,
        candidates: Vec<DeletedConversation>,
        now_ms: Option<i64>,
    ) -> Result<Vec<String>, ChannelError> {
        let now_ms = now_ms.unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
        self.manager.purge_expired(&candidates, now_ms)
    }
}

/// Normalize a user-entered retention value (days).
#[uniffi::export]
pub fn parse_retention_days(text: String) -> i32 {
    RetentionPolicy::parse_days(&text).days()
}
