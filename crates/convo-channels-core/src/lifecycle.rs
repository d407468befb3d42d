//! Channel lifecycle orchestration.
//!
//! Every operation re-reads the host before acting; nothing about a channel
//! is cached here. Mutations for one conversation are serialized through
//! [`KeyedLocks`] so concurrent callers cannot interleave a read-resolve-write.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{ChannelConfig, GlobalChannelSpec};
use crate::error::{ChannelError, HostError};
use crate::host::{NotificationHost, ShortcutHost};
use crate::locks::KeyedLocks;
use crate::models::{ActiveNotification, ChannelDescriptor, Importance, LegacySettings};
use crate::resolver::{ChannelSettingsResolver, ConversationRef};
use crate::retention::{DeletedConversation, Disposition};
use crate::ringtone::RingtoneResolver;
use crate::shortcuts::ShortcutDeregistration;

/// Proof that the process-wide channels exist.
///
/// Only [`ChannelLifecycleManager::ensure_global_channels`] hands these out,
/// which makes "initialize at startup before creating conversation channels"
/// a compile-time requirement instead of a convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalChannels {
    incoming_messages_id: String,
    alerts_id: String,
}

impl GlobalChannels {
    pub fn incoming_messages_id(&self) -> &str {
        &self.incoming_messages_id
    }

    pub fn alerts_id(&self) -> &str {
        &self.alerts_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct DeletionReport {
    pub conversation_id: String,
    /// False when the shortcut host rejected the removal (already logged).
    pub shortcuts_removed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct RemovalOutcome {
    pub disposition: Disposition,
    /// Present only for permanent removal.
    pub deletion: Option<DeletionReport>,
}

pub struct ChannelLifecycleManager {
    notifications: Arc<dyn NotificationHost>,
    ringtones: Arc<dyn RingtoneResolver>,
    shortcuts: ShortcutDeregistration,
    config: ChannelConfig,
    locks: KeyedLocks,
}

impl ChannelLifecycleManager {
    pub fn new(
        notifications: Arc<dyn NotificationHost>,
        ringtones: Arc<dyn RingtoneResolver>,
        shortcuts: Arc<dyn ShortcutHost>,
        config: ChannelConfig,
    ) -> Self {
        Self {
            notifications,
            ringtones,
            shortcuts: ShortcutDeregistration::new(shortcuts),
            config,
            locks: KeyedLocks::new(),
        }
    }

    /// Conversation ids must be non-empty and must not name a global channel.
    fn require_id(&self, conversation_id: &str) -> Result<(), ChannelError> {
        if conversation_id.is_empty()
            || conversation_id == self.config.incoming_messages.id
            || conversation_id == self.config.alerts.id
        {
            return Err(ChannelError::InvalidConversationId);
        }
        Ok(())
    }

    // ===== Global channels =====

    /// Make sure the incoming-messages and alerts channels exist.
    ///
    /// Present channels are left alone, so settings the user changed in the
    /// host UI survive every restart.
    pub fn ensure_global_channels(&self) -> Result<GlobalChannels, ChannelError> {
        self.ensure_present(&self.config.incoming_messages)?;
        self.ensure_present(&self.config.alerts)?;

        Ok(GlobalChannels {
            incoming_messages_id: self.config.incoming_messages.id.clone(),
            alerts_id: self.config.alerts.id.clone(),
        })
    }

    fn ensure_present(&self, global: &GlobalChannelSpec) -> Result<(), ChannelError> {
        if self.notifications.get_channel(&global.id)?.is_some() {
            debug!(channel_id = %global.id, "global channel already present");
            return Ok(());
        }
        let channel = ChannelDescriptor::new(&global.id, &global.name, Importance::High);
        self.notifications.create_or_replace(&channel)?;
        info!(channel_id = %global.id, "created global channel");
        Ok(())
    }

    // ===== Conversation channels =====

    /// Create the conversation's channel from its legacy settings, or re-sync
    /// an existing one.
    ///
    /// Calling this twice with the same arguments leaves the host unchanged
    /// after the second call.
    pub fn create_or_update(
        &self,
        globals: &GlobalChannels,
        conversation_id: &str,
        conversation_title: &str,
        legacy: &LegacySettings,
    ) -> Result<ChannelDescriptor, ChannelError> {
        self.require_id(conversation_id)?;

        self.locks.with_lock(conversation_id, || -> Result<ChannelDescriptor, ChannelError> {
            let global_default = self
                .notifications
                .get_channel(globals.incoming_messages_id())?
                .ok_or_else(|| ChannelError::PreconditionViolation {
                    message: format!(
                        "global channel '{}' is missing",
                        globals.incoming_messages_id()
                    ),
                })?;

            let existing = self.linked_channel(conversation_id)?;
            if existing.is_none() {
                if let Some(other) = self.notifications.get_channel(conversation_id)? {
                    warn!(
                        conversation_id,
                        linked_to = ?other.conversation_id(),
                        "replacing channel not linked to this conversation"
                    );
                }
            }

            let resolver = ChannelSettingsResolver::new(self.ringtones.as_ref());
            let channel = resolver.resolve(
                ConversationRef {
                    id: conversation_id,
                    title: conversation_title,
                },
                existing.as_ref(),
                legacy,
                &global_default,
            );

            self.notifications.create_or_replace(&channel)?;
            info!(
                conversation_id,
                created = existing.is_none(),
                importance = ?channel.importance,
                vibration = channel.vibration,
                "pushed conversation channel"
            );
            Ok(channel)
        })
    }

    /// The conversation's channel, if the host has one linked to a conversation.
    pub fn lookup(&self, conversation_id: &str) -> Result<Option<ChannelDescriptor>, ChannelError> {
        self.require_id(conversation_id)?;
        Ok(self.linked_channel(conversation_id)?)
    }

    fn linked_channel(&self, conversation_id: &str) -> Result<Option<ChannelDescriptor>, HostError> {
        Ok(self
            .notifications
            .get_channel(conversation_id)?
            .filter(|c| c.is_linked_to(&self.config.incoming_messages.id, conversation_id)))
    }

    /// Remove the conversation's shortcuts and channel.
    ///
    /// Shortcut removal is attempted first and whatever happens there never
    /// prevents the channel delete. Deleting a missing channel succeeds.
    pub fn delete(&self, conversation_id: &str) -> Result<DeletionReport, ChannelError> {
        self.require_id(conversation_id)?;

        self.locks.with_lock(conversation_id, || -> Result<DeletionReport, ChannelError> {
            let shortcuts_removed = self.shortcuts.remove_shortcuts([conversation_id]).is_ok();
            self.notifications.delete_channel(conversation_id)?;
            info!(conversation_id, shortcuts_removed, "deleted conversation channel");

            Ok(DeletionReport {
                conversation_id: conversation_id.to_string(),
                shortcuts_removed,
            })
        })
    }

    /// First notification currently shown on `channel_id`.
    pub fn active_notification(
        &self,
        channel_id: &str,
    ) -> Result<Option<ActiveNotification>, ChannelError> {
        Ok(self
            .notifications
            .list_active_notifications()?
            .into_iter()
            .find(|n| n.channel_id == channel_id))
    }

    // ===== Retention =====

    /// Apply the configured retention policy to a conversation the user deleted.
    /// The channel is only removed when the deletion is permanent.
    pub fn retire_conversation(
        &self,
        conversation_id: &str,
        already_soft_deleted: bool,
    ) -> Result<RemovalOutcome, ChannelError> {
        self.require_id(conversation_id)?;

        let disposition = self.config.retention().disposition(already_soft_deleted);
        let deletion = match disposition {
            Disposition::SoftDelete => {
                debug!(conversation_id, "soft delete keeps channel");
                None
            }
            Disposition::Permanent => Some(self.delete(conversation_id)?),
        };

        Ok(RemovalOutcome {
            disposition,
            deletion,
        })
    }

    /// Delete the channels of soft-deleted conversations whose retention window
    /// elapsed. Returns the purged conversation ids.
    pub fn purge_expired(
        &self,
        candidates: &[DeletedConversation],
        now_ms: i64,
    ) -> Result<Vec<String>, ChannelError> {
        let expired = self.config.retention().expired(candidates, now_ms);
        let mut purged = Vec::with_capacity(expired.len());
        for conversation_id in expired {
            if self.require_id(conversation_id).is_err() {
                warn!(conversation_id, "skipping purge of invalid conversation id");
                continue;
            }
            self.delete(conversation_id)?;
            purged.push(conversation_id.to_string());
        }
        if !purged.is_empty() {
            info!(count = purged.len(), "purged expired conversation channels");
        }
        Ok(purged)
    }
}
