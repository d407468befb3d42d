//! Computes the channel a conversation should have from its legacy settings.
//!
//! Pure and total: no host access, no errors. The only collaborator is the
//! ringtone resolver, which is itself infallible.

use crate::models::{ChannelDescriptor, ConversationLink, Importance, LegacySettings};
use crate::ringtone::RingtoneResolver;

/// The conversation being reconciled.
#[derive(Debug, Clone, Copy)]
pub struct ConversationRef<'a> {
    pub id: &'a str,
    /// Only used when the channel is created.
    pub title: &'a str,
}

pub struct ChannelSettingsResolver<'a> {
    ringtones: &'a dyn RingtoneResolver,
}

impl<'a> ChannelSettingsResolver<'a> {
    pub fn new(ringtones: &'a dyn RingtoneResolver) -> Self {
        Self { ringtones }
    }

    /// Merge legacy settings onto `existing` (or a fresh channel) using
    /// `global_default` as the inheritance and grouping parent.
    ///
    /// `existing` must already be filtered to linked conversation channels;
    /// orphans are the caller's concern.
    pub fn resolve(
        &self,
        conversation: ConversationRef<'_>,
        existing: Option<&ChannelDescriptor>,
        legacy: &LegacySettings,
        global_default: &ChannelDescriptor,
    ) -> ChannelDescriptor {
        // Importance and title of a live channel belong to the user.
        let mut channel = match existing {
            Some(existing) => existing.clone(),
            None => {
                let importance = if legacy.notifications_enabled {
                    global_default.importance
                } else {
                    Importance::None
                };
                ChannelDescriptor::new(conversation.id, conversation.title, importance)
            }
        };

        channel.sound = Some(
            self.ringtones
                .resolve(conversation.id, legacy.ringtone.as_deref()),
        );

        // Legacy "on" defers to the live channel; legacy "off" resets to the parent.
        channel.vibration = if legacy.vibration_enabled {
            existing.map(|c| c.vibration).unwrap_or(false)
        } else {
            global_default.vibration
        };

        channel.link = Some(ConversationLink {
            parent_channel_id: global_default.id.clone(),
            conversation_id: conversation.id.to_string(),
        });

        channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ringtone::FallbackRingtoneResolver;

    fn global_default(vibration: bool) -> ChannelDescriptor {
        let mut channel = ChannelDescriptor::new("Conversations", "Incoming", Importance::High);
        channel.vibration = vibration;
        channel
    }

    fn existing(importance: Importance, vibration: bool) -> ChannelDescriptor {
        let mut channel = ChannelDescriptor::new("c1", "Original", importance);
        channel.vibration = vibration;
        channel.sound = Some("content://old".to_string());
        channel.link = Some(ConversationLink {
            parent_channel_id: "Conversations".to_string(),
            conversation_id: "c1".to_string(),
        });
        channel
    }

    fn conversation(title: &str) -> ConversationRef<'_> {
        ConversationRef { id: "c1", title }
    }

    #[test]
    fn test_new_channel_inherits_default_importance() {
        let ringtones = FallbackRingtoneResolver::new("content://default");
        let resolver = ChannelSettingsResolver::new(&ringtones);

        let channel = resolver.resolve(
            conversation("Alice"),
            None,
            &LegacySettings::default(),
            &global_default(false),
        );

        assert_eq!(channel.id, "c1");
        assert_eq!(channel.title, "Alice");
        assert_eq!(channel.importance, Importance::High);
        assert_eq!(channel.sound.as_deref(), Some("content://default"));
        assert!(!channel.vibration);
        let link = channel.link.unwrap();
        assert_eq!(link.parent_channel_id, "Conversations");
        assert_eq!(link.conversation_id, "c1");
    }

    #[test]
    fn test_legacy_disabled_imports_as_none() {
        let ringtones = FallbackRingtoneResolver::default();
        let resolver = ChannelSettingsResolver::new(&ringtones);
        let legacy = LegacySettings {
            notifications_enabled: false,
            ..LegacySettings::default()
        };

        let channel = resolver.resolve(conversation("Alice"), None, &legacy, &global_default(false));
        assert_eq!(channel.importance, Importance::None);
    }

    #[test]
    fn test_existing_importance_and_title_survive() {
        let ringtones = FallbackRingtoneResolver::default();
        let resolver = ChannelSettingsResolver::new(&ringtones);
        let current = existing(Importance::Low, false);
        let legacy = LegacySettings {
            notifications_enabled: false,
            ..LegacySettings::default()
        };

        let channel = resolver.resolve(
            conversation("Renamed"),
            Some(&current),
            &legacy,
            &global_default(false),
        );
        assert_eq!(channel.importance, Importance::Low);
        assert_eq!(channel.title, "Original");
    }

    #[test]
    fn test_sound_is_always_resynced() {
        let ringtones = FallbackRingtoneResolver::default();
        let resolver = ChannelSettingsResolver::new(&ringtones);
        let current = existing(Importance::High, false);
        let legacy = LegacySettings {
            ringtone: Some("content://new".to_string()),
            ..LegacySettings::default()
        };

        let channel = resolver.resolve(
            conversation("Alice"),
            Some(&current),
            &legacy,
            &global_default(false),
        );
        assert_eq!(channel.sound.as_deref(), Some("content://new"));
    }

    #[test]
    fn test_vibration_asymmetry() {
        let ringtones = FallbackRingtoneResolver::default();
        let resolver = ChannelSettingsResolver::new(&ringtones);
        let vibrating = existing(Importance::High, true);
        let legacy_on = LegacySettings {
            vibration_enabled: true,
            ..LegacySettings::default()
        };
        let legacy_off = LegacySettings::default();

        // Legacy on: keeps the live channel's flag.
        let kept = resolver.resolve(
            conversation("A"),
            Some(&vibrating),
            &legacy_on,
            &global_default(false),
        );
        assert!(kept.vibration);

        // Legacy on without a channel: does not force vibration on.
        let fresh = resolver.resolve(conversation("A"), None, &legacy_on, &global_default(true));
        assert!(!fresh.vibration);

        // Legacy off: follows the parent, overriding the live channel.
        let reset = resolver.resolve(
            conversation("A"),
            Some(&vibrating),
            &legacy_off,
            &global_default(false),
        );
        assert!(!reset.vibration);

        let inherited = resolver.resolve(conversation("A"), None, &legacy_off, &global_default(true));
        assert!(inherited.vibration);
    }

    #[test]
    fn test_deterministic() {
        let ringtones = FallbackRingtoneResolver::default();
        let resolver = ChannelSettingsResolver::new(&ringtones);
        let current = existing(Importance::Default, true);
        let legacy = LegacySettings {
            notifications_enabled: true,
            ringtone: Some("content://x".to_string()),
            vibration_enabled: true,
        };
        let parent = global_default(false);

        let first = resolver.resolve(conversation("A"), Some(&current), &legacy, &parent);
        let second = resolver.resolve(conversation("A"), Some(&first), &legacy, &parent);
        assert_eq!(first, second);
    }
}
