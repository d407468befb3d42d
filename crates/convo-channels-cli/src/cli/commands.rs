use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use serde_json::{json, Value};

use convo_channels_core::host::{JsonFileHost, ShortcutHost};
use convo_channels_core::retention::DeletedConversation;
use convo_channels_core::ringtone::FallbackRingtoneResolver;
use convo_channels_core::{ChannelConfig, ChannelLifecycleManager, HostError, LegacySettings};

/// Operations the CLI can replay against a host state file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Ensure,
    Upsert {
        conversation_id: String,
        title: String,
        legacy: LegacySettings,
    },
    Lookup {
        conversation_id: String,
    },
    Delete {
        conversation_id: String,
    },
    Retire {
        conversation_id: String,
        already_deleted: bool,
    },
    Purge {
        candidates: Vec<DeletedConversation>,
        now_ms: Option<i64>,
    },
    List,
}

/// There is no launcher on the command line; removals are only logged.
struct LoggingShortcutHost;

impl ShortcutHost for LoggingShortcutHost {
    fn remove_shortcuts(&self, ids: &BTreeSet<String>) -> Result<(), HostError> {
        tracing::info!(?ids, "would remove shortcuts");
        Ok(())
    }
}

/// Parse `id:deleted_at_ms` as given to `purge --deleted`.
pub fn parse_deleted(arg: &str) -> Result<DeletedConversation> {
    let (id, at) = arg
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("expected <conversation-id>:<deleted-at-ms>, got '{}'", arg))?;
    let deleted_at_ms = at
        .parse::<i64>()
        .with_context(|| format!("invalid timestamp in '{}'", arg))?;
    Ok(DeletedConversation {
        conversation_id: id.to_string(),
        deleted_at_ms,
    })
}

/// Run one command against the host state at `state_path`, returning the JSON result.
pub fn run_command(command: CliCommand, state_path: &Path, config: ChannelConfig) -> Result<Value> {
    let host = Arc::new(JsonFileHost::open(state_path)?);
    let manager = ChannelLifecycleManager::new(
        host.clone(),
        Arc::new(FallbackRingtoneResolver::default()),
        Arc::new(LoggingShortcutHost),
        config,
    );

    let value = match command {
        CliCommand::Ensure => {
            let globals = manager.ensure_global_channels()?;
            json!({
                "incomingMessages": globals.incoming_messages_id(),
                "alerts": globals.alerts_id(),
            })
        }
        CliCommand::Upsert {
            conversation_id,
            title,
            legacy,
        } => {
            // Same ordering the app uses at startup.
            let globals = manager.ensure_global_channels()?;
            let channel = manager.create_or_update(&globals, &conversation_id, &title, &legacy)?;
            serde_json::to_value(channel)?
        }
        CliCommand::Lookup { conversation_id } => {
            serde_json::to_value(manager.lookup(&conversation_id)?)?
        }
        CliCommand::Delete { conversation_id } => {
            serde_json::to_value(manager.delete(&conversation_id)?)?
        }
        CliCommand::Retire {
            conversation_id,
            already_deleted,
        } => serde_json::to_value(manager.retire_conversation(&conversation_id, already_deleted)?)?,
        CliCommand::Purge { candidates, now_ms } => {
            let now_ms = now_ms.unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
            json!({ "purged": manager.purge_expired(&candidates, now_ms)? })
        }
        CliCommand::List => {
            let channels: Vec<_> = host.state().channels.into_values().collect();
            serde_json::to_value(channels)?
        }
    };

    Ok(value)
}
