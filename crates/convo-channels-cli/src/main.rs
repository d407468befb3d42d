use std::path::PathBuf;

use clap::{Parser, Subcommand};
use convo_channels_cli::cli::commands::parse_deleted;
use convo_channels_cli::cli::{init_tracing, resolve_config, run_command, CliCommand};
use convo_channels_core::LegacySettings;

#[derive(Parser)]
#[command(name = "convo-channels")]
#[command(about = "Inspect and drive per-conversation notification channels")]
struct Cli {
    /// Host state file (JSON). Created on first write.
    #[arg(long, short = 's')]
    state: Option<PathBuf>,

    /// Path to JSON config file (global channel ids, retentionDays)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, short)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the global channels if missing
    Ensure,

    /// Create or update the channel of a conversation
    Upsert {
        /// Conversation ID
        conversation_id: String,
        /// Channel title (ignored when the channel already exists)
        title: String,
        /// Legacy notifications toggle was off
        #[arg(long)]
        disabled: bool,
        /// Legacy ringtone URI
        #[arg(long)]
        ringtone: Option<String>,
        /// Legacy vibration toggle was on
        #[arg(long)]
        vibrate: bool,
    },

    /// Show the channel of a conversation
    Lookup {
        /// Conversation ID
        conversation_id: String,
    },

    /// Delete the channel and shortcut of a conversation
    Delete {
        /// Conversation ID
        conversation_id: String,
    },

    /// Delete a conversation, honouring the retention setting
    Retire {
        /// Conversation ID
        conversation_id: String,
        /// Conversation is already in the deleted state
        #[arg(long)]
        already_deleted: bool,
    },

    /// Purge channels of soft-deleted conversations past retention
    Purge {
        /// Candidate as <conversation-id>:<deleted-at-ms> (can be repeated)
        #[arg(long, short = 'd')]
        deleted: Vec<String>,
        /// Override the current time (epoch millis)
        #[arg(long)]
        now: Option<i64>,
    },

    /// List every channel in the state file
    List,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let Some(state) = cli.state.clone().or_else(default_state_path) else {
        eprintln!("No --state given and no data directory available.");
        std::process::exit(1);
    };

    let command = match cli.command {
        Some(Commands::Ensure) => CliCommand::Ensure,
        Some(Commands::Upsert {
            conversation_id,
            title,
            disabled,
            ringtone,
            vibrate,
        }) => CliCommand::Upsert {
            conversation_id,
            title,
            legacy: LegacySettings {
                notifications_enabled: !disabled,
                ringtone,
                vibration_enabled: vibrate,
            },
        },
        Some(Commands::Lookup { conversation_id }) => CliCommand::Lookup { conversation_id },
        Some(Commands::Delete { conversation_id }) => CliCommand::Delete { conversation_id },
        Some(Commands::Retire {
            conversation_id,
            already_deleted,
        }) => CliCommand::Retire {
            conversation_id,
            already_deleted,
        },
        Some(Commands::Purge { deleted, now }) => {
            let candidates = match deleted.iter().map(|d| parse_deleted(d)).collect() {
                Ok(candidates) => candidates,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    std::process::exit(1);
                }
            };
            CliCommand::Purge {
                candidates,
                now_ms: now,
            }
        }
        Some(Commands::List) => CliCommand::List,
        None => {
            eprintln!("No command specified. Use --help for usage.");
            std::process::exit(1);
        }
    };

    let output = run_command(command, &state, config).and_then(|value| {
        let text = if cli.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    });

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn default_state_path() -> Option<PathBuf> {
    dirs::data_dir().map(|base| base.join("convo-channels").join("host.json"))
}
