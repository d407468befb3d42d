use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use convo_channels_core::ChannelConfig;

const CONFIG_ENV: &str = "CONVO_CHANNELS_CONFIG";

/// Default location of the config file, if the platform has a config dir.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("convo-channels").join("config.json"))
}

fn load(path: &Path) -> Result<ChannelConfig> {
    ChannelConfig::load(path)
        .with_context(|| format!("Failed to load config file: {}", path.display()))
}

/// Priority: explicit path > `CONVO_CHANNELS_CONFIG` > default location (if it
/// exists) > built-in defaults. Explicit paths must exist.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ChannelConfig> {
    if let Some(path) = explicit {
        return load(path);
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return load(Path::new(&path));
    }

    match default_config_path() {
        Some(path) if path.exists() => load(&path),
        _ => Ok(ChannelConfig::default()),
    }
}
