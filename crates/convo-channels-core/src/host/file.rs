//! JSON-file-backed notification host.
//!
//! Wraps [`MemoryNotificationHost`] and writes the whole host state back to
//! disk after every mutation, so the CLI can replay lifecycle operations
//! against a captured channel list.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::memory::{HostState, MemoryNotificationHost};
use super::NotificationHost;
use crate::error::HostError;
use crate::models::{ActiveNotification, ChannelDescriptor};

pub struct JsonFileHost {
    path: PathBuf,
    host: MemoryNotificationHost,
    /// Held from mutation through rename, so saves land in mutation order.
    write_lock: Mutex<()>,
}

fn io_error(path: &Path, e: impl std::fmt::Display) -> HostError {
    HostError::Unavailable {
        message: format!("{}: {}", path.display(), e),
    }
}

impl JsonFileHost {
    /// Open the state file, starting empty if it does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HostError> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
            serde_json::from_str::<HostState>(&contents).map_err(|e| io_error(&path, e))?
        } else {
            HostState::default()
        };

        Ok(Self {
            path,
            host: MemoryNotificationHost::from_state(state),
            write_lock: Mutex::new(()),
        })
    }

    pub fn state(&self) -> HostState {
        self.host.state()
    }

    /// Write-to-temp-then-rename so an interrupted save never leaves a torn file.
    /// Callers hold `write_lock`.
    fn save(&self) -> Result<(), HostError> {
        let json =
            serde_json::to_string_pretty(&self.host.state()).map_err(|e| io_error(&self.path, e))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, json).map_err(|e| io_error(&temp, e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| io_error(&self.path, e))?;
        Ok(())
    }
}

impl NotificationHost for JsonFileHost {
    fn get_channel(&self, id: &str) -> Result<Option<ChannelDescriptor>, HostError> {
        self.host.get_channel(id)
    }

    fn create_or_replace(&self, channel: &ChannelDescriptor) -> Result<(), HostError> {
        let _guard = self.write_lock.lock();
        self.host.create_or_replace(channel)?;
        self.save()
    }

    fn delete_channel(&self, id: &str) -> Result<(), HostError> {
        let _guard = self.write_lock.lock();
        self.host.delete_channel(id)?;
        self.save()
    }

    fn list_active_notifications(&self) -> Result<Vec<ActiveNotification>, HostError> {
        self.host.list_active_notifications()
    }
}
