use std::collections::{BTreeMap, BTreeSet, HashSet};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::{NotificationHost, ShortcutHost};
use crate::error::HostError;
use crate::models::{ActiveNotification, ChannelDescriptor};

/// Host calls that can be made to fail on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOp {
    GetChannel,
    CreateOrReplace,
    DeleteChannel,
    ListActiveNotifications,
    RemoveShortcuts,
}

/// Serializable contents of a notification host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostState {
    pub channels: BTreeMap<String, ChannelDescriptor>,
    pub active_notifications: Vec<ActiveNotification>,
}

#[derive(Default)]
struct Inner {
    state: HostState,
    writes: usize,
    effective_changes: usize,
    failing: HashSet<HostOp>,
}

fn injected(op: HostOp) -> HostError {
    HostError::Unavailable {
        message: format!("injected failure for {:?}", op),
    }
}

/// In-process notification host.
///
/// Behaves like the platform manager: `create_or_replace` with an identical
/// value is accepted but changes nothing observable.
#[derive(Default)]
pub struct MemoryNotificationHost {
    inner: Mutex<Inner>,
}

impl MemoryNotificationHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: HostState) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state,
                ..Inner::default()
            }),
        }
    }

    pub fn state(&self) -> HostState {
        self.inner.lock().state.clone()
    }

    /// Place a channel directly, bypassing write accounting.
    pub fn insert_channel(&self, channel: ChannelDescriptor) {
        self.inner
            .lock()
            .state
            .channels
            .insert(channel.id.clone(), channel);
    }

    pub fn channel(&self, id: &str) -> Option<ChannelDescriptor> {
        self.inner.lock().state.channels.get(id).cloned()
    }

    pub fn post_notification(&self, notification: ActiveNotification) {
        self.inner
            .lock()
            .state
            .active_notifications
            .push(notification);
    }

    /// Number of `create_or_replace` calls accepted.
    pub fn writes(&self) -> usize {
        self.inner.lock().writes
    }

    /// Number of writes and deletes that actually changed host state.
    pub fn effective_changes(&self) -> usize {
        self.inner.lock().effective_changes
    }

    pub fn fail(&self, op: HostOp) {
        self.inner.lock().failing.insert(op);
    }

    pub fn recover(&self, op: HostOp) {
        self.inner.lock().failing.remove(&op);
    }
}

impl NotificationHost for MemoryNotificationHost {
    fn get_channel(&self, id: &str) -> Result<Option<ChannelDescriptor>, HostError> {
        let inner = self.inner.lock();
        if inner.failing.contains(&HostOp::GetChannel) {
            return Err(injected(HostOp::GetChannel));
        }
        Ok(inner.state.channels.get(id).cloned())
    }

    fn create_or_replace(&self, channel: &ChannelDescriptor) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        if inner.failing.contains(&HostOp::CreateOrReplace) {
            return Err(injected(HostOp::CreateOrReplace));
        }
        inner.writes += 1;
        if inner.state.channels.get(&channel.id) != Some(channel) {
            inner.effective_changes += 1;
            inner
                .state
                .channels
                .insert(channel.id.clone(), channel.clone());
        }
        Ok(())
    }

    fn delete_channel(&self, id: &str) -> Result<(), HostError> {
        let mut inner = self.inner.lock();
        if inner.failing.contains(&HostOp::DeleteChannel) {
            return Err(injected(HostOp::DeleteChannel));
        }
        if inner.state.channels.remove(id).is_some() {
            inner.effective_changes += 1;
        }
        Ok(())
    }

    fn list_active_notifications(&self) -> Result<Vec<ActiveNotification>, HostError> {
        let inner = self.inner.lock();
        if inner.failing.contains(&HostOp::ListActiveNotifications) {
            return Err(injected(HostOp::ListActiveNotifications));
        }
        Ok(inner.state.active_notifications.clone())
    }
}

/// In-process shortcut host recording every removal batch.
#[derive(Default)]
pub struct MemoryShortcutHost {
    batches: Mutex<Vec<BTreeSet<String>>>,
    failing: Mutex<bool>,
}

impl MemoryShortcutHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> Vec<BTreeSet<String>> {
        self.batches.lock().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock() = failing;
    }
}

impl ShortcutHost for MemoryShortcutHost {
    fn remove_shortcuts(&self, ids: &BTreeSet<String>) -> Result<(), HostError> {
        // Record the attempt even when failing, the host saw the call.
        self.batches.lock().push(ids.clone());
        if *self.failing.lock() {
            return Err(injected(HostOp::RemoveShortcuts));
        }
        Ok(())
    }
}
