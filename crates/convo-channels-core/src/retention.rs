//! Retention of deleted conversations.
//!
//! Deleting a conversation first moves it to a "deleted" state (soft delete)
//! and keeps its channel. Once the retention window has passed, or when the
//! window is zero, the conversation and its channel are removed for good.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RETENTION_DAYS, MAX_RETENTION_DAYS, MILLIS_PER_DAY};

/// What happens when the user deletes a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum Disposition {
    /// Hide the conversation and keep its channel until purged.
    SoftDelete,
    /// Remove the conversation and its channel now.
    Permanent,
}

/// A soft-deleted conversation awaiting purge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct DeletedConversation {
    pub conversation_id: String,
    /// Unix millis when it was soft deleted; 0 when unknown.
    pub deleted_at_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    days: i32,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl RetentionPolicy {
    /// Negative disables purging. Positive values are capped at
    /// [`MAX_RETENTION_DAYS`].
    pub fn from_days(days: i32) -> Self {
        Self {
            days: days.min(MAX_RETENTION_DAYS),
        }
    }

    /// Parse a user-entered value: anything that is not a plain `i32`
    /// (including surrounding whitespace) yields the default, numbers are
    /// clamped to `0..=MAX_RETENTION_DAYS`.
    pub fn parse_days(text: &str) -> Self {
        let days = text
            .parse::<i32>()
            .map(|d| d.clamp(0, MAX_RETENTION_DAYS))
            .unwrap_or(DEFAULT_RETENTION_DAYS);
        Self { days }
    }

    pub fn days(&self) -> i32 {
        self.days
    }

    pub fn is_enabled(&self) -> bool {
        self.days >= 0
    }

    pub fn disposition(&self, already_soft_deleted: bool) -> Disposition {
        if already_soft_deleted || self.days == 0 {
            Disposition::Permanent
        } else {
            Disposition::SoftDelete
        }
    }

    /// Conversations deleted at or before the returned instant are due.
    /// `None` when purging is disabled.
    pub fn purge_cutoff(&self, now_ms: i64) -> Option<i64> {
        match self.days {
            d if d < 0 => None,
            0 => Some(i64::MAX),
            d => Some(now_ms.saturating_sub(d as i64 * MILLIS_PER_DAY)),
        }
    }

    /// Ids of the candidates whose retention window has elapsed.
    pub fn expired<'a>(
        &self,
        candidates: &'a [DeletedConversation],
        now_ms: i64,
    ) -> Vec<&'a str> {
        let Some(cutoff) = self.purge_cutoff(now_ms) else {
            return Vec::new();
        };
        candidates
            .iter()
            .filter(|c| c.deleted_at_ms > 0 && c.deleted_at_ms <= cutoff)
            .map(|c| c.conversation_id.as_str())
            .collect()
    }
}
