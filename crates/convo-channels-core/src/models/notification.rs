use serde::{Deserialize, Serialize};

/// A notification currently shown by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct ActiveNotification {
    pub channel_id: String,
    /// Opaque host payload; the engine never inspects it.
    pub payload: String,
}
