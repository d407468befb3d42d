/// Failure reported by an external subsystem (notification host, shortcut host).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum HostError {
    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },
    #[error("Host unavailable: {message}")]
    Unavailable { message: String },
    #[error("Unexpected host error: {message}")]
    Unexpected { message: String },
}

// Required for foreign callback interfaces that return `HostError`.
impl From<uniffi::UnexpectedUniFFICallbackError> for HostError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        HostError::Unexpected { message: e.reason }
    }
}

/// Errors that can occur during channel lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum ChannelError {
    /// The global channel set is not initialized (or was removed behind our back).
    #[error("Precondition violated: {message}")]
    PreconditionViolation { message: String },
    #[error("External subsystem failure: {message}")]
    ExternalSubsystem { message: String },
    #[error("Conversation id is empty or names a global channel")]
    InvalidConversationId,
    #[error("Lock error: failed to acquire lock on {resource}")]
    LockError { resource: String },
}

impl From<HostError> for ChannelError {
    fn from(e: HostError) -> Self {
        ChannelError::ExternalSubsystem {
            message: e.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
