// UniFFI scaffolding for generating Swift/Kotlin bindings
uniffi::setup_scaffolding!();

pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod ffi;
pub mod host;
pub mod lifecycle;
pub mod locks;
pub mod models;
pub mod resolver;
pub mod retention;
pub mod ringtone;
pub mod shortcuts;

pub use config::ChannelConfig;
pub use error::{ChannelError, HostError};
pub use lifecycle::{ChannelLifecycleManager, GlobalChannels};
pub use models::{ChannelDescriptor, Importance, LegacySettings};
