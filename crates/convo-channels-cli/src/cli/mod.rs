pub mod commands;
pub mod config;
pub mod logging;

pub use commands::{run_command, CliCommand};
pub use config::resolve_config;
pub use logging::init_tracing;
