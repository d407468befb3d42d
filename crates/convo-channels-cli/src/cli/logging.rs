use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILTER_ENV: &str = "CONVO_CHANNELS_LOG";
const LOG_FILE_ENV: &str = "CONVO_CHANNELS_LOG_FILE";

/// Install the global subscriber: stderr always, plus a file layer when
/// `CONVO_CHANNELS_LOG_FILE` is set. Stdout stays reserved for JSON output.
pub fn init_tracing() {
    let filter = || EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter());

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let file = std::env::var(LOG_FILE_ENV)
        .ok()
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());

    match file {
        Some(file) => {
            let file_layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_filter(filter());
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }
}
