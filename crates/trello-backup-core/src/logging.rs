use tracing_subscriber::EnvFilter;

/// Environment variable naming a file that receives a full debug log.
pub const DEBUG_LOG_ENV: &str = "TRELLO_BACKUP_DEBUG_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber.
///
/// Stdout carries the JSON status document, so console logging goes to stderr.
pub fn init() -> std::io::Result<()> {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
