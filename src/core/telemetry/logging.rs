use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr; stdout belongs to the rendered diagram.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
