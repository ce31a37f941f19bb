use tracing_subscriber::EnvFilter;

/// Output flavour of the global subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, no ANSI colours and no timestamps; the
    /// Lambda log pipeline stamps each line itself.
    Json,
    /// Human-readable lines for local runs.
    Pretty,
}

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
///
/// # Panics
///
/// Panics if a global subscriber was already installed.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Json => builder
            .json()
            .with_current_span(false)
            .with_ansi(false)
            .without_time()
            .init(),
        LogFormat::Pretty => builder.init(),
    }
}
