use tracing_subscriber::{fmt, EnvFilter};

/// Sets up the global subscriber.
///
/// Level comes from `RUST_LOG` (default `warn`). Output goes to stderr so the
/// JSON report on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
