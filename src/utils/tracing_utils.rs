use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, writing to stderr so that
/// stdout only carries results.
///
/// The level comes from `--log-level` / `RUST_LOG`. Unparseable filters fall
/// back to `info`. Calling this twice is a no-op.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
