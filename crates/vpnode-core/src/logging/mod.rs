use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// Events go to stderr as JSON lines; stdout is reserved for command output.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(log_directive(quiet).parse().expect("Invalid log directive")),
        )
        .init();
}

/// The `vpnode` target prefix covers both the CLI and `vpnode_core`.
fn log_directive(quiet: bool) -> &'static str {
    if quiet { "vpnode=error" } else { "vpnode=info" }
}
