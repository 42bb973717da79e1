use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// Events are written as JSON lines to stderr so stdout stays clean for command output.
pub fn init_logging(quiet: bool) {
    let mut filter = EnvFilter::from_default_env();
    for directive in log_directives(quiet) {
        filter = filter.add_directive(directive.parse().expect("Invalid log directive"));
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

fn log_directives(quiet: bool) -> [&'static str; 2] {
    if quiet {
        ["opex=error", "opex_core=error"]
    } else {
        ["opex=info", "opex_core=info"]
    }
}
