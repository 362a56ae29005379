//! Logging integration for ccg.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-run spans.
//! Log output always goes to stderr; stdout is reserved for generated code.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug", "warn"). In
/// debug mode a pretty, source-located format is used; otherwise a compact
/// single-line format.
///
/// Installing a subscriber twice is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one generator run.
///
/// # Examples
///
/// ```
/// use ccg_core::logging::generator_span;
///
/// let span = generator_span("tortoise_model");
/// let _guard = span.enter();
/// tracing::debug!("prompting for model name");
/// ```
pub fn generator_span(generator: &str) -> tracing::Span {
    tracing::info_span!("generate", generator = generator)
}
