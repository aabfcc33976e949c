//! Logging integration for hosts that embed a template engine standalone.
//!
//! Engine adapters emit [`tracing`] events (construction, compilation,
//! eviction warnings); a host that does not already install its own
//! subscriber can use [`setup_logging`] to get a sensible one.

/// Sets up a global tracing subscriber with the given filter directive
/// (e.g. `"info"`, `"fragment_te_jinja=trace"`).
///
/// In debug mode a pretty, human-readable format is used; in production a
/// structured JSON format is used. Falls back to `"info"` when the
/// directive does not parse. Does nothing if a subscriber is already
/// installed.
///
/// # Examples
///
/// ```
/// fragment_te_api::logging::setup_logging("info", true);
/// tracing::info!("engine host starting");
/// ```
pub fn setup_logging(filter: &str, debug: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }

    let debug_mode = debug;
    tracing::debug!(debug = debug_mode, "template engine logging initialized");
}
