//! Tracing subscriber setup. The Worker installs it once per isolate with a
//! console writer; tests build scoped subscribers over a capture buffer.

use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";

static INIT: Once = Once::new();

/// `LOG_LEVEL` directive, falling back to [`DEFAULT_LOG_FILTER`] when unset,
/// blank or unparseable.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Plain-text formatter without timestamps: the Workers runtime has no system
/// clock for `std`, and the console stamps lines itself.
pub fn subscriber<W>(directive: Option<&str>, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(writer)
        .finish()
}

/// Install the global subscriber. Only the first call has any effect.
pub fn init<W>(directive: Option<&str>, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    INIT.call_once(|| {
        // Another global subscriber already owns the process; keep it.
        let _ = tracing::subscriber::set_global_default(subscriber(directive, writer));
    });
}
