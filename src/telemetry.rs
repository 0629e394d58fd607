use anyhow::Context;

use tracing::{subscriber::set_global_default, Subscriber};

use tracing_log::LogTracer;

use tracing_subscriber::fmt::{self, format::FmtSpan, MakeWriter};
use tracing_subscriber::EnvFilter;

/// Filter taken from `RUST_LOG` when set, otherwise from the configured directives
fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Build the formatting subscriber used by the service.
/// Spans are reported when opened and closed so request and report timings show up in the log.
pub fn create_subscriber<Sink>(
    default_directives: &str,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt::fmt()
        .with_env_filter(env_filter(default_directives))
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_target(false)
        .with_thread_ids(true)
        .with_writer(sink)
        .finish()
}

/// Install `subscriber` globally, forwarding `log` records (sqlx, actix) to it
pub fn set_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to forward log records")?;

    set_global_default(subscriber).context("Failed to install the tracing subscriber")
}
