//! Diagnostic logging setup.

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Builds the fmt subscriber used by the binary, writing to `writer`.
///
/// Only `WARN` and `ERROR` events are kept.
pub fn subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Installs the subscriber globally on stderr.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = tracing::subscriber::set_global_default(subscriber(std::io::stderr));
}
