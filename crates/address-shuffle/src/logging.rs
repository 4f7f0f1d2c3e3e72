//! Log subscriber construction.
//!
//! The binary builds one subscriber at start-up and installs it only for the
//! scope of the run with [`tracing::subscriber::with_default`]. Nothing is
//! initialised globally, so tests can inject a subscriber of their own.
//! Events carry a timestamp and a level; the filter is fixed at `INFO` and
//! does not read `RUST_LOG`.

use std::io;

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Builds the subscriber used by the binary, writing to standard error.
#[must_use]
pub fn subscriber() -> impl Subscriber + Send + Sync + 'static {
    subscriber_with_writer(io::stderr)
}

/// Builds the same subscriber, writing to `make_writer` instead of stderr.
///
/// # Example
///
/// ```
/// use address_shuffle::logging::subscriber_with_writer;
///
/// let subscriber = subscriber_with_writer(std::io::sink);
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!("discarded");
/// });
/// ```
#[must_use]
pub fn subscriber_with_writer<W>(make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .finish()
}
