//! Log output
//!
//! Logs never go to stdout, which carries only the diagnostic console. On
//! NuttX stderr is the system console, so boot faults stay visible there.

use std::io;

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Plain-text subscriber at info level writing to `make_writer`
pub fn log_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(make_writer)
        .with_target(false)
        .with_ansi(false)
        .finish()
}

/// Install the stderr subscriber for the process.
///
/// Returns false if a subscriber was already installed, which is left in place.
pub fn init_logging() -> bool {
    tracing::subscriber::set_global_default(log_subscriber(io::stderr)).is_ok()
}
