use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to a file; used while the full-screen view owns the terminal.
    File(PathBuf),
    Discard,
}

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `SCROLL_ASSIST_LOG`, then `RUST_LOG`, then the
/// verbosity flag.
pub fn init_logging(verbose: bool, no_color: bool, target: &LogTarget) {
    let filter = std::env::var("SCROLL_ASSIST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    match target {
        LogTarget::Stderr => install(filter, !no_color, std::io::stderr),
        LogTarget::File(path) => {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => install(filter, false, Mutex::new(file)),
                Err(err) => {
                    eprintln!("Failed to open log file '{}': {}", path.display(), err);
                    install(filter, false, std::io::sink);
                }
            }
        }
        LogTarget::Discard => install(filter, false, std::io::sink),
    }
}

fn install<W>(filter: EnvFilter, ansi: bool, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::{LogTarget, init_logging};

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false, false, &LogTarget::Discard);
        init_logging(false, true, &LogTarget::Stderr);
    }
}
