//! `tracing` subscriber setup.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log lines should go.
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Nothing is printed; used while the terminal UI owns the screen.
    Discard,
}

/// Installs the global subscriber. `RUST_LOG` overrides `default_level`.
pub fn init(target: LogTarget<'_>, default_level: &str) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("quiz_player={default_level}")));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // try_init only fails when a global subscriber is already set.
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(io::sink).try_init(),
    };

    Ok(())
}
