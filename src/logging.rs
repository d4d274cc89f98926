//! Tracing subscriber setup shared by both binaries.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to `default_directive`.
fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Log to stderr. Used by the headless simulator.
pub fn init_stderr(verbosity: u8) {
    let default_directive = if verbosity == 0 { "warn" } else { "debug" };

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to a file. The terminal UI owns stdout and stderr, so this is its only sink.
pub fn init_file(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
