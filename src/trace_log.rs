//! Tracing subscriber setup for the demo binary.
//!
//! The demo runs in raw mode on the alternate screen, so log lines cannot
//! go to stdout. When a log file is configured, gesture traces go there;
//! otherwise only warnings fall through to stderr.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Initialize the global tracing subscriber. Safe to call multiple times;
/// subsequent calls are no-ops for the global subscriber.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_max_level(Level::WARN)
                .with_writer(io::stderr)
                .with_target(false)
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_the_log_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("area-select.log");
        init(Some(&path)).expect("init");
        assert!(path.exists());
        // repeated init must not fail even though the global subscriber
        // is already installed
        init(Some(&path)).expect("re-init");
    }
}
