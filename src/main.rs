//! Conquest bot: a territory-conquest player for the Warlight line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr, filtered through `RUST_LOG` (default `warn`).

use std::io::{self, BufRead};

use conquest_bot::engine::Engine;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Runs the main protocol loop until stdin closes.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        if let Err(e) = engine.handle_line(&line, &mut out) {
            error!(error = %e, "failed to write response");
            break;
        }
    }
}
