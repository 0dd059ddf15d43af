//! Diagnostic tracing for the draw tool.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: diagnostics via `RUST_LOG`, written to stderr
//!   so the menu and draw results on stdout stay clean. At the default `warn`
//!   level only trouble shows: a malformed or unreadable `config_tournoi.json`
//!   that was replaced by an empty state, unknown cities dropped on load, and
//!   draws that found no candidate.
//!
//! - **Audit journal (`io/journal`)**: one line per draw in
//!   `journal_tournoi.log`. Always written, unaffected by `RUST_LOG`.
//!
//! `RUST_LOG=tournoi=info` adds one event per drawn match and a notice each
//! time every city has been used and the pool is reset; `debug` adds state
//! file loads and saves, journal appends, and menu dispatch.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=tournoi=info tournoi kpessekou --seed 7
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
