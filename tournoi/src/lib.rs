//! Playoff city draw for an amateur football tournament.
//!
//! Each draw picks two host cities from Togo's regions, never repeating a city
//! until every candidate has been used. The crate keeps the same split between
//! pure logic and side effects throughout:
//!
//! - **[`core`]**: Pure, deterministic logic (geography, selection engine,
//!   statistics, menu parsing). Randomness is injected, so everything here is
//!   testable in isolation.
//! - **[`io`]**: Side-effecting operations (state file, audit journal, config,
//!   console).
//!
//! Orchestration modules ([`draw`], [`session`]) coordinate core logic with I/O
//! to implement the CLI commands.

pub mod core;
pub mod draw;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
