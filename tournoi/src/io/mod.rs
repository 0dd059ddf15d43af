//! I/O helpers for tournament commands.

pub mod config;
pub mod console;
pub mod journal;
pub mod state_store;
