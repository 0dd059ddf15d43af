//! Deterministic, pure logic shared by the draw commands.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and take randomness through [`selection::Chooser`], so the
//! same inputs always produce the same outputs in tests.

pub mod geography;
pub mod menu;
pub mod selection;
pub mod stats;
pub mod types;
