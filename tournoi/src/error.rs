//! Typed errors for the pure draw core.
//!
//! Persistence and journal failures are not represented here: they surface as
//! `anyhow` errors from [`crate::io`] and terminate the program.

/// Errors raised by the selection engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// No city is left once the excluded region is removed, even after reset.
    #[error("no city available for selection (excluded region: {})", .exclude_region.as_deref().unwrap_or("none"))]
    NoCandidate { exclude_region: Option<String> },

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("both regions are '{0}'; a Zobibi draw needs two distinct regions")]
    SameRegion(String),
}

/// Operator input that cannot be turned into a command.
///
/// Always recovered by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is out of range (1-{max})")]
    OutOfRange { value: i64, max: usize },

    #[error("the two regions must be different")]
    DuplicateRegion,

    #[error("unknown region '{0}'")]
    UnknownRegion(String),
}
