//! Stable exit codes for tournament CLI commands.

use crate::error::DrawError;

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid arguments/config, or the state file or journal could not be written.
pub const INVALID: i32 = 1;
/// A one-shot draw found no candidate city: the geography leaves nothing to
/// pick even after the used cities are reset.
pub const NO_CANDIDATE: i32 = 2;

/// Exit code for a failed command.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DrawError>() {
        Some(DrawError::NoCandidate { .. }) => NO_CANDIDATE,
        _ => INVALID,
    }
}
