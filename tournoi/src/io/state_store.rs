//! Draw state storage (`config_tournoi.json`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::geography::Geography;
use crate::core::types::DrawState;

/// Load draw state from disk.
///
/// Never fails: a missing, unreadable or malformed file yields an empty state.
/// Used names the geography does not know are dropped.
pub fn load_state(path: &Path, geography: &Geography) -> DrawState {
    debug!(path = %path.display(), "loading draw state");
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            if path.exists() {
                warn!(path = %path.display(), error = %err, "state file unreadable, starting fresh");
            } else {
                debug!(path = %path.display(), "no state file, starting fresh");
            }
            return DrawState::default();
        }
    };

    let mut state: DrawState = match serde_json::from_str(&contents) {
        Ok(state) => state,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "state file malformed, starting fresh");
            return DrawState::default();
        }
    };

    let dropped = state.retain_known(geography);
    if dropped > 0 {
        warn!(dropped, "ignored unknown cities/regions in state file");
    }
    debug!(
        matches = state.history.len(),
        used_cities = state.used_cities.len(),
        "draw state loaded"
    );
    state
}

/// Atomically write draw state to disk (temp file + rename).
///
/// The whole document is rewritten; place names are kept as UTF-8.
pub fn save_state(path: &Path, state: &DrawState) -> Result<()> {
    debug!(path = %path.display(), matches = state.history.len(), "writing draw state");
    let mut buf = serde_json::to_string_pretty(state).context("serialize draw state")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp state {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            warn!(path = %tmp_path.display(), error = %cleanup, "could not remove temp state");
        }
        return Err(err).with_context(|| format!("replace state {}", path.display()));
    }
    Ok(())
}
