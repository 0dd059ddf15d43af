//! Tournament configuration stored in `tournoi.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "tournoi.toml";
pub const DEFAULT_STATE_PATH: &str = "config_tournoi.json";
pub const DEFAULT_JOURNAL_PATH: &str = "journal_tournoi.log";

/// Tournament configuration (TOML).
///
/// The file is optional. Missing fields default to the historical file names
/// in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TournamentConfig {
    /// Persisted draw state (history + used cities/regions).
    pub state_path: PathBuf,

    /// Append-only audit journal.
    pub journal_path: PathBuf,

    /// Fixed RNG seed for reproducible draws. Unset means OS entropy.
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            journal_path: PathBuf::from(DEFAULT_JOURNAL_PATH),
            seed: None,
        }
    }
}

/// Values given on the command line; each one wins over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub state_path: Option<PathBuf>,
    pub journal_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl TournamentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.state_path.as_os_str().is_empty() {
            return Err(anyhow!("state_path must not be empty"));
        }
        if self.journal_path.as_os_str().is_empty() {
            return Err(anyhow!("journal_path must not be empty"));
        }
        if self.state_path == self.journal_path {
            return Err(anyhow!("state_path and journal_path must differ"));
        }
        Ok(())
    }

    pub fn apply(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(path) = &overrides.state_path {
            self.state_path = path.clone();
        }
        if let Some(path) = &overrides.journal_path {
            self.journal_path = path.clone();
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        self.validate()?;
        Ok(self)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TournamentConfig::default()`.
pub fn load_config(path: &Path) -> Result<TournamentConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        let cfg = TournamentConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TournamentConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}
