//! Test-only helpers for deterministic draws and in-memory sinks.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::core::geography::Geography;
use crate::core::selection::Chooser;
use crate::core::types::{DrawState, MatchRecord, MatchType};
use crate::io::journal::MatchRecorder;

/// Chooser returning queued indexes, then `0` once the queue is empty.
///
/// Records the pool size of every call so tests can assert pool construction.
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    queue: VecDeque<usize>,
    pool_sizes: Vec<usize>,
}

impl ScriptedChooser {
    pub fn new(indexes: Vec<usize>) -> Self {
        Self {
            queue: indexes.into(),
            pool_sizes: Vec::new(),
        }
    }

    pub fn pool_sizes(&self) -> &[usize] {
        &self.pool_sizes
    }
}

impl Chooser for ScriptedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.pool_sizes.push(len);
        self.queue.pop_front().unwrap_or(0)
    }
}

/// Recorder keeping every match in memory.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    pub records: Vec<MatchRecord>,
}

impl MatchRecorder for MemoryJournal {
    fn record(&mut self, record: &MatchRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Recorder whose destination is always unwritable.
#[derive(Debug, Default)]
pub struct FailingJournal;

impl MatchRecorder for FailingJournal {
    fn record(&mut self, _record: &MatchRecord) -> Result<()> {
        Err(anyhow!("journal destination unwritable"))
    }
}

/// Draw state whose `used_cities` holds `cities` (regions from the Togo table).
pub fn state_with_used(cities: &[&str]) -> DrawState {
    let geo = Geography::togo();
    let mut state = DrawState::default();
    for city in cities {
        state.used_cities.insert(city.to_string());
        if let Some(region) = geo.region_of(city) {
            state.used_regions.insert(region.name.clone());
        }
    }
    state
}

/// Deterministic match record with a fixed timestamp.
pub fn record(
    match_type: MatchType,
    city1: &str,
    region1: &str,
    city2: &str,
    region2: &str,
) -> MatchRecord {
    MatchRecord {
        match_type,
        timestamp: "2024-06-01T12:00:00.000000".to_string(),
        city1: city1.to_string(),
        region1: region1.to_string(),
        city2: city2.to_string(),
        region2: region2.to_string(),
    }
}

/// Temporary working directory with the default state and journal paths.
pub struct TempTournament {
    dir: TempDir,
    pub state_path: PathBuf,
    pub journal_path: PathBuf,
}

impl TempTournament {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let state_path = dir.path().join("config_tournoi.json");
        let journal_path = dir.path().join("journal_tournoi.log");
        Ok(Self {
            dir,
            state_path,
            journal_path,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn journal_lines(&self) -> Result<Vec<String>> {
        let contents = std::fs::read_to_string(&self.journal_path)
            .with_context(|| format!("read {}", self.journal_path.display()))?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}
