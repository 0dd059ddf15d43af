//! Orchestration for a single draw.
//!
//! A draw runs the selection engine on a working copy of the state, journals
//! the match, rewrites the state file, and only then replaces the in-memory
//! state. A [`DrawError`] leaves everything untouched; journal or persistence
//! failures propagate as fatal errors.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info, instrument};

use crate::core::geography::Geography;
use crate::core::selection::{Chooser, draw_kpessekou, draw_zobibi};
use crate::core::stats::{Summary, summarize};
use crate::core::types::{DrawPair, DrawState, MatchRecord};
use crate::error::DrawError;
use crate::io::journal::MatchRecorder;
use crate::io::state_store::{load_state, save_state};

/// Loaded tournament: geography, draw state and the side-effect sinks.
pub struct Tournament<J, C> {
    geography: Geography,
    state: DrawState,
    state_path: PathBuf,
    journal: J,
    chooser: C,
}

impl<J: MatchRecorder, C: Chooser> Tournament<J, C> {
    /// Load state from `state_path` (empty state if absent or corrupt).
    pub fn open(geography: Geography, state_path: &Path, journal: J, chooser: C) -> Self {
        let state = load_state(state_path, &geography);
        Self::with_state(geography, state, state_path, journal, chooser)
    }

    pub fn with_state(
        geography: Geography,
        state: DrawState,
        state_path: &Path,
        journal: J,
        chooser: C,
    ) -> Self {
        Self {
            geography,
            state,
            state_path: state_path.to_path_buf(),
            journal,
            chooser,
        }
    }

    pub fn geography(&self) -> &Geography {
        &self.geography
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn journal(&self) -> &J {
        &self.journal
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.state)
    }

    /// Draw a Kpessekou match and persist it.
    #[instrument(skip_all)]
    pub fn play_kpessekou(&mut self) -> Result<MatchRecord> {
        let mut next = self.state.clone();
        let pair = draw_kpessekou(&self.geography, &mut next, &mut self.chooser)?;
        self.commit(next, pair)
    }

    /// Draw a Zobibi match for two operator-chosen regions and persist it.
    #[instrument(skip(self))]
    pub fn play_zobibi(&mut self, region1: &str, region2: &str) -> Result<MatchRecord> {
        let mut next = self.state.clone();
        let pair = draw_zobibi(
            &self.geography,
            &mut next,
            region1,
            region2,
            &mut self.chooser,
        )?;
        self.commit(next, pair)
    }

    fn commit(&mut self, mut next: DrawState, pair: DrawPair) -> Result<MatchRecord> {
        if pair.reset {
            info!("all cities used, pool reset");
        }
        let record = MatchRecord::from_pair(&pair, Local::now().naive_local());
        next.append(record.clone());

        self.journal.record(&record).context("journal match")?;
        save_state(&self.state_path, &next).context("save draw state")?;
        self.state = next;

        info!(
            match_type = %record.match_type,
            city1 = %record.city1,
            city2 = %record.city2,
            "match drawn"
        );
        debug!(used_cities = self.state.used_cities.len(), "state committed");
        Ok(record)
    }
}

/// True when `err` is a recoverable draw failure rather than an I/O error.
pub fn is_draw_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<DrawError>().is_some()
}
