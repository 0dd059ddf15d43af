//! Shared deterministic types for the draw core.
//!
//! These types define the persisted document as well as the values passed
//! between the selection engine and the orchestration layer. Serialized field
//! names are part of the on-disk contract.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::geography::Geography;

/// ISO-8601 local timestamp stored in [`MatchRecord::timestamp`].
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Kind of playoff draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Two cities from two unconstrained, distinct regions.
    Kpessekou,
    /// Operator chooses both regions, cities are drawn under constraints.
    Zobibi,
}

impl MatchType {
    pub const ALL: [MatchType; 2] = [MatchType::Kpessekou, MatchType::Zobibi];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Kpessekou => "Kpessekou",
            MatchType::Zobibi => "Zobibi",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single city chosen by the selection engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub city: String,
    pub region: String,
    /// True when the pool was exhausted and `used_cities` was cleared first.
    pub reset: bool,
}

/// Two host cities produced by one draw.
///
/// `region1`/`region2` are the regions recorded for the match. For Zobibi
/// draws these are the operator's choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawPair {
    pub match_type: MatchType,
    pub city1: String,
    pub region1: String,
    pub city2: String,
    pub region2: String,
    /// True when either pick triggered an exhaustion reset.
    pub reset: bool,
}

/// One drawn match, appended to [`DrawState::history`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "type")]
    pub match_type: MatchType,
    #[serde(alias = "date")]
    pub timestamp: String,
    #[serde(alias = "ville1")]
    pub city1: String,
    pub region1: String,
    #[serde(alias = "ville2")]
    pub city2: String,
    pub region2: String,
}

impl MatchRecord {
    pub fn from_pair(pair: &DrawPair, at: NaiveDateTime) -> Self {
        Self {
            match_type: pair.match_type,
            timestamp: at.format(RECORD_TIMESTAMP_FORMAT).to_string(),
            city1: pair.city1.clone(),
            region1: pair.region1.clone(),
            city2: pair.city2.clone(),
            region2: pair.region2.clone(),
        }
    }
}

/// Persisted draw state (`config_tournoi.json`).
///
/// Sets serialize as sorted lists so the document is stable across runs.
/// Legacy keys written by the first version of the tool are accepted on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawState {
    #[serde(rename = "history", alias = "historique_matchs")]
    pub history: Vec<MatchRecord>,
    #[serde(rename = "usedCities", alias = "villes_utilisees")]
    pub used_cities: BTreeSet<String>,
    #[serde(rename = "usedRegions", alias = "regions_utilisees")]
    pub used_regions: BTreeSet<String>,
}

impl DrawState {
    pub fn mark_used(&mut self, city: &str, region: &str) {
        self.used_cities.insert(city.to_string());
        self.used_regions.insert(region.to_string());
    }

    pub fn append(&mut self, record: MatchRecord) {
        self.history.push(record);
    }

    /// Drop used city/region names the geography does not know.
    ///
    /// Returns the number of entries removed.
    pub fn retain_known(&mut self, geography: &Geography) -> usize {
        let before = self.used_cities.len() + self.used_regions.len();
        self.used_cities.retain(|city| geography.is_known_city(city));
        self.used_regions
            .retain(|region| geography.region(region).is_some());
        before - (self.used_cities.len() + self.used_regions.len())
    }
}
