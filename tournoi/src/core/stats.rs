//! Read-only aggregation over the draw state.

use std::collections::BTreeMap;

use crate::core::types::{DrawState, MatchType};

/// Tournament statistics shown by the menu and `tournoi stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_matches: usize,
    /// Every match type is present, with zero when never drawn.
    pub counts_by_type: BTreeMap<MatchType, usize>,
    pub regions_used: usize,
    pub cities_used: usize,
}

pub fn summarize(state: &DrawState) -> Summary {
    let mut counts_by_type: BTreeMap<MatchType, usize> =
        MatchType::ALL.iter().map(|kind| (*kind, 0)).collect();
    for record in &state.history {
        *counts_by_type.entry(record.match_type).or_default() += 1;
    }

    Summary {
        total_matches: state.history.len(),
        counts_by_type,
        regions_used: state.used_regions.len(),
        cities_used: state.used_cities.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn empty_state_reports_zero_for_every_type() {
        let summary = summarize(&DrawState::default());
        assert_eq!(summary.total_matches, 0);
        assert_eq!(summary.counts_by_type.get(&MatchType::Kpessekou), Some(&0));
        assert_eq!(summary.counts_by_type.get(&MatchType::Zobibi), Some(&0));
        assert_eq!(summary.regions_used, 0);
        assert_eq!(summary.cities_used, 0);
    }

    #[test]
    fn counts_history_and_used_sets() {
        let mut state = DrawState::default();
        state.append(record(MatchType::Kpessekou, "Lomé", "Maritime", "Kara", "Kara"));
        state.append(record(MatchType::Zobibi, "Badou", "Plateaux", "Mango", "Savanes"));
        state.append(record(MatchType::Kpessekou, "Vogan", "Maritime", "Kandé", "Kara"));
        for (city, region) in [("Lomé", "Maritime"), ("Kara", "Kara"), ("Vogan", "Maritime")] {
            state.mark_used(city, region);
        }

        let summary = summarize(&state);
        assert_eq!(summary.total_matches, 3);
        assert_eq!(summary.counts_by_type[&MatchType::Kpessekou], 2);
        assert_eq!(summary.counts_by_type[&MatchType::Zobibi], 1);
        assert_eq!(summary.regions_used, 2);
        assert_eq!(summary.cities_used, 3);
    }

    #[test]
    fn summarize_is_idempotent() {
        let mut state = DrawState::default();
        state.append(record(MatchType::Zobibi, "Sokodé", "Centrale", "Dapaong", "Savanes"));
        state.mark_used("Sokodé", "Centrale");

        let first = summarize(&state);
        let second = summarize(&state);
        assert_eq!(first, second);
    }
}
