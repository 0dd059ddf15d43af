//! Constrained random city selection.
//!
//! [`pick`] draws one city outside an optional excluded region, skipping cities
//! already used since the last reset. When nothing is left it clears
//! `used_cities` entirely (not only for the excluded region) and tries again.
//! The two draw protocols are built on top of it.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::geography::Geography;
use crate::core::types::{DrawPair, DrawState, MatchType, Pick};
use crate::error::DrawError;

/// Uniform choice over a candidate pool.
pub trait Chooser {
    /// Return an index in `0..len`. Never called with `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// [`Chooser`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngChooser<R> {
    rng: R,
}

impl<R: Rng> RngChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChooser<ChaCha8Rng> {
    /// Reproducible sequence of draws for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Chooser for RngChooser<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Pick one city outside `exclude_region` and `exclude_cities`.
///
/// Does not mark the returned city as used; the caller does. May clear
/// `state.used_cities` when the pool is exhausted.
pub fn pick<C: Chooser + ?Sized>(
    geography: &Geography,
    state: &mut DrawState,
    exclude_region: Option<&str>,
    exclude_cities: &[&str],
    chooser: &mut C,
) -> Result<Pick, DrawError> {
    let mut reset = false;
    let mut pool = candidate_pool(geography, state, exclude_region, exclude_cities);

    if pool.is_empty() {
        state.used_cities.clear();
        reset = true;
        pool = candidate_pool(geography, state, exclude_region, exclude_cities);
    }

    if pool.is_empty() {
        return Err(DrawError::NoCandidate {
            exclude_region: exclude_region.map(str::to_string),
        });
    }

    let index = chooser.choose_index(pool.len());
    let (city, region) = pool[index.min(pool.len() - 1)];
    Ok(Pick {
        city: city.to_string(),
        region: region.to_string(),
        reset,
    })
}

/// Two cities from two distinct, unconstrained regions.
pub fn draw_kpessekou<C: Chooser + ?Sized>(
    geography: &Geography,
    state: &mut DrawState,
    chooser: &mut C,
) -> Result<DrawPair, DrawError> {
    let first = pick(geography, state, None, &[], chooser)?;
    state.mark_used(&first.city, &first.region);

    let second = pick(geography, state, Some(&first.region), &[], chooser)?;
    state.mark_used(&second.city, &second.region);

    Ok(DrawPair {
        match_type: MatchType::Kpessekou,
        reset: first.reset || second.reset,
        city1: first.city,
        region1: first.region,
        city2: second.city,
        region2: second.region,
    })
}

/// Two cities for operator-chosen regions.
///
/// City 1 is drawn anywhere but `region2`, city 2 anywhere but `region1` and
/// never equal to city 1. The supplied regions are the ones recorded.
pub fn draw_zobibi<C: Chooser + ?Sized>(
    geography: &Geography,
    state: &mut DrawState,
    region1: &str,
    region2: &str,
    chooser: &mut C,
) -> Result<DrawPair, DrawError> {
    for region in [region1, region2] {
        if geography.region(region).is_none() {
            return Err(DrawError::UnknownRegion(region.to_string()));
        }
    }
    if region1 == region2 {
        return Err(DrawError::SameRegion(region1.to_string()));
    }

    let first = pick(geography, state, Some(region2), &[], chooser)?;
    let second = pick(
        geography,
        state,
        Some(region1),
        &[first.city.as_str()],
        chooser,
    )?;

    state.mark_used(&first.city, region1);
    state.mark_used(&second.city, region2);

    Ok(DrawPair {
        match_type: MatchType::Zobibi,
        reset: first.reset || second.reset,
        city1: first.city,
        region1: region1.to_string(),
        city2: second.city,
        region2: region2.to_string(),
    })
}

fn candidate_pool<'g>(
    geography: &'g Geography,
    state: &DrawState,
    exclude_region: Option<&str>,
    exclude_cities: &[&str],
) -> Vec<(&'g str, &'g str)> {
    geography
        .cities()
        .filter(|(_, region)| Some(*region) != exclude_region)
        .filter(|(city, _)| !state.used_cities.contains(*city))
        .filter(|(city, _)| !exclude_cities.contains(city))
        .collect()
}
