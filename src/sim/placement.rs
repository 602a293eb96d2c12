//! Target placement by rejection sampling
//!
//! Candidates are drawn uniformly inside the placement area and kept only if
//! they are at least `min_distance` away from every target placed so far.
//! The production generator retries forever: for the arena sizes this game
//! uses a rejection streak long enough to matter is vanishingly unlikely.

use std::fmt;

use glam::IVec2;
use rand::Rng;

use super::state::Target;
use crate::consts::*;

/// Axis-aligned rectangle targets are placed in (end bounds exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementArea {
    min: IVec2,
    max: IVec2,
}

impl PlacementArea {
    pub fn new(min: IVec2, max: IVec2) -> Result<Self, PlacementError> {
        if max.x <= min.x || max.y <= min.y {
            return Err(PlacementError::EmptyArea { min, max });
        }
        Ok(Self { min, max })
    }

    /// The arena region pigs live in
    pub fn pigs() -> Self {
        Self {
            min: IVec2::new(PIGS_AREA_X_START, PIGS_AREA_Y_START),
            max: IVec2::new(PIGS_AREA_X_END, PIGS_AREA_Y_END),
        }
    }

    pub fn min(&self) -> IVec2 {
        self.min
    }

    pub fn max(&self) -> IVec2 {
        self.max
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x >= self.min.x && pos.x < self.max.x && pos.y >= self.min.y && pos.y < self.max.y
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> IVec2 {
        IVec2::new(
            rng.random_range(self.min.x..self.max.x),
            rng.random_range(self.min.y..self.max.y),
        )
    }
}

/// Why placement could not produce a layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Area has zero width or height
    EmptyArea { min: IVec2, max: IVec2 },
    /// Attempt cap hit before every target found a spot
    Exhausted { placed: usize, attempts: u64 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::EmptyArea { min, max } => {
                write!(f, "placement area {min}..{max} is empty")
            }
            PlacementError::Exhausted { placed, attempts } => {
                write!(f, "gave up after {attempts} attempts with {placed} targets placed")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// True if `candidate` keeps at least `min_distance` from every accepted target
#[inline]
pub fn is_clear_of(candidate: IVec2, placed: &[Target], min_distance: i32) -> bool {
    // Squared in i64: i32 overflows from 46341 up
    let min_sq = i64::from(min_distance).pow(2);
    placed
        .iter()
        .all(|t| (t.pos.as_i64vec2() - candidate.as_i64vec2()).length_squared() >= min_sq)
}

/// Place `count` visible targets, retrying each candidate until it fits
pub fn place_targets<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    area: PlacementArea,
    min_distance: i32,
) -> Vec<Target> {
    let mut targets = Vec::with_capacity(count);
    while targets.len() < count {
        let candidate = area.sample(rng);
        if is_clear_of(candidate, &targets, min_distance) {
            targets.push(Target::new(candidate));
        } else {
            log::trace!("Rejected target candidate {candidate}");
        }
    }
    targets
}

/// Same draws as [`place_targets`], but gives up after `max_attempts` candidates
pub fn place_targets_capped<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    area: PlacementArea,
    min_distance: i32,
    max_attempts: u64,
) -> Result<Vec<Target>, PlacementError> {
    let mut targets = Vec::with_capacity(count);
    let mut attempts = 0u64;
    while targets.len() < count {
        if attempts >= max_attempts {
            return Err(PlacementError::Exhausted {
                placed: targets.len(),
                attempts,
            });
        }
        attempts += 1;
        let candidate = area.sample(rng);
        if is_clear_of(candidate, &targets, min_distance) {
            targets.push(Target::new(candidate));
        }
    }
    log::debug!("Placed {} targets in {} attempts", targets.len(), attempts);
    Ok(targets)
}
