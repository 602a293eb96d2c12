//! Game state and core types
//!
//! A `GameState` is the single unit of mutable state in a session. It is
//! mutated by the main loop and read by the draw callback, always under the
//! session lock.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aim::AimState;
use super::placement::{PlacementArea, PlacementError, place_targets, place_targets_capped};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player adjusts the launch angle
    #[default]
    Aiming,
    /// Red has left the slingshot; aiming input is disabled
    Flying,
}

/// A pig sitting in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub pos: IVec2,
    /// Cleared once hit; hidden targets are not drawn
    pub visible: bool,
}

impl Target {
    pub fn new(pos: IVec2) -> Self {
        Self { pos, visible: true }
    }
}

/// Red, resting in the slingshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: IVec2,
}

impl Projectile {
    /// Red at its start column, pulled back to match `aim`
    pub fn at_rest(aim: &AimState) -> Self {
        Self {
            pos: IVec2::new(RED_START_X, aim.projectile_y()),
        }
    }
}

/// How a session's layout is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub target_count: usize,
    pub min_target_distance: i32,
    pub area: PlacementArea,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            target_count: PIG_COUNT,
            min_target_distance: MIN_DISTANCE_BETWEEN_PIGS,
            area: PlacementArea::pigs(),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the target layout was generated from
    pub seed: u64,
    pub phase: GamePhase,
    pub aim: AimState,
    pub projectile: Projectile,
    pub targets: Vec<Target>,
}

impl GameState {
    /// Create a new game with the default pig layout
    pub fn new(seed: u64) -> Self {
        Self::with_layout(seed, &Layout::default())
    }

    pub fn with_layout(seed: u64, layout: &Layout) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let targets = place_targets(
            &mut rng,
            layout.target_count,
            layout.area,
            layout.min_target_distance,
        );
        Self::with_targets(seed, targets)
    }

    /// Like [`GameState::with_layout`], but fails instead of retrying past `max_attempts`
    pub fn try_with_layout(
        seed: u64,
        layout: &Layout,
        max_attempts: u64,
    ) -> Result<Self, PlacementError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let targets = place_targets_capped(
            &mut rng,
            layout.target_count,
            layout.area,
            layout.min_target_distance,
            max_attempts,
        )?;
        Ok(Self::with_targets(seed, targets))
    }

    fn with_targets(seed: u64, targets: Vec<Target>) -> Self {
        let aim = AimState::new(ANGLE_START);
        Self {
            seed,
            phase: GamePhase::Aiming,
            projectile: Projectile::at_rest(&aim),
            aim,
            targets,
        }
    }

    /// Number of targets still standing
    pub fn visible_targets(&self) -> usize {
        self.targets.iter().filter(|t| t.visible).count()
    }

    /// Read-only copy of everything the renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            angle: self.aim.angle(),
            radians: self.aim.radians(),
            offset: self.aim.offset(),
            projectile: self.projectile.pos,
            targets: self.targets.clone(),
        }
    }
}

/// Frozen view of a `GameState` taken inside the critical section
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub angle: i32,
    pub radians: f64,
    pub offset: i32,
    pub projectile: IVec2,
    pub targets: Vec<Target>,
}
