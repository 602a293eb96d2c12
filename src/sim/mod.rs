//! Simulation module
//!
//! All gameplay logic lives here. No rendering, threading or platform
//! dependencies:
//! - Seeded RNG only
//! - State is mutated only through the aim controller and `dispatch`

pub mod aim;
pub mod placement;
pub mod state;
pub mod tick;

pub use aim::AimState;
pub use placement::{PlacementArea, PlacementError, place_targets, place_targets_capped};
pub use state::{GamePhase, GameState, Layout, Projectile, Snapshot, Target};
pub use tick::{Dispatch, InputEvent, InputKey, InputKind, accepts, dispatch};
