//! Launch angle and the geometry derived from it
//!
//! The angle is a whole number of degrees in [ANGLE_MIN, ANGLE_MAX]. Positive
//! angles aim above the horizon, which pulls Red below the pivot.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::*;
use crate::{degrees_to_radians, polar_offset};

/// Clamped launch angle plus its derived radian, tangent and pixel offset
///
/// The derived fields are only ever written by `set`, so they can never drift
/// from `angle`. Serialized as the bare angle; deserializing goes back through
/// the range check and recomputes everything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AimState {
    angle: i32,
    radians: f64,
    tangent: f64,
    offset: i32,
}

impl Default for AimState {
    fn default() -> Self {
        Self::new(ANGLE_START)
    }
}

impl AimState {
    /// Aim at `angle` degrees, clamped into range
    pub fn new(angle: i32) -> Self {
        let mut aim = Self {
            angle: 0,
            radians: 0.0,
            tangent: 0.0,
            offset: 0,
        };
        aim.set(angle.clamp(ANGLE_MIN, ANGLE_MAX));
        aim
    }

    fn set(&mut self, angle: i32) {
        self.angle = angle;
        self.radians = degrees_to_radians(angle);
        self.tangent = self.radians.tan();
        self.offset = (f64::from(RED_TO_SLINGSHOT_X) * self.tangent) as i32;
    }

    /// Step one degree up; no-op at `ANGLE_MAX`
    pub fn increase(&mut self) -> bool {
        if self.angle >= ANGLE_MAX {
            return false;
        }
        self.set(self.angle + 1);
        true
    }

    /// Step one degree down; no-op at `ANGLE_MIN`
    pub fn decrease(&mut self) -> bool {
        if self.angle <= ANGLE_MIN {
            return false;
        }
        self.set(self.angle - 1);
        true
    }

    #[inline]
    pub fn angle(&self) -> i32 {
        self.angle
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn tangent(&self) -> f64 {
        self.tangent
    }

    /// Vertical distance from the pivot to Red, truncated toward zero
    #[inline]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Red's y for this angle
    #[inline]
    pub fn projectile_y(&self) -> i32 {
        SLINGSHOT_Y + self.offset
    }

    /// Far end of the aiming line drawn from the pivot
    pub fn line_end(&self) -> IVec2 {
        polar_offset(
            IVec2::new(SLINGSHOT_X, SLINGSHOT_Y),
            AIMING_LINE_LENGTH,
            self.radians,
        )
    }
}

impl TryFrom<i32> for AimState {
    type Error = String;

    fn try_from(angle: i32) -> Result<Self, Self::Error> {
        if !(ANGLE_MIN..=ANGLE_MAX).contains(&angle) {
            return Err(format!(
                "angle {angle} outside {ANGLE_MIN}..={ANGLE_MAX}"
            ));
        }
        Ok(Self::new(angle))
    }
}

impl From<AimState> for i32 {
    fn from(aim: AimState) -> Self {
        aim.angle
    }
}

/// Aim controller operations; callers hold the session lock
impl GameState {
    pub fn increase_angle(&mut self) -> bool {
        let changed = self.aim.increase();
        if changed {
            self.sync_projectile();
        }
        changed
    }

    pub fn decrease_angle(&mut self) -> bool {
        let changed = self.aim.decrease();
        if changed {
            self.sync_projectile();
        }
        changed
    }

    fn sync_projectile(&mut self) {
        self.projectile.pos.y = self.aim.projectile_y();
        log::debug!(
            "Angle {} deg, red y {}",
            self.aim.angle(),
            self.projectile.pos.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_increase_clamps_at_max() {
        let mut state = GameState::new(1);
        assert_eq!(state.aim.angle(), 15);
        for _ in 0..40 {
            state.increase_angle();
        }
        assert_eq!(state.aim.angle(), 45);
        assert_eq!(state.projectile.pos.y, SLINGSHOT_Y + state.aim.offset());
    }

    #[test]
    fn test_decrease_at_min_is_noop() {
        let mut state = GameState::new(1);
        while state.decrease_angle() {}
        assert_eq!(state.aim.angle(), -45);

        let before = state.aim;
        let red_before = state.projectile;
        for _ in 0..10 {
            assert!(!state.decrease_angle());
        }
        assert_eq!(state.aim, before);
        assert_eq!(state.projectile, red_before);
    }

    #[test]
    fn test_new_clamps_out_of_range() {
        assert_eq!(AimState::new(90).angle(), ANGLE_MAX);
        assert_eq!(AimState::new(-90).angle(), ANGLE_MIN);
    }

    #[test]
    fn test_offset_truncates_toward_zero() {
        // 15 * tan(-15deg) = -4.019 -> -4, not -5
        let aim = AimState::new(-15);
        assert_eq!(aim.offset(), -4);
        assert_eq!(aim.projectile_y(), SLINGSHOT_Y - 4);

        let flat = AimState::new(0);
        assert_eq!(flat.offset(), 0);
        assert_eq!(flat.line_end(), IVec2::new(SLINGSHOT_X + 20, SLINGSHOT_Y));
    }

    #[test]
    fn test_line_end_points_up_for_positive_angle() {
        let aim = AimState::new(30);
        // 20 * cos(30) = 17.32, 20 * sin(30) = 10.0 (may land just under)
        let end = aim.line_end();
        assert_eq!(end.x, SLINGSHOT_X + 17);
        assert!(end.y == SLINGSHOT_Y - 10 || end.y == SLINGSHOT_Y - 9);
    }

    #[test]
    fn test_deserialize_rechecks_range() {
        let aim: AimState = serde_json::from_str("-30").unwrap();
        assert_eq!(aim, AimState::new(-30));
        assert_eq!(serde_json::to_string(&aim).unwrap(), "-30");

        assert!(serde_json::from_str::<AimState>("90").is_err());
        // Derived fields can never be supplied from outside
        let forged = r#"{"angle":90,"radians":0.0,"tangent":0.0,"offset":0}"#;
        assert!(serde_json::from_str::<AimState>(forged).is_err());
    }

    proptest! {
        #[test]
        fn prop_angle_stays_in_range(steps in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut state = GameState::new(0);
            for up in steps {
                let before = state.aim;
                let changed = if up { state.increase_angle() } else { state.decrease_angle() };
                prop_assert!((ANGLE_MIN..=ANGLE_MAX).contains(&state.aim.angle()));
                if changed {
                    prop_assert_eq!((state.aim.angle() - before.angle()).abs(), 1);
                } else {
                    prop_assert_eq!(state.aim, before);
                }
                prop_assert_eq!(state.projectile.pos.y, state.aim.projectile_y());
            }
        }

        #[test]
        fn prop_incremental_matches_fresh(steps in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut aim = AimState::default();
            for up in steps {
                if up { aim.increase(); } else { aim.decrease(); }
            }
            prop_assert_eq!(aim, AimState::new(aim.angle()));
        }
    }
}
