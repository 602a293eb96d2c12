//! Input dispatch
//!
//! One input event advances the game by one step. Only presses the player
//! meant (short, long, repeat) reach the game; everything else is dropped
//! before the state is touched.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

/// Physical button that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

/// What the button did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    Press,
    Release,
    Short,
    Long,
    Repeat,
}

impl InputKind {
    /// Kinds the game reacts to
    #[inline]
    pub fn is_actionable(self) -> bool {
        matches!(self, InputKind::Short | InputKind::Long | InputKind::Repeat)
    }
}

/// A single discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub key: InputKey,
    pub kind: InputKind,
}

impl InputEvent {
    pub fn new(key: InputKey, kind: InputKind) -> Self {
        Self { key, kind }
    }

    pub fn short(key: InputKey) -> Self {
        Self::new(key, InputKind::Short)
    }
}

/// What the main loop must do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Event was filtered out; no redraw
    Ignored,
    /// Event was handled (possibly as a no-op); redraw
    Redraw,
    /// Redraw, then leave the loop
    RedrawAndExit,
}

/// Filter without touching the state, so the lock is only taken for real input
#[inline]
pub fn accepts(event: &InputEvent) -> bool {
    event.kind.is_actionable()
}

/// Apply one event to the game state
///
/// `Ok` while aiming launches into `Flying`. `Flying` is terminal: from there
/// only `Back` has an effect.
pub fn dispatch(state: &mut GameState, event: &InputEvent) -> Dispatch {
    if !accepts(event) {
        log::trace!("Ignoring {:?}", event);
        return Dispatch::Ignored;
    }

    if event.key == InputKey::Back {
        log::info!("Exit requested");
        return Dispatch::RedrawAndExit;
    }

    match state.phase {
        GamePhase::Aiming => match event.key {
            // Up lifts Red, which lowers the aim
            InputKey::Up => {
                state.decrease_angle();
            }
            InputKey::Down => {
                state.increase_angle();
            }
            InputKey::Ok => {
                state.phase = GamePhase::Flying;
                log::debug!("Launched at {} deg", state.aim.angle());
            }
            InputKey::Left | InputKey::Right | InputKey::Back => {}
        },
        // Flight is not simulated; aiming input stays disabled
        GamePhase::Flying => {}
    }

    Dispatch::Redraw
}
