//! Input signals and their mapping to player impulses

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::kinematics::accelerate;
use crate::tuning::Tuning;

/// Recognized input signals, in processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSignal {
    /// End the game
    Escape,
    /// Single-shot jump, auto-released after each tick
    Jump,
    MoveLeft,
    MoveRight,
}

impl InputSignal {
    pub const ALL: [InputSignal; 4] = [
        InputSignal::Escape,
        InputSignal::Jump,
        InputSignal::MoveLeft,
        InputSignal::MoveRight,
    ];

    /// Map a browser-style keyboard code (Esc, Space, Left, Right)
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            27 => Some(InputSignal::Escape),
            32 => Some(InputSignal::Jump),
            37 => Some(InputSignal::MoveLeft),
            39 => Some(InputSignal::MoveRight),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            InputSignal::Escape => 0,
            InputSignal::Jump => 1,
            InputSignal::MoveLeft => 2,
            InputSignal::MoveRight => 3,
        }
    }
}

/// Currently-held signals, written by the keyboard collaborator between ticks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, signal: InputSignal, held: bool) {
        self.held[signal.index()] = held;
    }

    pub fn press(&mut self, signal: InputSignal) {
        self.set(signal, true);
    }

    pub fn release(&mut self, signal: InputSignal) {
        self.set(signal, false);
    }

    pub fn is_held(&self, signal: InputSignal) -> bool {
        self.held[signal.index()]
    }

    /// Record a raw key event. Unrecognized codes are ignored (returns false).
    pub fn set_key_code(&mut self, code: u32, held: bool) -> bool {
        match InputSignal::from_key_code(code) {
            Some(signal) => {
                self.set(signal, held);
                true
            }
            None => false,
        }
    }

    /// Held signals in processing order
    pub fn held(&self) -> impl Iterator<Item = InputSignal> + '_ {
        InputSignal::ALL.into_iter().filter(|s| self.is_held(*s))
    }
}

/// What the control pass decided beyond velocity changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlOutcome {
    pub escape: bool,
    pub jumped: bool,
}

/// Apply one impulse per held signal to the player
///
/// Jump only fires when the player is grounded (vertical velocity exactly
/// zero) and is released either way.
pub fn apply_controls(player: &mut Body, input: &mut InputState, tuning: &Tuning) -> ControlOutcome {
    let mut outcome = ControlOutcome::default();
    let signals: Vec<InputSignal> = input.held().collect();

    for signal in signals {
        match signal {
            InputSignal::Escape => outcome.escape = true,
            InputSignal::Jump => {
                if player.is_grounded() {
                    let impulse = Vec2::new(player.vel.x * tuning.jump_carry, tuning.jump_impulse);
                    accelerate(player, impulse);
                    outcome.jumped = true;
                }
                input.release(InputSignal::Jump);
            }
            InputSignal::MoveLeft => accelerate(player, Vec2::new(-tuning.move_impulse, 0.0)),
            InputSignal::MoveRight => accelerate(player, Vec2::new(tuning.move_impulse, 0.0)),
        }
    }

    outcome
}
