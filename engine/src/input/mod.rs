//! Input Module
//!
//! Platform-agnostic input handling for keyboard and pointer look.
//! The windowing layer translates its native events into [`KeyCode`]s and
//! relative pointer deltas; everything downstream reads this state.

pub mod keyboard;
pub mod mouse_state;

pub use keyboard::{KeyCode, MovementKeys};
pub use mouse_state::PointerLook;

/// Combined input state sampled by the frame loop.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Held movement keys
    pub movement: MovementKeys,
    /// Fire input (space) currently held
    pub fire: bool,
    /// Quit requested (escape observed pressed)
    pub quit_requested: bool,
    /// Accumulated pointer look delta
    pub look: PointerLook,
}

impl InputState {
    /// Create a new input state with nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key maps to a game action.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if self.movement.handle_key(key, pressed) {
            return true;
        }
        match key {
            KeyCode::Space => {
                self.fire = pressed;
                true
            }
            KeyCode::Escape => {
                if pressed {
                    self.quit_requested = true;
                }
                true
            }
            _ => false,
        }
    }

    /// Add a relative pointer motion sample.
    pub fn accumulate_look(&mut self, dx: f32, dy: f32) {
        self.look.accumulate(dx, dy);
    }

    /// Take this frame's pointer delta, resetting the accumulator.
    pub fn consume_look(&mut self) -> (f32, f32) {
        self.look.consume()
    }

    /// Release every held key (e.g. on focus loss).
    pub fn clear(&mut self) {
        self.movement.reset();
        self.fire = false;
    }
}
