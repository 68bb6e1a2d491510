//! Player input translation
//!
//! The host captures raw key and pointer events; each frame it hands over a
//! [`FrameInput`] and gets back the player's displacement.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Directional keys currently held (WASD or arrows, merged by the host)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Union of held directions in {-1, 0, 1}², screen axes (y down)
    pub fn axis(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v
    }
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub keys: HeldKeys,
    /// Pointer position relative to the viewport center
    pub pointer: Vec2,
    /// Pointer moved since the previous frame
    pub pointer_moved: bool,
    /// Re-initialize the round before simulating this frame
    pub restart: bool,
}

/// Which device drives the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    Pointer,
    Keyboard,
}

/// Remembers the last-used device between frames
#[derive(Debug, Clone, Default)]
pub struct InputTranslator {
    mode: InputMode,
}

impl InputTranslator {
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Player displacement for this frame (before clamping to the map)
    pub fn movement(&mut self, input: &FrameInput) -> Vec2 {
        if input.pointer_moved {
            self.mode = InputMode::Pointer;
        }

        // Opposite keys cancel out and leave the mode alone
        let axis = input.keys.axis();
        if axis != Vec2::ZERO {
            self.mode = InputMode::Keyboard;
            return axis.normalize() * MAX_VELOCITY;
        }

        match self.mode {
            InputMode::Keyboard => Vec2::ZERO,
            InputMode::Pointer => {
                if input.pointer.length() > POINTER_DEAD_ZONE {
                    input.pointer.normalize() * MAX_VELOCITY
                } else {
                    Vec2::ZERO
                }
            }
        }
    }
}
