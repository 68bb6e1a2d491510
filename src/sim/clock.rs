//! Round clock
//!
//! The only time-scaled quantity in the simulation: movement is per frame,
//! the clock follows wall time.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationClock {
    duration: f32,
    remaining: f32,
}

impl SimulationClock {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns true only on the call that runs the clock out; later calls
    /// leave it clamped at zero and return false.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.is_expired() {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            return true;
        }
        false
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn elapsed(&self) -> f32 {
        self.duration - self.remaining
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Whole seconds left, rounded up for the HUD
    pub fn hud_seconds(&self) -> u32 {
        self.remaining.ceil() as u32
    }
}
