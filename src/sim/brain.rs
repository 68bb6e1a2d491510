//! Bot wandering
//!
//! Bots drift between random map points. They don't look at props or other
//! holes; anything they run into is handled by the absorption pass.

use glam::Vec2;
use rand::Rng;

use super::state::{Agent, random_point};
use crate::consts::*;

/// Whether `pos` is close enough to `target` to pick a new one
#[inline]
pub fn arrived(pos: Vec2, target: Vec2) -> bool {
    let d = (pos - target).abs();
    d.x < BOT_ARRIVE_TOLERANCE && d.y < BOT_ARRIVE_TOLERANCE
}

/// This frame's movement for a bot, retargeting first if needed
pub fn steer<R: Rng>(bot: &mut Agent, map_size: Vec2, rng: &mut R) -> Vec2 {
    let target = match bot.target {
        Some(target) if !arrived(bot.pos, target) => target,
        _ => {
            let target = random_point(rng, map_size, 0.0);
            bot.target = Some(target);
            target
        }
    };

    let to_target = target - bot.pos;
    // Sitting exactly on a fresh target: heading is undefined, stay put
    to_target.normalize_or_zero() * BOT_VELOCITY
}
