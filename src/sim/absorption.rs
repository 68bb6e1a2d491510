//! Absorption and elimination
//!
//! Props go `Idle -> Falling -> Consumed`. A falling prop shrinks by a fixed
//! step each frame while easing toward its hole; when it vanishes the hole
//! scores its points and grows. Holes that outgrow a rival by enough swallow
//! it outright, and the victim respawns fresh somewhere far away.

use glam::Vec2;
use rand::Rng;

use super::state::{AgentDirectory, AgentId, GameEvent, Prop, PropState, random_point};
use crate::consts::*;
use crate::wrap_coordinate;

/// Whether a hole of `hole_radius` starts swallowing a prop of `prop_size`
/// whose center is `distance` away.
///
/// Both comparisons are strict.
#[inline]
pub fn absorbs(hole_radius: f32, prop_size: f32, distance: f32) -> bool {
    hole_radius > prop_size + ABSORB_SIZE_MARGIN
        && distance < hole_radius - prop_size * ABSORB_OVERLAP
}

/// Radius gained from a prop with `growth` factor by a hole of `radius`.
///
/// Inverse in `radius - PLAYER_START_RADIUS` so big holes grow slower.
#[inline]
pub fn growth_for(growth: f32, radius: f32) -> f32 {
    let raw = (growth * 5.0) / (1.0 + (radius - PLAYER_START_RADIUS) * 0.01);
    raw.max(MIN_GROWTH)
}

/// Advance every prop one frame: drift mobile props, progress falling ones,
/// start new absorptions, then drop consumed props.
pub fn update_props<R: Rng>(
    props: &mut Vec<Prop>,
    agents: &mut AgentDirectory,
    map_size: Vec2,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    for prop in props.iter_mut() {
        match prop.state {
            PropState::Consumed => {}
            PropState::Falling { into, scale } => {
                advance_fall(prop, into, scale, agents, map_size, events);
            }
            PropState::Idle => {
                if prop.velocity.is_some() {
                    drift(prop, map_size, rng);
                }
                if let Some(id) = first_absorber(prop, agents) {
                    prop.state = PropState::Falling {
                        into: id,
                        scale: 1.0,
                    };
                }
            }
        }
    }

    props.retain(|p| p.state != PropState::Consumed);
}

fn advance_fall(
    prop: &mut Prop,
    into: AgentId,
    scale: f32,
    agents: &mut AgentDirectory,
    map_size: Vec2,
    events: &mut Vec<GameEvent>,
) {
    let scale = scale - FALL_STEP;
    let Some(hole) = agents.get_mut(into) else {
        // Holes are never removed mid-round, but don't leave a prop hanging
        prop.state = PropState::Consumed;
        return;
    };

    prop.pos += (hole.pos - prop.pos) * FALL_EASE;

    if scale > 0.0 {
        prop.state = PropState::Falling { into, scale };
        return;
    }

    hole.score += u64::from(prop.points);
    let gain = growth_for(prop.growth, hole.radius);
    hole.grow(gain, map_size);
    prop.state = PropState::Consumed;
    events.push(GameEvent::PropAbsorbed {
        prop: prop.id,
        kind: prop.kind,
        agent: into,
        points: prop.points,
    });
}

/// Move a mobile prop, wrapping across map edges
fn drift<R: Rng>(prop: &mut Prop, map_size: Vec2, rng: &mut R) {
    let Some(vel) = prop.velocity.as_mut() else {
        return;
    };

    prop.pos += *vel;
    prop.pos.x = wrap_coordinate(prop.pos.x, map_size.x);
    prop.pos.y = wrap_coordinate(prop.pos.y, map_size.y);

    if prop.kind.spec().wanders && rng.random_bool(DRIFT_CHANCE) {
        vel.x = (rng.random::<f32>() - 0.5) * DRIFT_SPEED;
        vel.y = (rng.random::<f32>() - 0.5) * DRIFT_SPEED;
    }
}

/// First hole in iteration order able to swallow `prop`
fn first_absorber(prop: &Prop, agents: &AgentDirectory) -> Option<AgentId> {
    let size = prop.effective_size();
    agents
        .all()
        .iter()
        .find(|hole| absorbs(hole.radius, size, prop.pos.distance(hole.pos)))
        .map(|hole| hole.id)
}

/// Let every hole swallow every smaller overlapping rival.
///
/// Pairs are visited in order and each swallow takes effect immediately, so
/// later pairs see the updated radii and positions.
pub fn resolve_eliminations<R: Rng>(
    agents: &mut AgentDirectory,
    map_size: Vec2,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let holes = agents.all_mut();
    for i in 0..holes.len() {
        for j in 0..holes.len() {
            if i == j {
                continue;
            }
            let (eater, victim) = (&holes[i], &holes[j]);
            let overlapping = eater.pos.distance(victim.pos) < eater.radius;
            if !overlapping || eater.radius <= victim.radius + ELIMINATION_MARGIN {
                continue;
            }

            let points = victim.score / 2 + ELIMINATION_BONUS;
            let (eater_id, victim_id) = (eater.id, victim.id);

            let eater = &mut holes[i];
            eater.score += points;
            eater.grow(ELIMINATION_GROWTH, map_size);
            let eater_pos = eater.pos;

            let spawn = respawn_point(rng, eater_pos, map_size);
            holes[j].reset(spawn);

            log::debug!(
                "Hole {} swallowed hole {} (+{} points), respawned at ({:.0}, {:.0})",
                eater_id,
                victim_id,
                points,
                spawn.x,
                spawn.y
            );
            events.push(GameEvent::AgentEliminated {
                eater: eater_id,
                victim: victim_id,
                points,
            });
        }
    }
}

/// Random fresh-hole position at least `RESPAWN_MIN_DISTANCE` from `avoid`.
///
/// Gives up after `RESPAWN_MAX_ATTEMPTS` and keeps the last candidate, so a
/// map too small to satisfy the distance can't stall the frame.
pub fn respawn_point<R: Rng>(rng: &mut R, avoid: Vec2, map_size: Vec2) -> Vec2 {
    let mut candidate = random_point(rng, map_size, PLAYER_START_RADIUS);
    for _ in 1..RESPAWN_MAX_ATTEMPTS {
        if candidate.distance(avoid) >= RESPAWN_MIN_DISTANCE {
            return candidate;
        }
        candidate = random_point(rng, map_size, PLAYER_START_RADIUS);
    }
    if candidate.distance(avoid) < RESPAWN_MIN_DISTANCE {
        log::warn!(
            "No respawn point {} away from ({:.0}, {:.0}) after {} tries",
            RESPAWN_MIN_DISTANCE,
            avoid.x,
            avoid.y,
            RESPAWN_MAX_ATTEMPTS
        );
    }
    candidate
}
