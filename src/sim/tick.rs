//! Per-frame simulation step
//!
//! One call per display frame. Movement uses fixed per-frame magnitudes and
//! ignores `dt`; only the round clock is scaled by elapsed time, so game speed
//! follows the host's frame rate.

use super::absorption::{resolve_eliminations, update_props};
use super::brain;
use super::input::FrameInput;
use super::state::{GameEvent, RoundPhase, RoundState};
use crate::ranking::RoundResult;

/// Advance the round by one frame, `dt_ms` milliseconds after the previous one
pub fn tick(state: &mut RoundState, input: &FrameInput, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.restart();
        events.push(GameEvent::RoundRestarted);
    }

    // Nothing moves once the round is over
    if state.phase == RoundPhase::Ended {
        return events;
    }

    state.frame += 1;
    let map_size = state.map_size;

    // 1. Player
    let delta = state.input.movement(input);
    state.agents.player_mut().displace(delta, map_size);

    // 2. Bots
    for bot in state.agents.bots_mut() {
        let delta = brain::steer(bot, map_size, &mut state.rng);
        bot.displace(delta, map_size);
    }

    // 3. Props: drift, fall, absorb
    update_props(&mut state.props, &mut state.agents, map_size, &mut state.rng, &mut events);

    // 4. Holes eating holes
    resolve_eliminations(&mut state.agents, map_size, &mut state.rng, &mut events);

    // 5. Clock
    if state.clock.advance(dt_ms.max(0.0) / 1000.0) {
        let result = RoundResult::from_agents(&state.agents);
        log::info!(
            "Round over: score {}, rank {}/{}, winner {}",
            result.score,
            result.rank,
            state.agents.len(),
            result.winner
        );
        state.phase = RoundPhase::Ended;
        state.result = Some(result.clone());
        events.push(GameEvent::RoundEnded(result));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::input::HeldKeys;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn round(bot_count: usize, seed: u64) -> RoundState {
        let settings = Settings {
            bot_count,
            ..Default::default()
        };
        RoundState::with_rng(settings, Pcg32::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn player_moves_with_keys() {
        let mut state = round(0, 1);
        state.props.clear();
        let input = FrameInput {
            keys: HeldKeys {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };
        tick(&mut state, &input, 16.0);
        assert_eq!(state.agents.player().pos, Vec2::new(1506.0, 1500.0));
        assert_eq!(state.agents.player().velocity, Vec2::new(MAX_VELOCITY, 0.0));
    }

    #[test]
    fn movement_ignores_frame_time() {
        let mut a = round(0, 2);
        let mut b = round(0, 2);
        a.props.clear();
        b.props.clear();
        let input = FrameInput {
            pointer: Vec2::new(0.0, -100.0),
            pointer_moved: true,
            ..Default::default()
        };
        tick(&mut a, &input, 8.0);
        tick(&mut b, &input, 33.0);
        assert_eq!(a.agents.player().pos, b.agents.player().pos);
        assert!(a.clock.remaining() > b.clock.remaining());
    }

    #[test]
    fn player_clamped_at_edge() {
        let mut state = round(0, 3);
        state.props.clear();
        state.agents.player_mut().pos = Vec2::new(32.0, 1500.0);
        let input = FrameInput {
            keys: HeldKeys {
                left: true,
                ..Default::default()
            },
            ..Default::default()
        };
        tick(&mut state, &input, 16.0);
        assert_eq!(state.agents.player().pos.x, PLAYER_START_RADIUS);
    }

    #[test]
    fn ended_round_is_frozen() {
        let mut state = round(3, 4);
        let events = tick(&mut state, &FrameInput::default(), 121_000.0);
        assert!(events.iter().any(|e| matches!(e, GameEvent::RoundEnded(_))));
        assert!(state.is_ended());

        let agents_before: Vec<_> = state.agents.all().iter().map(|a| (a.pos, a.radius, a.score)).collect();
        let props_before: Vec<_> = state.props.iter().map(|p| (p.pos, p.state)).collect();

        for _ in 0..10 {
            let events = tick(&mut state, &FrameInput::default(), 16.0);
            assert!(events.is_empty());
        }

        let agents_after: Vec<_> = state.agents.all().iter().map(|a| (a.pos, a.radius, a.score)).collect();
        let props_after: Vec<_> = state.props.iter().map(|p| (p.pos, p.state)).collect();
        assert_eq!(agents_before, agents_after);
        assert_eq!(props_before, props_after);
        assert_eq!(state.clock.remaining(), 0.0);
    }

    #[test]
    fn restart_reopens_ended_round() {
        let mut state = round(2, 5);
        tick(&mut state, &FrameInput::default(), 200_000.0);
        assert!(state.is_ended());

        let input = FrameInput {
            restart: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, 16.0);
        assert_eq!(events.first(), Some(&GameEvent::RoundRestarted));
        assert!(!state.is_ended());
        assert!(state.result.is_none());
        assert!(state.clock.remaining() < state.settings.round_time);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn falling_props_point_at_live_holes() {
        let mut state = round(7, 6);
        for _ in 0..300 {
            tick(&mut state, &FrameInput::default(), 16.0);
            for prop in &state.props {
                if let Some(id) = prop.falling_to() {
                    assert!(state.agents.get(id).is_some());
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn holes_stay_on_map(seed in any::<u64>(), px in -400.0f32..400.0, py in -400.0f32..400.0) {
            let mut state = round(7, seed);
            let input = FrameInput { pointer: Vec2::new(px, py), pointer_moved: true, ..Default::default() };
            for _ in 0..120 {
                tick(&mut state, &input, 16.0);
                for agent in state.agents.all() {
                    prop_assert!(agent.radius >= PLAYER_START_RADIUS);
                    prop_assert!(agent.pos.x >= agent.radius && agent.pos.x <= state.map_size.x - agent.radius);
                    prop_assert!(agent.pos.y >= agent.radius && agent.pos.y <= state.map_size.y - agent.radius);
                }
            }
        }
    }
}
