//! End-to-end round scenarios

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use hole_arena::Settings;
use hole_arena::consts::*;
use hole_arena::sim::{
    FrameInput, GameEvent, Prop, PropKind, PropShape, RoundPhase, RoundState, tick,
};

const FRAME_MS: f32 = 1000.0 / 60.0;

fn round(bot_count: usize, seed: u64) -> RoundState {
    let settings = Settings {
        bot_count,
        ..Default::default()
    };
    RoundState::with_rng(settings, Pcg32::seed_from_u64(seed)).expect("valid settings")
}

#[test]
fn prop_under_hole_is_swallowed_for_its_points() {
    let mut state = round(0, 1);
    let under = state.agents.player().pos;
    state.props = vec![Prop::new(1, PropKind::Tree, PropShape::Circle, under, 10.0)];
    assert_eq!(state.props[0].points, 20);

    let mut absorbed = Vec::new();
    for _ in 0..20 {
        absorbed.extend(
            tick(&mut state, &FrameInput::default(), FRAME_MS)
                .into_iter()
                .filter(|e| matches!(e, GameEvent::PropAbsorbed { .. })),
        );
    }

    assert!(state.props.is_empty());
    assert_eq!(state.agents.player().score, 20);
    assert_eq!(absorbed.len(), 1);
    assert!(state.agents.player().radius > PLAYER_START_RADIUS);
}

#[test]
fn round_ends_once_after_its_duration() {
    let mut state = round(7, 2);
    assert_eq!(state.clock.remaining(), 120.0);

    // 241 half-second frames = 120.5 s
    let mut ended = 0;
    for _ in 0..241 {
        for event in tick(&mut state, &FrameInput::default(), 500.0) {
            if let GameEvent::RoundEnded(result) = event {
                ended += 1;
                assert_eq!(result.score, state.agents.player().score);
                assert!(result.rank >= 1 && result.rank <= state.agents.len());
            }
        }
    }

    assert_eq!(ended, 1);
    assert_eq!(state.clock.remaining(), 0.0);
    assert_eq!(state.phase, RoundPhase::Ended);
    assert!(state.result.is_some());
}

#[test]
fn round_ends_once_at_display_rate() {
    let mut state = round(3, 3);
    let frames = (120.5 * 60.0) as usize;
    let ended: usize = (0..frames)
        .map(|_| {
            tick(&mut state, &FrameInput::default(), FRAME_MS)
                .iter()
                .filter(|e| matches!(e, GameEvent::RoundEnded(_)))
                .count()
        })
        .sum();
    assert_eq!(ended, 1);
    assert_eq!(state.clock.remaining(), 0.0);
}

#[test]
fn bigger_hole_swallows_overlapping_rival() {
    let mut state = round(1, 4);
    state.props.clear();

    {
        let holes = state.agents.all_mut();
        holes[0].pos = Vec2::new(100.0, 100.0);
        holes[0].radius = 40.0;
        holes[0].score = 10;
        holes[1].pos = Vec2::new(105.0, 100.0);
        holes[1].radius = 29.0;
        holes[1].score = 101;
    }

    let events = tick(&mut state, &FrameInput::default(), FRAME_MS);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::AgentEliminated { eater: 0, victim: 1, points: 250 }
    )));

    let eater = state.agents.player();
    let victim = &state.agents.bots()[0];
    assert_eq!(eater.score, 10 + 50 + 200);
    assert_eq!(eater.radius, 45.0);
    assert_eq!(victim.score, 0);
    assert_eq!(victim.radius, PLAYER_START_RADIUS);
    assert!(victim.pos.distance(eater.pos) >= RESPAWN_MIN_DISTANCE);
}

#[test]
fn long_round_keeps_invariants() {
    let mut state = round(7, 5);
    let input = FrameInput {
        pointer: Vec2::new(250.0, -90.0),
        pointer_moved: true,
        ..Default::default()
    };

    let mut prop_count = state.props.len();
    for _ in 0..2_000 {
        tick(&mut state, &input, FRAME_MS);

        // Props are only ever removed
        assert!(state.props.len() <= prop_count);
        prop_count = state.props.len();

        for agent in state.agents.all() {
            assert!(agent.radius >= PLAYER_START_RADIUS);
            assert!(agent.pos.x >= agent.radius && agent.pos.x <= state.map_size.x - agent.radius);
            assert!(agent.pos.y >= agent.radius && agent.pos.y <= state.map_size.y - agent.radius);
        }
        for prop in &state.props {
            if let Some(id) = prop.falling_to() {
                assert!(state.agents.get(id).is_some());
                assert!(prop.fall_scale().is_some_and(|s| s > 0.0));
            }
        }
    }
}

#[test]
fn every_theme_builds_a_playable_round() {
    for theme in hole_arena::sim::Theme::ALL {
        let settings = Settings {
            theme,
            ..Default::default()
        };
        let mut state = RoundState::with_rng(settings, Pcg32::seed_from_u64(6)).unwrap();
        assert!(!state.props.is_empty(), "{:?} map is empty", theme);
        for _ in 0..60 {
            tick(&mut state, &FrameInput::default(), FRAME_MS);
        }
        assert_eq!(state.frame, 60);
    }
}

#[test]
fn small_map_respawn_terminates() {
    let settings = Settings {
        map_width: 300.0,
        map_height: 300.0,
        bot_count: 1,
        ..Default::default()
    };
    let mut state = RoundState::with_rng(settings, Pcg32::seed_from_u64(7)).unwrap();
    state.props.clear();
    {
        let holes = state.agents.all_mut();
        holes[0].pos = Vec2::new(150.0, 150.0);
        holes[0].radius = 60.0;
        holes[1].pos = Vec2::new(150.0, 150.0);
    }

    let events = tick(&mut state, &FrameInput::default(), FRAME_MS);
    assert!(events.iter().any(|e| matches!(e, GameEvent::AgentEliminated { .. })));
    let victim = &state.agents.bots()[0];
    assert!(victim.pos.x >= PLAYER_START_RADIUS && victim.pos.x <= 300.0 - PLAYER_START_RADIUS);
}

#[test]
fn smallest_map_keeps_hole_inside() {
    let side = 2.0 * PLAYER_START_RADIUS;
    let settings = Settings {
        map_width: side,
        map_height: side,
        bot_count: 0,
        ..Default::default()
    };
    let mut state = RoundState::with_rng(settings, Pcg32::seed_from_u64(8)).unwrap();
    state.props.clear();
    let input = FrameInput {
        pointer: Vec2::new(-200.0, 150.0),
        pointer_moved: true,
        ..Default::default()
    };

    for _ in 0..10 {
        tick(&mut state, &input, FRAME_MS);
        let player = state.agents.player();
        assert!(player.pos.x >= player.radius && player.pos.x <= side - player.radius);
        assert!(player.pos.y >= player.radius && player.pos.y <= side - player.radius);
    }
}

#[test]
fn map_narrower_than_a_hole_is_rejected() {
    let settings = Settings {
        map_width: 40.0,
        map_height: 40.0,
        bot_count: 0,
        ..Default::default()
    };
    assert!(matches!(
        RoundState::with_rng(settings, Pcg32::seed_from_u64(9)),
        Err(hole_arena::ConfigError::InvalidMapSize { .. })
    ));
}
