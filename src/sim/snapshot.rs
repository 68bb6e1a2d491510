//! Render and HUD view of a round
//!
//! A flat copy of what a renderer needs each frame. Nothing flows back.

use glam::Vec2;
use serde::Serialize;

use super::catalog::PropKind;
use super::state::{AgentId, PropShape, RoundPhase, RoundState};
use crate::consts::LEADERBOARD_SIZE;
use crate::ranking::{Standing, rank_of, standings};

/// Lightweight view of a hole for rendering
#[derive(Debug, Clone, Serialize)]
pub struct AgentView {
    pub id: AgentId,
    pub name: String,
    pub is_bot: bool,
    pub pos: Vec2,
    pub radius: f32,
    pub score: u64,
    pub ring_color: &'static str,
    pub inner_color: &'static str,
}

/// Lightweight view of a prop for rendering
#[derive(Debug, Clone, Serialize)]
pub struct PropView {
    pub id: u32,
    pub kind: PropKind,
    pub shape: PropShape,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub rotation: f32,
    pub color: &'static str,
    /// Shrink factor while falling (1 = just started)
    pub fall_scale: Option<f32>,
    /// Hole the prop is falling into, for clipping
    pub falling_to: Option<AgentId>,
}

/// Complete per-frame snapshot
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub phase: RoundPhase,
    /// Seconds left, unrounded
    pub remaining_time: f32,
    /// Seconds left, rounded up for display
    pub hud_time: u32,
    pub player_score: u64,
    pub player_rank: usize,
    /// Total number of holes
    pub hole_count: usize,
    pub leaderboard: Vec<Standing>,
    pub agents: Vec<AgentView>,
    pub props: Vec<PropView>,
}

impl FrameSnapshot {
    /// Create a snapshot from the current round state
    pub fn from_round(state: &RoundState) -> Self {
        let player = state.agents.player();

        let agents = state
            .agents
            .all()
            .iter()
            .map(|a| AgentView {
                id: a.id,
                name: a.name.clone(),
                is_bot: a.is_bot,
                pos: a.pos,
                radius: a.radius,
                score: a.score,
                ring_color: a.skin.color,
                inner_color: a.skin.inner_color,
            })
            .collect();

        let props = state
            .props
            .iter()
            .map(|p| PropView {
                id: p.id,
                kind: p.kind,
                shape: p.shape,
                pos: p.pos,
                width: p.width,
                height: p.height,
                depth: p.depth,
                rotation: p.rotation,
                color: p.color,
                fall_scale: p.fall_scale(),
                falling_to: p.falling_to(),
            })
            .collect();

        Self {
            frame: state.frame,
            phase: state.phase,
            remaining_time: state.clock.remaining(),
            hud_time: state.clock.hud_seconds(),
            player_score: player.score,
            player_rank: rank_of(&state.agents, player.id).unwrap_or(1),
            hole_count: state.agents.len(),
            leaderboard: standings(&state.agents, LEADERBOARD_SIZE),
            agents,
            props,
        }
    }

    /// Props still standing, back to front (render order)
    pub fn standing_props(&self) -> Vec<&PropView> {
        let mut standing: Vec<_> = self.props.iter().filter(|p| p.fall_scale.is_none()).collect();
        standing.sort_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
        standing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::PropState;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn snapshot_mirrors_round() {
        let mut state = RoundState::with_rng(Settings::default(), Pcg32::seed_from_u64(11)).unwrap();
        state.props[0].state = PropState::Falling { into: 0, scale: 0.5 };

        let snap = FrameSnapshot::from_round(&state);
        assert_eq!(snap.agents.len(), state.agents.len());
        assert_eq!(snap.props.len(), state.props.len());
        assert_eq!(snap.hud_time, 120);
        assert_eq!(snap.player_rank, 1);
        assert_eq!(snap.leaderboard.len(), LEADERBOARD_SIZE);
        assert_eq!(snap.props[0].fall_scale, Some(0.5));
        assert_eq!(snap.standing_props().len(), state.props.len() - 1);
    }

    #[test]
    fn standing_props_sorted_back_to_front() {
        let state = RoundState::with_rng(Settings::default(), Pcg32::seed_from_u64(12)).unwrap();
        let snap = FrameSnapshot::from_round(&state);
        let standing = snap.standing_props();
        assert!(standing.windows(2).all(|w| w[0].pos.y <= w[1].pos.y));
    }

    #[test]
    fn snapshot_serializes() {
        let state = RoundState::with_rng(Settings::default(), Pcg32::seed_from_u64(13)).unwrap();
        let json = serde_json::to_string(&FrameSnapshot::from_round(&state)).unwrap();
        assert!(json.contains("\"leaderboard\""));
    }
}
