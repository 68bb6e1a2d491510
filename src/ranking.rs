//! Standings and round results
//!
//! Rank is positional: holes are stable-sorted by score (descending) in
//! iteration order, so equal scores keep the player ahead of bots and bots
//! in their directory order. No extra tie-break is applied.

use serde::Serialize;

use crate::sim::state::{Agent, AgentDirectory, AgentId};

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub id: AgentId,
    pub name: String,
    pub score: u64,
    pub is_bot: bool,
}

impl From<&Agent> for Standing {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            name: agent.name.clone(),
            score: agent.score,
            is_bot: agent.is_bot,
        }
    }
}

/// Final numbers reported when the clock runs out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult {
    /// Player's final score
    pub score: u64,
    /// Player's final rank (1-indexed)
    pub rank: usize,
    /// Name of the top-ranked hole
    pub winner: String,
}

impl RoundResult {
    pub fn from_agents(agents: &AgentDirectory) -> Self {
        let player = agents.player();
        let order = sorted(agents.all());
        Self {
            score: player.score,
            rank: position_of(&order, player.id).unwrap_or(order.len()),
            winner: order
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
        }
    }
}

/// Stable descending sort by score
fn sorted(agents: &[Agent]) -> Vec<&Agent> {
    let mut order: Vec<&Agent> = agents.iter().collect();
    order.sort_by(|a, b| b.score.cmp(&a.score));
    order
}

fn position_of(order: &[&Agent], id: AgentId) -> Option<usize> {
    order.iter().position(|a| a.id == id).map(|i| i + 1)
}

/// Rank of hole `id` (1-indexed), `None` if no such hole
pub fn rank_of(agents: &AgentDirectory, id: AgentId) -> Option<usize> {
    position_of(&sorted(agents.all()), id)
}

/// Leaderboard, best first, truncated to `limit`
pub fn standings(agents: &AgentDirectory, limit: usize) -> Vec<Standing> {
    sorted(agents.all())
        .into_iter()
        .take(limit)
        .map(Standing::from)
        .collect()
}
