//! Round state and core simulation types
//!
//! Everything a frame mutates is owned by [`RoundState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::catalog::{BOT_NAMES, PropKind, SKINS, Skin, Theme};
use super::clock::SimulationClock;
use super::input::InputTranslator;
use super::mapgen::generate_map;
use crate::consts::*;
use crate::error::ConfigError;
use crate::ranking::RoundResult;
use crate::settings::Settings;

/// Stable hole identifier, unique within a round
pub type AgentId = u32;

/// The player is always the first hole
pub const PLAYER_ID: AgentId = 0;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundPhase {
    Playing,
    /// Clock ran out; nothing moves until a restart
    Ended,
}

/// A consuming hole, player or bot
#[derive(Debug, Clone, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub is_bot: bool,
    pub pos: Vec2,
    /// Never below `PLAYER_START_RADIUS`
    pub radius: f32,
    pub score: u64,
    /// Last frame's displacement (render continuity only)
    pub velocity: Vec2,
    pub skin: Skin,
    /// Wander target (bots only)
    pub target: Option<Vec2>,
}

impl Agent {
    /// Player hole, centered on the map
    pub fn player(name: &str, skin: Skin, map_size: Vec2) -> Self {
        Self {
            id: PLAYER_ID,
            name: name.to_string(),
            is_bot: false,
            pos: map_size / 2.0,
            radius: PLAYER_START_RADIUS,
            score: 0,
            velocity: Vec2::ZERO,
            skin,
            target: None,
        }
    }

    /// Bot hole at a random spot with a random skin and first target
    pub fn bot<R: Rng>(index: usize, map_size: Vec2, rng: &mut R) -> Self {
        let pos = random_point(rng, map_size, PLAYER_START_RADIUS);
        let skin = SKINS[rng.random_range(0..SKINS.len())];
        let target = random_point(rng, map_size, 0.0);
        Self {
            id: index as AgentId + 1,
            name: BOT_NAMES[index % BOT_NAMES.len()].to_string(),
            is_bot: true,
            pos,
            radius: PLAYER_START_RADIUS,
            score: 0,
            velocity: Vec2::ZERO,
            skin,
            target: Some(target),
        }
    }

    /// Back to a fresh hole at `pos` after being swallowed
    pub fn reset(&mut self, pos: Vec2) {
        self.score = 0;
        self.radius = PLAYER_START_RADIUS;
        self.pos = pos;
        self.velocity = Vec2::ZERO;
    }

    /// Grow by `amount`, nudging the center back inside if the rim now crosses an edge
    pub fn grow(&mut self, amount: f32, map_size: Vec2) {
        self.radius += amount;
        self.pos = crate::clamp_to_map(self.pos, self.radius, map_size);
    }

    /// Move by `delta` and keep the whole hole on the map
    pub fn displace(&mut self, delta: Vec2, map_size: Vec2) {
        let before = self.pos;
        self.pos = crate::clamp_to_map(self.pos + delta, self.radius, map_size);
        self.velocity = self.pos - before;
    }
}

/// Uniform point on the map, inset by `margin` on every side
pub fn random_point<R: Rng>(rng: &mut R, map_size: Vec2, margin: f32) -> Vec2 {
    let axis = |rng: &mut R, extent: f32| {
        if extent > 2.0 * margin {
            rng.random_range(margin..extent - margin)
        } else {
            extent / 2.0
        }
    };
    let x = axis(rng, map_size.x);
    let y = axis(rng, map_size.y);
    Vec2::new(x, y)
}

/// Player plus bots, in iteration order (player first)
#[derive(Debug, Clone, Serialize)]
pub struct AgentDirectory {
    agents: Vec<Agent>,
}

impl AgentDirectory {
    pub fn new(player: Agent, bots: Vec<Agent>) -> Self {
        let mut agents = Vec::with_capacity(bots.len() + 1);
        agents.push(player);
        agents.extend(bots);
        Self { agents }
    }

    pub fn player(&self) -> &Agent {
        &self.agents[0]
    }

    pub fn player_mut(&mut self) -> &mut Agent {
        &mut self.agents[0]
    }

    pub fn bots(&self) -> &[Agent] {
        &self.agents[1..]
    }

    pub fn bots_mut(&mut self) -> &mut [Agent] {
        &mut self.agents[1..]
    }

    /// All holes, player first
    pub fn all(&self) -> &[Agent] {
        &self.agents
    }

    pub fn all_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Collision footprint of a prop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropShape {
    Circle,
    Rect,
}

/// Absorption progress of a prop
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PropState {
    /// Standing on the map
    Idle,
    /// Being swallowed; `scale` shrinks from 1 toward 0
    Falling { into: AgentId, scale: f32 },
    /// Fully swallowed, dropped at the end of the frame
    Consumed,
}

/// A consumable map object
#[derive(Debug, Clone, Serialize)]
pub struct Prop {
    pub id: u32,
    pub kind: PropKind,
    pub shape: PropShape,
    pub pos: Vec2,
    pub radius: f32,
    pub width: f32,
    pub height: f32,
    /// Render height
    pub depth: f32,
    pub points: u32,
    pub growth: f32,
    /// Render rotation (radians)
    pub rotation: f32,
    pub color: &'static str,
    /// Set for mobile props (traffic, pedestrians, animals)
    pub velocity: Option<Vec2>,
    pub state: PropState,
}

impl Prop {
    /// Static prop with kind defaults, mostly for hand-built scenes
    pub fn new(id: u32, kind: PropKind, shape: PropShape, pos: Vec2, radius: f32) -> Self {
        let spec = kind.spec();
        let (width, height) = match shape {
            PropShape::Circle => (radius, radius),
            PropShape::Rect => (radius * spec.footprint.0, radius * spec.footprint.1),
        };
        Self {
            id,
            kind,
            shape,
            pos,
            radius,
            width,
            height,
            depth: spec.depth,
            points: spec.points,
            growth: spec.growth,
            rotation: 0.0,
            color: spec.palette[0],
            velocity: None,
            state: PropState::Idle,
        }
    }

    /// Size used for absorption checks
    pub fn effective_size(&self) -> f32 {
        match self.shape {
            PropShape::Circle => self.radius,
            PropShape::Rect => self.width.max(self.height) / RECT_SIZE_DIVISOR,
        }
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.state, PropState::Falling { .. })
    }

    /// Hole currently swallowing this prop
    pub fn falling_to(&self) -> Option<AgentId> {
        match self.state {
            PropState::Falling { into, .. } => Some(into),
            _ => None,
        }
    }

    /// Fall progress; `FALL_REMOVED` once consumed
    pub fn fall_scale(&self) -> Option<f32> {
        match self.state {
            PropState::Idle => None,
            PropState::Falling { scale, .. } => Some(scale),
            PropState::Consumed => Some(FALL_REMOVED),
        }
    }
}

/// Simulation event emitted by a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// A prop finished falling into a hole
    PropAbsorbed {
        prop: u32,
        kind: PropKind,
        agent: AgentId,
        points: u32,
    },
    /// `eater` swallowed `victim`, who respawned elsewhere
    AgentEliminated {
        eater: AgentId,
        victim: AgentId,
        points: u64,
    },
    RoundRestarted,
    /// Emitted exactly once per round
    RoundEnded(RoundResult),
}

/// Complete per-round state
#[derive(Debug, Clone)]
pub struct RoundState {
    pub settings: Settings,
    pub map_size: Vec2,
    pub theme: Theme,
    pub agents: AgentDirectory,
    /// Live props (consumed ones are dropped every frame)
    pub props: Vec<Prop>,
    pub clock: SimulationClock,
    pub input: InputTranslator,
    pub phase: RoundPhase,
    /// Final standings, set when the clock runs out
    pub result: Option<RoundResult>,
    /// Frames simulated this round
    pub frame: u64,
    pub(crate) rng: Pcg32,
}

impl RoundState {
    /// Validate settings and start a round with an entropy-seeded RNG
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let rng = Pcg32::from_rng(&mut rand::rng());
        Self::with_rng(settings, rng)
    }

    /// Start a round driven by the given generator
    pub fn with_rng(settings: Settings, rng: Pcg32) -> Result<Self, ConfigError> {
        settings.validate()?;
        let map_size = Vec2::new(settings.map_width, settings.map_height);
        let player = Agent::player(settings.display_name(), *settings.skin(), map_size);
        let mut state = Self {
            theme: settings.theme,
            map_size,
            agents: AgentDirectory::new(player, Vec::new()),
            props: Vec::new(),
            clock: SimulationClock::new(settings.round_time),
            input: InputTranslator::default(),
            phase: RoundPhase::Playing,
            result: None,
            frame: 0,
            rng,
            settings,
        };
        state.populate();
        Ok(state)
    }

    /// Replace every agent and prop with a fresh generation and rewind the clock
    pub fn restart(&mut self) {
        self.populate();
        self.clock = SimulationClock::new(self.settings.round_time);
        self.phase = RoundPhase::Playing;
        self.result = None;
        self.frame = 0;
        log::info!("Round restarted");
    }

    fn populate(&mut self) {
        self.props = generate_map(self.theme, self.map_size, &mut self.rng);

        let player = Agent::player(
            self.settings.display_name(),
            *self.settings.skin(),
            self.map_size,
        );
        let bots = (0..self.settings.bot_count)
            .map(|i| Agent::bot(i, self.map_size, &mut self.rng))
            .collect();
        self.agents = AgentDirectory::new(player, bots);

        log::info!(
            "{} round: {} props, {} holes",
            self.theme.spec().name,
            self.props.len(),
            self.agents.len()
        );
    }

    pub fn is_ended(&self) -> bool {
        self.phase == RoundPhase::Ended
    }
}
