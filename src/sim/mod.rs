//! Simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per display frame, single-threaded
//! - The round owns every piece of mutable state
//! - No rendering or platform dependencies

pub mod absorption;
pub mod brain;
pub mod catalog;
pub mod clock;
pub mod input;
pub mod mapgen;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use absorption::{absorbs, growth_for, resolve_eliminations, respawn_point, update_props};
pub use catalog::{PropKind, PropSpec, SKINS, Skin, Theme, ThemeSpec};
pub use clock::SimulationClock;
pub use input::{FrameInput, HeldKeys, InputMode, InputTranslator};
pub use mapgen::generate_map;
pub use snapshot::{AgentView, FrameSnapshot, PropView};
pub use state::{
    Agent, AgentDirectory, AgentId, GameEvent, PLAYER_ID, Prop, PropShape, PropState, RoundPhase,
    RoundState,
};
pub use tick::tick;
