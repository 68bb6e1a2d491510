//! Hole Arena headless driver
//!
//! Plays one round at a steady 60 Hz frame cadence with an autopilot on the
//! pointer, then prints the result as JSON.
//!
//! Usage: `hole-arena [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use hole_arena::Settings;
    use hole_arena::sim::{FrameInput, FrameSnapshot, GameEvent, RoundState, absorbs, tick};

    /// Host frame time
    const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Log the HUD every this many frames
    const HUD_EVERY: u64 = 300;

    /// Driver holding the round and the host-side input state
    struct Game {
        state: RoundState,
        input: FrameInput,
    }

    impl Game {
        fn new(settings: Settings) -> Result<Self, hole_arena::ConfigError> {
            Ok(Self {
                state: RoundState::new(settings)?,
                input: FrameInput::default(),
            })
        }

        /// Point at the closest prop the player can already swallow.
        ///
        /// The camera follows the player, so the pointer offset from the
        /// viewport center is the offset from the player.
        fn autopilot(&mut self) {
            let player = self.state.agents.player();
            let target = self
                .state
                .props
                .iter()
                .filter(|p| p.fall_scale().is_none())
                .filter(|p| absorbs(player.radius, p.effective_size(), 0.0))
                .min_by(|a, b| {
                    a.pos
                        .distance_squared(player.pos)
                        .total_cmp(&b.pos.distance_squared(player.pos))
                })
                .map(|p| p.pos);

            let pointer = target.map(|t| t - player.pos).unwrap_or(Vec2::ZERO);
            self.input.pointer_moved = pointer != self.input.pointer;
            self.input.pointer = pointer;
        }

        fn run(&mut self) -> hole_arena::RoundResult {
            loop {
                self.autopilot();
                let events = tick(&mut self.state, &self.input, FRAME_MS);

                for event in events {
                    match event {
                        GameEvent::AgentEliminated { eater, victim, points } => {
                            log::info!("Hole {} ate hole {} for {} points", eater, victim, points);
                        }
                        GameEvent::RoundEnded(result) => return result,
                        _ => {}
                    }
                }

                if self.state.frame % HUD_EVERY == 0 {
                    let hud = FrameSnapshot::from_round(&self.state);
                    log::info!(
                        "t={}s score={} rank={}/{} props={}",
                        hud.hud_time,
                        hud.player_score,
                        hud.player_rank,
                        hud.hole_count,
                        hud.props.len()
                    );
                }
            }
        }
    }

    fn load_settings() -> Result<Settings, hole_arena::ConfigError> {
        match std::env::args().nth(1) {
            Some(path) => {
                let json = std::fs::read_to_string(&path)?;
                Settings::from_json(&json)
            }
            None => Ok(Settings::default()),
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Hole Arena (headless) starting...");

        let settings = match load_settings() {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(2);
            }
        };

        let mut game = match Game::new(settings) {
            Ok(game) => game,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(2);
            }
        };

        let result = game.run();
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to encode result: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host in this crate; the library is driven by the embedder
}
