//! Procedural prop layout
//!
//! City maps tile the ground into blocks; forest and dino maps scatter
//! candidate points and roll an outcome table for each. Both keep a clear
//! zone around the map center where the player spawns.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use rand::Rng;

use super::catalog::{PropKind, Theme};
use super::state::{Prop, PropShape, PropState};

/// City block edge length
pub const BLOCK_SIZE: f32 = 300.0;
/// City blocks centered closer than this to the map center stay empty
pub const CITY_SAFE_RADIUS: f32 = 300.0;
/// Free-roaming vehicles snapped to the road grid
pub const TRAFFIC_COUNT: usize = 300;
/// Organic maps skip candidates closer than this to the map center
pub const ORGANIC_SAFE_RADIUS: f32 = 200.0;
pub const FOREST_CANDIDATES: usize = 800;
pub const DINO_CANDIDATES: usize = 600;
/// Per-instance size variation is `SCALE_MIN + random * SCALE_SPREAD`
pub const SCALE_MIN: f32 = 0.9;
pub const SCALE_SPREAD: f32 = 0.3;
/// Mobile prop speed is `SPEED_MIN + random * SPEED_SPREAD` per frame
pub const SPEED_MIN: f32 = 1.0;
pub const SPEED_SPREAD: f32 = 2.0;

/// Build a fresh prop set for `theme` on a map of `map_size`
pub fn generate_map<R: Rng>(theme: Theme, map_size: Vec2, rng: &mut R) -> Vec<Prop> {
    let mut builder = MapBuilder {
        theme,
        map_size,
        rng,
        props: Vec::new(),
    };

    match theme {
        Theme::City => builder.city(),
        Theme::Forest => builder.forest(),
        Theme::Dino => builder.dino(),
    }

    log::info!(
        "Generated {:?} map {}x{}: {} props",
        theme,
        map_size.x,
        map_size.y,
        builder.props.len()
    );
    builder.props
}

struct MapBuilder<'a, R> {
    theme: Theme,
    map_size: Vec2,
    rng: &'a mut R,
    props: Vec<Prop>,
}

impl<R: Rng> MapBuilder<'_, R> {
    fn center(&self) -> Vec2 {
        self.map_size / 2.0
    }

    fn city(&mut self) {
        use PropKind::*;
        use PropShape::{Circle, Rect};

        let mut x = 0.0;
        while x < self.map_size.x {
            let mut y = 0.0;
            while y < self.map_size.y {
                let c = Vec2::new(x + BLOCK_SIZE / 2.0, y + BLOCK_SIZE / 2.0);
                y += BLOCK_SIZE;
                if c.distance(self.center()) < CITY_SAFE_RADIUS {
                    continue;
                }

                let roll: f32 = self.rng.random();
                if roll < 0.2 {
                    self.spawn(Skyscraper, Rect, c, false);
                } else if roll < 0.5 {
                    self.spawn(Building, Rect, c - Vec2::splat(50.0), false);
                    self.spawn(Building, Rect, c + Vec2::splat(50.0), false);
                } else if roll < 0.8 {
                    self.spawn(Store, Rect, c, false);
                    self.spawn(Pedestrian, Circle, c + Vec2::new(40.0, 0.0), true);
                    self.spawn(Pedestrian, Circle, c - Vec2::new(40.0, 0.0), true);
                } else {
                    // Parking lot
                    self.spawn(Pedestrian, Circle, c, true);
                    self.spawn(Car, Rect, c, true);
                }
            }
            x += BLOCK_SIZE;
        }

        // Traffic: one coordinate free, the other on a grid line
        // Fractional counts so a partial last block still gets its grid line
        let cols = self.map_size.x / BLOCK_SIZE;
        let rows = self.map_size.y / BLOCK_SIZE;
        for _ in 0..TRAFFIC_COUNT {
            let horizontal = self.rng.random_bool(0.5);
            let pos = if horizontal {
                let x = self.rng.random::<f32>() * self.map_size.x;
                let row = (self.rng.random::<f32>() * rows).floor();
                Vec2::new(x, row * BLOCK_SIZE)
            } else {
                let col = (self.rng.random::<f32>() * cols).floor();
                let y = self.rng.random::<f32>() * self.map_size.y;
                Vec2::new(col * BLOCK_SIZE, y)
            };
            let kind = if self.rng.random::<f32>() > 0.8 { Truck } else { Car };
            self.spawn(kind, Rect, pos, true);
        }
    }

    fn forest(&mut self) {
        use PropKind::*;
        use PropShape::{Circle, Rect};

        for _ in 0..FOREST_CANDIDATES {
            let Some(p) = self.organic_candidate() else {
                continue;
            };

            let roll: f32 = self.rng.random();
            if roll < 0.02 {
                // Campsite
                self.spawn(Cabin, Rect, p, false);
                self.spawn(Tent, Circle, p + Vec2::new(40.0, 20.0), false);
                self.spawn(Pedestrian, Circle, p + Vec2::new(20.0, 50.0), true);
            } else if roll < 0.3 {
                self.spawn(Tree, Circle, p, false);
                if self.rng.random_bool(0.5) {
                    self.spawn(Bush, Circle, p + Vec2::splat(20.0), false);
                }
            } else if roll < 0.35 {
                self.spawn(Rock, Circle, p, false);
            } else if roll < 0.45 {
                // Hikers and animals
                self.spawn(Pedestrian, Circle, p, true);
            }
        }
    }

    fn dino(&mut self) {
        use PropKind::*;
        use PropShape::{Circle, Rect};

        for _ in 0..DINO_CANDIDATES {
            let Some(p) = self.organic_candidate() else {
                continue;
            };

            let roll: f32 = self.rng.random();
            if roll < 0.015 {
                self.spawn(Volcano, Circle, p, false);
                self.spawn(Rock, Circle, p + Vec2::splat(60.0), false);
                self.spawn(Rock, Circle, p - Vec2::splat(60.0), false);
            } else if roll < 0.05 {
                // Nest
                self.spawn(DinoLarge, Rect, p, true);
                self.spawn(DinoEgg, Circle, p + Vec2::new(40.0, 0.0), false);
                self.spawn(DinoEgg, Circle, p + Vec2::new(50.0, 10.0), false);
            } else if roll < 0.25 {
                self.spawn(Fern, Circle, p, false);
            } else if roll < 0.3 {
                self.spawn(Bone, Rect, p, false);
            } else if roll < 0.4 {
                self.spawn(DinoSmall, Circle, p, true);
            } else if roll < 0.45 {
                self.spawn(DinoMedium, Rect, p, true);
            }
        }
    }

    /// Uniform map point outside the center clear zone
    fn organic_candidate(&mut self) -> Option<Vec2> {
        let p = Vec2::new(
            self.rng.random::<f32>() * self.map_size.x,
            self.rng.random::<f32>() * self.map_size.y,
        );
        (p.distance(self.center()) >= ORGANIC_SAFE_RADIUS).then_some(p)
    }

    fn spawn(&mut self, kind: PropKind, shape: PropShape, pos: Vec2, moving: bool) {
        let spec = kind.spec();
        let scale = SCALE_MIN + self.rng.random::<f32>() * SCALE_SPREAD;
        let radius = spec.min_radius * scale;

        let (width, height) = match shape {
            PropShape::Circle => (radius, radius),
            PropShape::Rect => (radius * spec.footprint.0, radius * spec.footprint.1),
        };

        let (velocity, rotation) = if moving {
            let speed = SPEED_MIN + self.rng.random::<f32>() * SPEED_SPREAD;
            if self.theme.is_urban() {
                // Grid traffic: one axis only
                let dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
                if self.rng.random_bool(0.5) {
                    (Vec2::new(speed * dir, 0.0), 0.0)
                } else {
                    (Vec2::new(0.0, speed * dir), FRAC_PI_2)
                }
            } else {
                let heading = self.rng.random::<f32>() * TAU;
                (Vec2::from_angle(heading) * speed, heading)
            }
        } else {
            let rotation = match shape {
                // Buildings line up with the streets
                PropShape::Rect => self.rng.random_range(0..4) as f32 * FRAC_PI_2,
                PropShape::Circle => self.rng.random::<f32>() * TAU,
            };
            (Vec2::ZERO, rotation)
        };

        let color = spec.palette[self.rng.random_range(0..spec.palette.len())];

        self.props.push(Prop {
            id: self.props.len() as u32 + 1,
            kind,
            shape,
            pos,
            radius,
            width,
            height,
            depth: spec.depth * scale,
            points: spec.points,
            growth: spec.growth,
            rotation,
            color,
            velocity: moving.then_some(velocity),
            state: PropState::Idle,
        });
    }
}
