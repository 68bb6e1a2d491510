//! Static theme, prop and skin tables
//!
//! Every per-kind property lives in one descriptor so callers look things up
//! instead of matching on the kind at each use site.

use serde::{Deserialize, Serialize};

/// Environment biome, chosen once per round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theme {
    #[default]
    City,
    Forest,
    Dino,
}

/// Palette and presentation text for a theme
#[derive(Debug, Clone, Copy)]
pub struct ThemeSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub ground: &'static str,
    pub road: &'static str,
    /// `None` for themes without painted road markings
    pub road_marking: Option<&'static str>,
    /// UI accent color
    pub accent: &'static str,
}

const CITY: ThemeSpec = ThemeSpec {
    name: "Metro City",
    description: "Consume cars, skyscrapers, and pedestrians in a bustling metropolis.",
    ground: "#cbd5e1",
    road: "#334155",
    road_marking: Some("#fbbf24"),
    accent: "#3b82f6",
};

const FOREST: ThemeSpec = ThemeSpec {
    name: "Whispering Woods",
    description: "Devour campers, cabins, and wildlife in a serene forest.",
    ground: "#4d7c0f",
    road: "#a16207",
    road_marking: None,
    accent: "#22c55e",
};

const DINO: ThemeSpec = ThemeSpec {
    name: "Jurassic Valley",
    description: "Go back in time! Eat dinosaurs, volcanoes, and giant ferns.",
    ground: "#78350f",
    road: "#7c2d12",
    road_marking: None,
    accent: "#ea580c",
};

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::City, Theme::Forest, Theme::Dino];

    pub fn spec(self) -> &'static ThemeSpec {
        match self {
            Theme::City => &CITY,
            Theme::Forest => &FOREST,
            Theme::Dino => &DINO,
        }
    }

    /// Urban themes lay props on a block grid and move traffic axis-aligned
    pub fn is_urban(self) -> bool {
        self == Theme::City
    }
}

/// Category of consumable prop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropKind {
    // City
    Pedestrian,
    TrafficLight,
    Bike,
    Car,
    Truck,
    Store,
    Building,
    Skyscraper,

    // Forest
    Tree,
    Rock,
    Bush,
    Cabin,
    Tent,

    // Dino
    DinoEgg,
    DinoSmall,
    DinoMedium,
    DinoLarge,
    Fern,
    Volcano,
    Bone,
}

/// Per-kind sizing, scoring and coloring
#[derive(Debug, Clone, Copy)]
pub struct PropSpec {
    /// Base collision radius before per-instance variation
    pub min_radius: f32,
    pub max_radius: f32,
    /// Render height
    pub depth: f32,
    /// Score awarded on absorption
    pub points: u32,
    /// Feeds the radius growth curve
    pub growth: f32,
    /// Rect footprint as multiples of the radius (width, height)
    pub footprint: (f32, f32),
    /// Candidate fill colors, one picked per instance
    pub palette: &'static [&'static str],
    /// Mobile instances occasionally re-randomize their drift
    pub wanders: bool,
}

const NEUTRAL: &[&str] = &["#94a3b8"];
const MASONRY: &[&str] = &["#475569", "#334155", "#1e293b"];
const SQUARE: (f32, f32) = (2.0, 2.0);

const fn spec(
    min_radius: f32,
    max_radius: f32,
    depth: f32,
    points: u32,
    growth: f32,
    palette: &'static [&'static str],
) -> PropSpec {
    PropSpec {
        min_radius,
        max_radius,
        depth,
        points,
        growth,
        footprint: SQUARE,
        palette,
        wanders: false,
    }
}

const PEDESTRIAN: PropSpec = PropSpec {
    wanders: true,
    ..spec(4.0, 4.0, 8.0, 1, 0.1, NEUTRAL)
};
const TRAFFIC_LIGHT: PropSpec = spec(3.0, 3.0, 40.0, 10, 0.2, NEUTRAL);
const BIKE: PropSpec = spec(6.0, 6.0, 8.0, 10, 0.3, NEUTRAL);
const CAR: PropSpec = PropSpec {
    footprint: (3.5, 1.8),
    ..spec(12.0, 14.0, 14.0, 25, 1.0, &["#ef4444", "#3b82f6", "#fbbf24", "#ffffff"])
};
const TRUCK: PropSpec = PropSpec {
    footprint: (3.5, 1.8),
    ..spec(18.0, 22.0, 25.0, 60, 2.0, NEUTRAL)
};
const STORE: PropSpec = spec(30.0, 40.0, 30.0, 120, 4.0, NEUTRAL);
const BUILDING: PropSpec = spec(45.0, 55.0, 80.0, 250, 6.0, MASONRY);
const SKYSCRAPER: PropSpec = spec(70.0, 90.0, 200.0, 1500, 15.0, MASONRY);

const BUSH: PropSpec = spec(6.0, 8.0, 6.0, 2, 0.1, &["#4d7c0f"]);
const ROCK: PropSpec = spec(10.0, 15.0, 10.0, 15, 0.5, &["#78716c", "#57534e", "#44403c"]);
const TREE: PropSpec = spec(10.0, 14.0, 60.0, 20, 0.8, &["#166534", "#15803d", "#14532d"]);
const TENT: PropSpec = spec(15.0, 20.0, 15.0, 50, 1.5, &["#ef4444", "#f97316", "#3b82f6"]);
const CABIN: PropSpec = spec(35.0, 45.0, 40.0, 200, 5.0, &["#7c2d12"]);

const DINO_EGG: PropSpec = spec(5.0, 6.0, 8.0, 5, 0.2, &["#fef3c7"]);
const FERN: PropSpec = spec(12.0, 16.0, 30.0, 15, 0.5, &["#3f6212"]);
const BONE: PropSpec = spec(15.0, 25.0, 5.0, 30, 0.8, &["#e7e5e4"]);
const DINO_SMALL: PropSpec = PropSpec {
    wanders: true,
    ..spec(8.0, 10.0, 12.0, 20, 0.6, &["#84cc16"])
};
const DINO_MEDIUM: PropSpec = PropSpec {
    footprint: (3.0, 1.5),
    ..spec(20.0, 25.0, 25.0, 100, 2.5, &["#a16207"])
};
const DINO_LARGE: PropSpec = PropSpec {
    footprint: (4.0, 2.0),
    ..spec(40.0, 50.0, 60.0, 500, 10.0, &["#78350f"])
};
const VOLCANO: PropSpec = spec(80.0, 100.0, 150.0, 2000, 20.0, &["#1c1917"]);

impl PropKind {
    pub fn spec(self) -> &'static PropSpec {
        match self {
            PropKind::Pedestrian => &PEDESTRIAN,
            PropKind::TrafficLight => &TRAFFIC_LIGHT,
            PropKind::Bike => &BIKE,
            PropKind::Car => &CAR,
            PropKind::Truck => &TRUCK,
            PropKind::Store => &STORE,
            PropKind::Building => &BUILDING,
            PropKind::Skyscraper => &SKYSCRAPER,
            PropKind::Tree => &TREE,
            PropKind::Rock => &ROCK,
            PropKind::Bush => &BUSH,
            PropKind::Cabin => &CABIN,
            PropKind::Tent => &TENT,
            PropKind::DinoEgg => &DINO_EGG,
            PropKind::DinoSmall => &DINO_SMALL,
            PropKind::DinoMedium => &DINO_MEDIUM,
            PropKind::DinoLarge => &DINO_LARGE,
            PropKind::Fern => &FERN,
            PropKind::Volcano => &VOLCANO,
            PropKind::Bone => &BONE,
        }
    }
}

/// Cosmetic hole appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skin {
    pub id: &'static str,
    pub name: &'static str,
    /// Ring color
    pub color: &'static str,
    /// Inner glow
    pub inner_color: &'static str,
}

pub const SKINS: [Skin; 6] = [
    Skin { id: "default", name: "Black Hole", color: "#1e293b", inner_color: "#000000" },
    Skin { id: "inferno", name: "Magma", color: "#ef4444", inner_color: "#7f1d1d" },
    Skin { id: "toxic", name: "Acid", color: "#84cc16", inner_color: "#3f6212" },
    Skin { id: "galaxy", name: "Galaxy", color: "#6366f1", inner_color: "#312e81" },
    Skin { id: "gold", name: "Midas", color: "#eab308", inner_color: "#713f12" },
    Skin { id: "ice", name: "Glacier", color: "#06b6d4", inner_color: "#164e63" },
];

impl Skin {
    pub fn find(id: &str) -> Option<&'static Skin> {
        SKINS.iter().find(|s| s.id == id)
    }
}

pub const BOT_NAMES: [&str; 15] = [
    "AbyssMaw",
    "DarkStar",
    "VoidRunner",
    "Nebula",
    "Quasar",
    "Singularity",
    "EventHorizon",
    "GravityWell",
    "Supernova",
    "BlackSun",
    "TitanEater",
    "PlanetCrusher",
    "CosmicDust",
    "ZeroPoint",
    "Entropy",
];
