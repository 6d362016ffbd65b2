//! Chart configuration and renderer profiles.
//!
//! Profiles are plain data: the same layout and placement engine runs for
//! every profile, only the constants differ. The constants were tuned against
//! the physical panel; do not re-derive them.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default body order: classical bodies first, then the lunar nodes, then the
/// chart angles. The legend follows this order.
pub const DEFAULT_BODY_ORDER: [&str; 14] = [
    "sun",
    "moon",
    "mercury",
    "venus",
    "mars",
    "jupiter",
    "saturn",
    "uranus",
    "neptune",
    "pluto",
    "mean_north_lunar_node",
    "mean_south_lunar_node",
    "ascendant",
    "medium_coeli",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_retrograde: bool,
    pub show_moon_phase: bool,
    pub show_house_numbers: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_retrograde: true,
            show_moon_phase: true,
            show_house_numbers: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Body glyphs inside the wheel, degree labels outside.
    Compact,
    /// Combined glyph + degree labels outside the wheel.
    Flared,
}

impl ProfileKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "compact" => Some(Self::Compact),
            "flared" => Some(Self::Flared),
            _ => None,
        }
    }
}

/// Per-render chart configuration: which bodies to show, display toggles,
/// the footer location label, and the wheel profile. Immutable once built;
/// every layout call receives it explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Ordered body identifiers. Unknown identifiers are skipped.
    pub bodies: Vec<String>,
    pub display: DisplayOptions,
    /// Location label for the legend footer. Empty hides the prefix.
    pub location: String,
    pub profile: ProfileKind,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bodies: DEFAULT_BODY_ORDER.iter().map(|s| s.to_string()).collect(),
            display: DisplayOptions::default(),
            location: String::new(),
            profile: ProfileKind::Compact,
        }
    }
}

/// Which direction a colliding label is displaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushDirection {
    Outward,
    Inward,
}

/// Constants for one collision-avoidance placement pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementProfile {
    pub base_radius: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Fixed displacement per adjustment, in canvas units.
    pub step: f64,
    pub direction: PushDirection,
    /// Angular distance (radians) below which two labels contest the same
    /// radius band.
    pub angular_threshold: f64,
    /// Tighter threshold applied when both labels sit within ~30 degrees of
    /// the horizontal axis, where the canvas has more free width.
    pub horizontal_threshold: Option<f64>,
    /// Radial separation below which an angular near-miss counts as a
    /// collision.
    pub radial_band: f64,
    /// Pre-check the displaced position against the canvas margin and
    /// reverse the push direction for the candidate if it would clip.
    pub edge_clip_check: bool,
}

/// Fixed radii and center for one renderer profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub sign_glyph_radius: f64,
    pub tick_from: f64,
    pub tick_to: f64,
    pub axis_tick_len: f64,
    pub asc_label_radius: f64,
    pub mc_label_radius: f64,
    /// Baseline offsets of the axis name and degree text below the label
    /// anchor point.
    pub axis_name_dy: f64,
    pub axis_degree_dy: f64,
    /// Canvas edge margin used by the clip pre-check.
    pub margin: f64,
}

/// How body labels on the wheel are composed and placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Separate passes: glyphs on one radius band, degree labels on another.
    Split {
        glyphs: PlacementProfile,
        degrees: PlacementProfile,
    },
    /// One pass placing glyph + degree as a single unit.
    Combined { labels: PlacementProfile },
}

/// One parameterized wheel renderer variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelProfile {
    pub geometry: CanvasGeometry,
    pub labels: LabelStyle,
}

impl WheelProfile {
    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Compact => Self::compact(),
            ProfileKind::Flared => Self::flared(),
        }
    }

    /// Stable layout: planet glyphs inside the wheel stacked inward on
    /// collision, numeric degree labels outside with an edge-clip pre-check.
    pub fn compact() -> Self {
        Self {
            geometry: CanvasGeometry {
                width: 800.0,
                height: 480.0,
                cx: 220.0,
                cy: 240.0,
                outer_radius: 175.0,
                inner_radius: 150.0,
                sign_glyph_radius: 163.0,
                tick_from: 141.0,
                tick_to: 150.0,
                axis_tick_len: 10.0,
                asc_label_radius: 203.0,
                mc_label_radius: 203.0,
                axis_name_dy: 4.0,
                axis_degree_dy: 16.0,
                margin: 15.0,
            },
            labels: LabelStyle::Split {
                glyphs: PlacementProfile {
                    base_radius: 125.0,
                    min_radius: 15.0,
                    max_radius: 125.0,
                    step: 22.0,
                    direction: PushDirection::Inward,
                    angular_threshold: 0.18,
                    horizontal_threshold: None,
                    radial_band: 20.0,
                    edge_clip_check: false,
                },
                degrees: PlacementProfile {
                    base_radius: 195.0,
                    min_radius: 180.0,
                    max_radius: 210.0,
                    step: 14.0,
                    direction: PushDirection::Outward,
                    angular_threshold: 0.14,
                    horizontal_threshold: None,
                    radial_band: 12.0,
                    edge_clip_check: true,
                },
            },
        }
    }

    /// Smaller wheel with combined glyph + degree labels fanned outward,
    /// allowing closer angular spacing in the horizontal zones.
    pub fn flared() -> Self {
        Self {
            geometry: CanvasGeometry {
                width: 800.0,
                height: 480.0,
                cx: 220.0,
                cy: 240.0,
                outer_radius: 155.0,
                inner_radius: 130.0,
                sign_glyph_radius: 143.0,
                tick_from: 155.0,
                tick_to: 165.0,
                axis_tick_len: 12.0,
                asc_label_radius: 190.0,
                mc_label_radius: 185.0,
                axis_name_dy: -2.0,
                axis_degree_dy: 10.0,
                margin: 15.0,
            },
            labels: LabelStyle::Combined {
                labels: PlacementProfile {
                    base_radius: 185.0,
                    min_radius: 185.0,
                    max_radius: 230.0,
                    step: 22.0,
                    direction: PushDirection::Outward,
                    angular_threshold: 0.08,
                    horizontal_threshold: Some(0.05),
                    radial_band: 16.0,
                    edge_clip_check: false,
                },
            },
        }
    }
}

/// Legend panel geometry: column offsets are relative to `x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendConfig {
    pub x: f64,
    pub y_start: f64,
    pub line_height: f64,
    pub width: f64,
    pub body_col: f64,
    pub sign_col: f64,
    pub degree_col: f64,
    pub retro_col: f64,
    pub house_col: f64,
    pub header_center: f64,
    pub footer_y: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            x: 470.0,
            y_start: 25.0,
            // 30px rows fit all 14 default bodies above the footer.
            line_height: 30.0,
            width: 260.0,
            body_col: 10.0,
            sign_col: 60.0,
            degree_col: 100.0,
            retro_col: 168.0,
            house_col: 195.0,
            header_center: 130.0,
            footer_y: 460.0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    bodies: Option<Vec<String>>,
    display: Option<DisplayFile>,
    location: Option<LocationFile>,
    profile: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DisplayFile {
    show_retrograde: Option<bool>,
    show_moon_phase: Option<bool>,
    show_house_numbers: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct LocationFile {
    name: Option<String>,
}

/// Load a chart config from a JSON file, falling back to defaults for any
/// field the file omits. `None` yields the default config.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ChartConfig> {
    let mut config = ChartConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(bodies) = parsed.bodies {
        config.bodies = bodies;
    }
    if let Some(display) = parsed.display {
        if let Some(v) = display.show_retrograde {
            config.display.show_retrograde = v;
        }
        if let Some(v) = display.show_moon_phase {
            config.display.show_moon_phase = v;
        }
        if let Some(v) = display.show_house_numbers {
            config.display.show_house_numbers = v;
        }
    }
    if let Some(location) = parsed.location
        && let Some(name) = location.name
    {
        config.location = name;
    }
    if let Some(profile) = parsed.profile.as_deref() {
        config.profile = ProfileKind::from_name(profile)
            .ok_or_else(|| anyhow::anyhow!("unknown profile {profile:?}"))?;
    }

    Ok(config)
}
