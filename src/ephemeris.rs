//! Position snapshot model and parsing.
//!
//! The upstream ephemeris service delivers a JSON document with a
//! `chart_data.subject` map from body identifier to position record. This
//! module deserializes that document into [`Positions`]; fetching it is the
//! caller's concern.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Every body and chart angle the renderer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Ascendant,
    MediumCoeli,
}

impl Body {
    pub const ALL: [Body; 14] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::NorthNode,
        Body::SouthNode,
        Body::Ascendant,
        Body::MediumCoeli,
    ];

    /// Resolve an upstream body identifier. Unknown identifiers map to
    /// `None` and are skipped, never treated as errors.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "sun" => Some(Body::Sun),
            "moon" => Some(Body::Moon),
            "mercury" => Some(Body::Mercury),
            "venus" => Some(Body::Venus),
            "mars" => Some(Body::Mars),
            "jupiter" => Some(Body::Jupiter),
            "saturn" => Some(Body::Saturn),
            "uranus" => Some(Body::Uranus),
            "neptune" => Some(Body::Neptune),
            "pluto" => Some(Body::Pluto),
            "mean_north_lunar_node" => Some(Body::NorthNode),
            "mean_south_lunar_node" => Some(Body::SouthNode),
            "ascendant" => Some(Body::Ascendant),
            "medium_coeli" => Some(Body::MediumCoeli),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::NorthNode => "mean_north_lunar_node",
            Body::SouthNode => "mean_south_lunar_node",
            Body::Ascendant => "ascendant",
            Body::MediumCoeli => "medium_coeli",
        }
    }

    /// Ascendant and Midheaven are chart angles, not bodies: they carry no
    /// retrograde flag and are never assigned a house number.
    pub fn is_axis(self) -> bool {
        matches!(self, Body::Ascendant | Body::MediumCoeli)
    }
}

/// One body's position on the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Absolute ecliptic longitude, normalized to [0, 360).
    pub longitude: f64,
    /// Zodiac sign index 0-11, Aries = 0.
    pub sign: u8,
    /// Whole degrees within the sign, 0-29.
    pub degree: u8,
    /// Arc-minutes within the degree, 0-59.
    pub minute: u8,
    pub retrograde: bool,
}

impl BodyPosition {
    /// Build a position from a raw longitude, deriving sign and the
    /// degree/minute breakdown from the fractional part modulo 30.
    pub fn from_longitude(longitude: f64, retrograde: bool) -> Self {
        let lon = longitude.rem_euclid(360.0);
        let in_sign = lon % 30.0;
        Self {
            longitude: lon,
            sign: (lon / 30.0) as u8 % 12,
            degree: in_sign as u8,
            minute: ((in_sign % 1.0) * 60.0) as u8,
            retrograde,
        }
    }
}

/// Snapshot of body positions keyed by [`Body`]. Any subset of bodies may be
/// absent; consumers render whatever is present.
#[derive(Debug, Clone, Default)]
pub struct Positions(BTreeMap<Body, BodyPosition>);

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: Body, position: BodyPosition) {
        self.0.insert(body, position);
    }

    pub fn get(&self, body: Body) -> Option<&BodyPosition> {
        self.0.get(&body)
    }

    pub fn contains(&self, body: Body) -> bool {
        self.0.contains_key(&body)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Body, &BodyPosition)> {
        self.0.iter().map(|(body, pos)| (*body, pos))
    }

    /// Ascendant longitude, or 0 when absent (unrotated wheel).
    pub fn ascendant_longitude(&self) -> f64 {
        self.get(Body::Ascendant).map_or(0.0, |p| p.longitude)
    }

    /// Ascendant sign, or 0 when absent.
    pub fn ascendant_sign(&self) -> u8 {
        self.get(Body::Ascendant).map_or(0, |p| p.sign)
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot status is {0:?}, expected \"OK\"")]
    Status(String),
}

#[derive(Debug, Deserialize)]
struct SnapshotDoc {
    status: Option<String>,
    chart_data: Option<ChartData>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    subject: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawPosition {
    #[serde(default)]
    abs_pos: f64,
    sign_num: Option<u8>,
    position: Option<f64>,
    #[serde(default)]
    retrograde: bool,
}

impl RawPosition {
    fn into_position(self) -> BodyPosition {
        let lon = self.abs_pos.rem_euclid(360.0);
        // Upstream sign_num and in-sign position are authoritative when
        // present; otherwise both derive from the absolute longitude.
        let sign = self.sign_num.unwrap_or((lon / 30.0) as u8) % 12;
        let in_sign = self.position.unwrap_or(lon % 30.0);
        BodyPosition {
            longitude: lon,
            sign,
            degree: in_sign as u8,
            minute: ((in_sign % 1.0) * 60.0) as u8,
            retrograde: self.retrograde,
        }
    }
}

/// Parse an ephemeris snapshot document into a [`Positions`] map.
///
/// Accepts either the full service response (`status` + `chart_data.subject`)
/// or a bare subject map, which is convenient for fixtures. Non-body subject
/// fields (name, coordinates), unknown body identifiers, and null records
/// are all skipped.
pub fn parse_snapshot(json: &str) -> Result<Positions, SnapshotError> {
    let doc: SnapshotDoc = serde_json::from_str(json)?;
    if let Some(status) = doc.status.as_deref()
        && status != "OK"
    {
        return Err(SnapshotError::Status(status.to_string()));
    }

    let subject = match doc.chart_data {
        Some(data) => data.subject,
        None => serde_json::from_str(json)?,
    };

    let mut positions = Positions::new();
    for (key, value) in subject {
        let Some(body) = Body::from_key(&key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        let raw: RawPosition = serde_json::from_value(value)?;
        positions.insert(body, raw.into_position());
    }
    Ok(positions)
}
