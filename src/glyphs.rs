//! Astrological glyph tables.

use crate::ephemeris::Body;

/// Zodiac sign glyphs, Aries first.
pub const SIGN_GLYPHS: [&str; 12] = [
    "\u{2648}", // Aries
    "\u{2649}", // Taurus
    "\u{264A}", // Gemini
    "\u{264B}", // Cancer
    "\u{264C}", // Leo
    "\u{264D}", // Virgo
    "\u{264E}", // Libra
    "\u{264F}", // Scorpio
    "\u{2650}", // Sagittarius
    "\u{2651}", // Capricorn
    "\u{2652}", // Aquarius
    "\u{2653}", // Pisces
];

/// Moon phase glyphs over the 8 phases, 45 degrees of elongation each.
pub const MOON_PHASES: [&str; 8] = [
    "\u{1F311}", // New Moon
    "\u{1F312}", // Waxing Crescent
    "\u{1F313}", // First Quarter
    "\u{1F314}", // Waxing Gibbous
    "\u{1F315}", // Full Moon
    "\u{1F316}", // Waning Gibbous
    "\u{1F317}", // Last Quarter
    "\u{1F318}", // Waning Crescent
];

// Plain "R" renders reliably on the panel; U+211E does not.
pub const RETROGRADE_GLYPH: &str = "R";

/// Glyph (or short label, for the chart angles) of a body.
pub fn body_glyph(body: Body) -> &'static str {
    match body {
        Body::Sun => "\u{2609}",
        Body::Moon => "\u{263D}",
        Body::Mercury => "\u{263F}",
        Body::Venus => "\u{2640}",
        Body::Mars => "\u{2642}",
        Body::Jupiter => "\u{2643}",
        Body::Saturn => "\u{2644}",
        Body::Uranus => "\u{2645}",
        Body::Neptune => "\u{2646}",
        Body::Pluto => "\u{2647}",
        Body::NorthNode => "\u{260A}",
        Body::SouthNode => "\u{260B}",
        Body::Ascendant => "ASC",
        Body::MediumCoeli => "MC",
    }
}

pub fn sign_glyph(sign: u8) -> &'static str {
    SIGN_GLYPHS[usize::from(sign) % 12]
}
