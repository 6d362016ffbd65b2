//! Derived quantities: moon phase, whole-sign houses, display formatting.
//!
//! Pure total functions over the position snapshot; nothing here performs I/O
//! or holds state.

use crate::ephemeris::{Body, Positions};

/// Moon phase index 0-7 from the Moon's elongation off the Sun, or `None`
/// when either body is absent from the snapshot.
///
/// The +12 degree offset shifts the visual phase slightly early to better
/// match human perception of the lunar cycle. It is calibrated against the
/// physical display; keep the literal value.
pub fn moon_phase_index(positions: &Positions) -> Option<usize> {
    let sun = positions.get(Body::Sun)?;
    let moon = positions.get(Body::Moon)?;
    let elongation = (moon.longitude - sun.longitude).rem_euclid(360.0);
    Some((((elongation + 12.0) / 45.0) as usize) % 8)
}

/// Whole-sign house number (1-12) for a body's sign given the Ascendant's
/// sign. The Ascendant's own sign is always the 1st house.
pub fn house_number(body_sign: u8, asc_sign: u8) -> u8 {
    ((i16::from(body_sign) - i16::from(asc_sign)).rem_euclid(12) + 1) as u8
}

/// English ordinal string: 1st, 2nd, 3rd, 4th... 11-13 take "th" before the
/// last-digit rule applies.
pub fn ordinal(n: u32) -> String {
    if (11..=13).contains(&n) {
        return format!("{n}th");
    }
    let suffix = match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Zero-padded `DD°MM'` string for legend rows.
pub fn format_degree_minute(degree: u8, minute: u8) -> String {
    format!("{degree:02}\u{00B0}{minute:02}'")
}
