//! Zodiacal longitude to screen angle conversion.
//!
//! The wheel is rotated so the Ascendant always renders at the 9 o'clock
//! direction (screen angle 180 degrees), and the zodiac reads
//! counter-clockwise per astrological convention. Screen Y is inverted
//! relative to the mathematical orientation because canvas Y grows downward.

/// Reduce a longitude into [0, 360). Applied at every angular entry point;
/// callers never need to pre-normalize.
pub fn normalize_longitude(longitude: f64) -> f64 {
    longitude.rem_euclid(360.0)
}

/// Screen angle in radians for a zodiacal longitude, with the Ascendant
/// pinned at 180 degrees. An absent Ascendant is passed as 0, yielding an
/// unrotated wheel with Aries at 9 o'clock.
pub fn to_screen_angle(longitude: f64, asc_longitude: f64) -> f64 {
    let degrees = normalize_longitude(longitude) - normalize_longitude(asc_longitude) + 180.0;
    degrees.to_radians()
}

/// Canvas point at `radius` along `angle` from the center. Y is subtracted
/// so positive angles sweep counter-clockwise on screen.
pub fn polar_xy(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy - radius * angle.sin())
}
