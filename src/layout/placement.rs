//! Greedy radial collision avoidance for wheel labels.
//!
//! Candidates must arrive sorted by the underlying zodiacal longitude, not by
//! screen angle: screen angles wrap discontinuously at the rotation seam, and
//! the greedy pass relies on angular adjacency in longitude order. Once a
//! label is placed it never moves again, so the input order is part of the
//! layout contract — reversing it may produce a different (still valid)
//! layout.

use std::f64::consts::PI;

use crate::config::{CanvasGeometry, PlacementProfile, PushDirection};

use super::angle::polar_xy;

/// Final position of one placed label. Working state of a single render
/// call; discarded afterward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRecord {
    pub angle: f64,
    pub radius: f64,
}

/// Place one label per screen angle, displacing colliding candidates by whole
/// steps until they clear every already-placed record, exhaust the clamp
/// band, or run out of retries. Returns records in input order.
pub fn place_labels(
    angles: &[f64],
    profile: &PlacementProfile,
    geometry: &CanvasGeometry,
) -> Vec<PlacementRecord> {
    let mut placed: Vec<PlacementRecord> = Vec::with_capacity(angles.len());

    // The edge-clip reversal can revisit an earlier radius, so the retry
    // loop must be bounded: enough iterations to sweep the clamp band once
    // in each direction. Past the bound the crowding is accepted and the
    // label renders where it stands.
    let band_steps = ((profile.max_radius - profile.min_radius) / profile.step)
        .ceil()
        .max(1.0) as usize;

    for &angle in angles {
        let mut radius = profile.base_radius;
        for _ in 0..=2 * band_steps {
            if !collides(angle, radius, &placed, profile) {
                break;
            }
            let mut step = match profile.direction {
                PushDirection::Outward => profile.step,
                PushDirection::Inward => -profile.step,
            };
            if profile.edge_clip_check && clips_canvas(angle, radius + step, geometry) {
                step = -step;
            }
            let next = (radius + step).clamp(profile.min_radius, profile.max_radius);
            if next == radius {
                // Band exhausted: accept the crowding rather than fail.
                break;
            }
            radius = next;
        }
        placed.push(PlacementRecord { angle, radius });
    }

    placed
}

fn collides(
    angle: f64,
    radius: f64,
    placed: &[PlacementRecord],
    profile: &PlacementProfile,
) -> bool {
    placed.iter().any(|record| {
        let mut delta = (angle - record.angle).abs();
        if delta > PI {
            delta = 2.0 * PI - delta;
        }
        let threshold = match profile.horizontal_threshold {
            // Side-by-side labels in the horizontal zones need less angular
            // clearance than stacked ones near the top and bottom.
            Some(tight) if is_horizontal(angle) && is_horizontal(record.angle) => tight,
            _ => profile.angular_threshold,
        };
        delta < threshold && (radius - record.radius).abs() < profile.radial_band
    })
}

/// Within ~30 degrees of the horizontal axis.
fn is_horizontal(angle: f64) -> bool {
    angle.sin().abs() < 0.5
}

fn clips_canvas(angle: f64, radius: f64, geometry: &CanvasGeometry) -> bool {
    let (x, y) = polar_xy(geometry.cx, geometry.cy, radius, angle);
    x < geometry.margin
        || x > geometry.width - geometry.margin
        || y < geometry.margin
        || y > geometry.height - geometry.margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WheelProfile;

    fn degree_profile() -> (PlacementProfile, CanvasGeometry) {
        let wheel = WheelProfile::compact();
        let crate::config::LabelStyle::Split { degrees, .. } = wheel.labels else {
            panic!("compact profile is split");
        };
        (degrees, wheel.geometry)
    }

    fn glyph_profile() -> (PlacementProfile, CanvasGeometry) {
        let wheel = WheelProfile::compact();
        let crate::config::LabelStyle::Split { glyphs, .. } = wheel.labels else {
            panic!("compact profile is split");
        };
        (glyphs, wheel.geometry)
    }

    #[test]
    fn well_separated_labels_stay_at_base_radius() {
        let (profile, geometry) = degree_profile();
        // 30 degrees apart, far beyond the 0.14 rad threshold.
        let angles: Vec<f64> = (0..12).map(|i| f64::from(i) * 30.0_f64.to_radians()).collect();
        for record in place_labels(&angles, &profile, &geometry) {
            assert_eq!(record.radius, profile.base_radius);
        }
    }

    #[test]
    fn clustered_labels_are_displaced_by_whole_steps() {
        let (profile, geometry) = degree_profile();
        // Three labels ~2 degrees apart on the right side of the wheel.
        let angles = [0.00, 0.035, 0.07];
        let records = place_labels(&angles, &profile, &geometry);
        assert_eq!(records[0].radius, profile.base_radius);
        for record in &records[1..] {
            let at_clamp =
                record.radius == profile.min_radius || record.radius == profile.max_radius;
            let steps = (record.radius - profile.base_radius).abs() / profile.step;
            assert!(
                at_clamp || (steps - steps.round()).abs() < 1e-9,
                "radius {} is neither a whole step from base nor clamped",
                record.radius
            );
            assert!(record.radius >= profile.min_radius);
            assert!(record.radius <= profile.max_radius);
        }
    }

    #[test]
    fn displaced_label_clears_all_prior_records() {
        let (profile, geometry) = degree_profile();
        let angles = [0.00, 0.02, 0.04, 0.06];
        let records = place_labels(&angles, &profile, &geometry);
        for (i, a) in records.iter().enumerate() {
            for b in &records[..i] {
                let mut delta = (a.angle - b.angle).abs();
                if delta > PI {
                    delta = 2.0 * PI - delta;
                }
                let contested = delta < profile.angular_threshold
                    && (a.radius - b.radius).abs() < profile.radial_band;
                // Crowding is only acceptable once the clamp band is full.
                if contested {
                    assert!(
                        a.radius == profile.min_radius || a.radius == profile.max_radius,
                        "unclamped record still collides"
                    );
                }
            }
        }
    }

    #[test]
    fn inward_profile_pushes_toward_center() {
        let (profile, geometry) = glyph_profile();
        let angles = [1.0, 1.02];
        let records = place_labels(&angles, &profile, &geometry);
        assert_eq!(records[0].radius, profile.base_radius);
        assert_eq!(records[1].radius, profile.base_radius - profile.step);
    }

    #[test]
    fn wrap_around_angles_still_collide() {
        let (profile, geometry) = degree_profile();
        // 0.02 rad and 2π - 0.02 rad are 0.04 rad apart across the seam.
        let angles = [2.0 * PI - 0.02, 0.02];
        let records = place_labels(&angles, &profile, &geometry);
        assert_ne!(records[0].radius, records[1].radius);
    }

    #[test]
    fn edge_clip_reverses_push_direction() {
        let (profile, geometry) = degree_profile();
        // Labels near 9 o'clock: pushing outward from 195 would cross the
        // left canvas margin (220 - 209 = 11 < 15), so the engine pushes
        // inward instead.
        let angles = [PI, PI + 0.02];
        let records = place_labels(&angles, &profile, &geometry);
        assert_eq!(records[1].radius, profile.base_radius - profile.step);
    }

    #[test]
    fn edge_clip_cluster_terminates_with_crowding() {
        let (profile, geometry) = degree_profile();
        // Three labels stacked at 9 o'clock: every outward push clips the
        // left margin and reverses, and the band cannot absorb all three,
        // so the pass must give up on the last one rather than cycle
        // between the same two radii.
        let angles = [PI, PI + 0.02, PI + 0.04];
        let records = place_labels(&angles, &profile, &geometry);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].radius, profile.base_radius);
        assert_eq!(records[1].radius, profile.base_radius - profile.step);
        for record in &records {
            assert!(record.radius >= profile.min_radius);
            assert!(record.radius <= profile.max_radius);
        }
    }

    #[test]
    fn clamp_band_is_never_escaped() {
        let (profile, geometry) = degree_profile();
        // A dense stellium: ten labels within four degrees.
        let angles: Vec<f64> = (0..10).map(|i| 1.0 + f64::from(i) * 0.007).collect();
        for record in place_labels(&angles, &profile, &geometry) {
            assert!(record.radius >= profile.min_radius);
            assert!(record.radius <= profile.max_radius);
        }
    }

    #[test]
    fn horizontal_zone_allows_tighter_spacing() {
        let wheel = WheelProfile::flared();
        let crate::config::LabelStyle::Combined { labels } = wheel.labels else {
            panic!("flared profile is combined");
        };
        // 0.06 rad apart: contested near the vertical axis (threshold 0.08)
        // but clear in the horizontal zone (threshold 0.05).
        let horizontal = [0.0, 0.06];
        let vertical = [PI / 2.0, PI / 2.0 + 0.06];
        let h = place_labels(&horizontal, &labels, &wheel.geometry);
        let v = place_labels(&vertical, &labels, &wheel.geometry);
        assert_eq!(h[1].radius, labels.base_radius);
        assert_eq!(v[1].radius, labels.base_radius + labels.step);
    }

    #[test]
    fn reverse_order_may_differ_but_stays_in_band() {
        let (profile, geometry) = degree_profile();
        let forward = [0.00, 0.03, 0.06, 0.09];
        let reverse: Vec<f64> = forward.iter().rev().copied().collect();
        for record in place_labels(&reverse, &profile, &geometry) {
            assert!(record.radius >= profile.min_radius);
            assert!(record.radius <= profile.max_radius);
        }
    }
}
