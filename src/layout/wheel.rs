//! Wheel scene layout: rings, sign sectors, body ticks, placed labels, and
//! the Ascendant/Midheaven markers.

use std::cmp::Ordering;
use std::f64::consts::PI;

use crate::config::{CanvasGeometry, ChartConfig, LabelStyle, WheelProfile};
use crate::ephemeris::{Body, BodyPosition, Positions};
use crate::glyphs::{self, SIGN_GLYPHS};
use crate::theme::Theme;

use super::angle::{polar_xy, to_screen_angle};
use super::placement::place_labels;
use super::{Circle, Line, Scene, Text};

pub(super) fn compute_wheel_scene(
    positions: &Positions,
    config: &ChartConfig,
    profile: &WheelProfile,
    theme: &Theme,
) -> Scene {
    let geo = &profile.geometry;
    let asc_lon = positions.ascendant_longitude();
    let mut scene = Scene::new();

    scene.circles.push(Circle {
        cx: geo.cx,
        cy: geo.cy,
        radius: geo.outer_radius,
        stroke_width: 2.0,
    });
    scene.circles.push(Circle {
        cx: geo.cx,
        cy: geo.cy,
        radius: geo.inner_radius,
        stroke_width: 2.0,
    });

    // 12 equal sectors: divider line at each sign boundary, glyph at the
    // sector midpoint.
    for i in 0..12 {
        let boundary = to_screen_angle(f64::from(i) * 30.0, asc_lon);
        let (x2, y2) = polar_xy(geo.cx, geo.cy, geo.outer_radius, boundary);
        scene.lines.push(Line {
            x1: geo.cx,
            y1: geo.cy,
            x2,
            y2,
            width: 1.0,
            accent: false,
        });

        let midpoint = to_screen_angle(f64::from(i) * 30.0 + 15.0, asc_lon);
        let (gx, gy) = polar_xy(geo.cx, geo.cy, geo.sign_glyph_radius, midpoint);
        scene.texts.push(Text {
            text: SIGN_GLYPHS[i as usize].to_string(),
            x: gx,
            y: gy + 6.0,
            size: theme.sign_glyph_size,
            bold: false,
            accent: false,
            centered: true,
            symbol: true,
        });
    }

    // Configured non-axis bodies present in the snapshot. Config order here;
    // the placement passes re-sort by longitude below.
    let chart_bodies: Vec<(Body, &BodyPosition)> = config
        .bodies
        .iter()
        .filter_map(|key| Body::from_key(key))
        .filter(|body| !body.is_axis())
        .filter_map(|body| positions.get(body).map(|pos| (body, pos)))
        .collect();

    for (_, pos) in &chart_bodies {
        let angle = to_screen_angle(pos.longitude, asc_lon);
        let (x1, y1) = polar_xy(geo.cx, geo.cy, geo.tick_from, angle);
        let (x2, y2) = polar_xy(geo.cx, geo.cy, geo.tick_to, angle);
        scene.lines.push(Line {
            x1,
            y1,
            x2,
            y2,
            width: 2.0,
            accent: true,
        });
    }

    let mut ordered = chart_bodies;
    ordered.sort_by(|a, b| {
        a.1.longitude
            .partial_cmp(&b.1.longitude)
            .unwrap_or(Ordering::Equal)
    });
    let angles: Vec<f64> = ordered
        .iter()
        .map(|(_, pos)| to_screen_angle(pos.longitude, asc_lon))
        .collect();

    match &profile.labels {
        LabelStyle::Split { glyphs: glyph_pass, degrees: degree_pass } => {
            for ((_, pos), record) in ordered
                .iter()
                .zip(place_labels(&angles, degree_pass, geo))
            {
                let (x, y) = polar_xy(geo.cx, geo.cy, record.radius, record.angle);
                scene.texts.push(Text {
                    text: format!("{}\u{00B0}", pos.degree),
                    x,
                    y: y + 4.0,
                    size: theme.degree_label_size,
                    bold: false,
                    accent: false,
                    centered: true,
                    symbol: false,
                });
            }
            for ((body, _), record) in ordered.iter().zip(place_labels(&angles, glyph_pass, geo)) {
                let (x, y) = polar_xy(geo.cx, geo.cy, record.radius, record.angle);
                scene.texts.push(Text {
                    text: glyphs::body_glyph(*body).to_string(),
                    x,
                    y: y + 6.0,
                    size: theme.body_glyph_size,
                    bold: true,
                    accent: false,
                    centered: true,
                    symbol: true,
                });
            }
        }
        LabelStyle::Combined { labels } => {
            for ((body, pos), record) in ordered.iter().zip(place_labels(&angles, labels, geo)) {
                let (px, py) = polar_xy(geo.cx, geo.cy, record.radius, record.angle);
                let glyph = glyphs::body_glyph(*body).to_string();
                let degree = format!("{}\u{00B0}", pos.degree);
                // Stack glyph over degree near the top and bottom where
                // horizontal space is tight; side-by-side elsewhere.
                if record.angle.sin().abs() > 0.7 {
                    push_combined(&mut scene, theme, glyph, px, py, degree, px, py + 12.0);
                } else {
                    push_combined(&mut scene, theme, glyph, px - 6.0, py + 5.0, degree, px + 8.0, py + 5.0);
                }
            }
        }
    }

    // ASC and MC are excluded from the collision pool: they have dedicated
    // label slots outside the contested radius band. The ASC marker is pinned
    // at 9 o'clock by construction.
    if let Some(asc) = positions.get(Body::Ascendant) {
        push_axis_marker(&mut scene, geo, theme, "ASC", asc.degree, PI, geo.asc_label_radius);
    }
    if let Some(mc) = positions.get(Body::MediumCoeli) {
        let angle = to_screen_angle(mc.longitude, asc_lon);
        push_axis_marker(&mut scene, geo, theme, "MC", mc.degree, angle, geo.mc_label_radius);
    }

    scene
}

#[allow(clippy::too_many_arguments)]
fn push_combined(
    scene: &mut Scene,
    theme: &Theme,
    glyph: String,
    gx: f64,
    gy: f64,
    degree: String,
    dx: f64,
    dy: f64,
) {
    scene.texts.push(Text {
        text: glyph,
        x: gx,
        y: gy,
        size: theme.combined_glyph_size,
        bold: false,
        accent: false,
        centered: true,
        symbol: true,
    });
    // Glyph and degree of a combined label share the symbol font stack.
    scene.texts.push(Text {
        text: degree,
        x: dx,
        y: dy,
        size: theme.degree_label_size,
        bold: false,
        accent: false,
        centered: true,
        symbol: true,
    });
}

fn push_axis_marker(
    scene: &mut Scene,
    geo: &CanvasGeometry,
    theme: &Theme,
    name: &str,
    degree: u8,
    angle: f64,
    label_radius: f64,
) {
    let (x1, y1) = polar_xy(geo.cx, geo.cy, geo.outer_radius, angle);
    let (x2, y2) = polar_xy(geo.cx, geo.cy, geo.outer_radius + geo.axis_tick_len, angle);
    scene.lines.push(Line {
        x1,
        y1,
        x2,
        y2,
        width: 2.0,
        accent: false,
    });

    let (lx, ly) = polar_xy(geo.cx, geo.cy, label_radius, angle);
    scene.texts.push(Text {
        text: name.to_string(),
        x: lx,
        y: ly + geo.axis_name_dy,
        size: theme.axis_label_size,
        bold: true,
        accent: false,
        centered: true,
        symbol: false,
    });
    scene.texts.push(Text {
        text: format!("{degree}\u{00B0}"),
        x: lx,
        y: ly + geo.axis_degree_dy,
        size: theme.axis_label_size,
        bold: false,
        accent: false,
        centered: true,
        symbol: false,
    });
}
