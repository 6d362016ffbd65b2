//! Legend scene layout: header, divider, fixed-column body rows, footer.

use crate::calc;
use crate::config::{ChartConfig, LegendConfig};
use crate::ephemeris::{Body, Positions};
use crate::glyphs::{self, MOON_PHASES, RETROGRADE_GLYPH};
use crate::theme::Theme;

use super::{Line, Scene, Text};

pub(super) fn compute_legend_scene(
    positions: &Positions,
    config: &ChartConfig,
    legend: &LegendConfig,
    theme: &Theme,
    timestamp: Option<&str>,
) -> Scene {
    let mut scene = Scene::new();
    let asc_sign = positions.ascendant_sign();

    let mut header = String::from("Planetary Positions");
    if config.display.show_moon_phase
        && let Some(idx) = calc::moon_phase_index(positions)
    {
        header = format!("{} {}", MOON_PHASES[idx], header);
    }
    scene.texts.push(Text {
        text: header,
        x: legend.x + legend.header_center,
        y: legend.y_start,
        size: theme.legend_header_size,
        bold: true,
        accent: false,
        centered: true,
        symbol: true,
    });
    scene.lines.push(Line {
        x1: legend.x,
        y1: legend.y_start + 10.0,
        x2: legend.x + legend.width,
        y2: legend.y_start + 10.0,
        width: 1.0,
        accent: false,
    });

    // Rows follow configuration order, not longitude order.
    let mut y = legend.y_start + 40.0;
    for key in &config.bodies {
        let Some(body) = Body::from_key(key) else {
            continue;
        };
        let Some(pos) = positions.get(body) else {
            continue;
        };

        scene.texts.push(Text {
            text: glyphs::body_glyph(body).to_string(),
            x: legend.x + legend.body_col,
            y,
            size: theme.legend_glyph_size,
            bold: true,
            accent: false,
            centered: false,
            symbol: true,
        });
        scene.texts.push(Text {
            text: glyphs::sign_glyph(pos.sign).to_string(),
            x: legend.x + legend.sign_col,
            y,
            size: theme.legend_glyph_size,
            bold: false,
            accent: false,
            centered: false,
            symbol: true,
        });
        scene.texts.push(Text {
            text: calc::format_degree_minute(pos.degree, pos.minute),
            x: legend.x + legend.degree_col,
            y,
            size: theme.legend_degree_size,
            bold: false,
            accent: false,
            centered: false,
            symbol: true,
        });

        if config.display.show_retrograde && pos.retrograde {
            scene.texts.push(Text {
                text: RETROGRADE_GLYPH.to_string(),
                x: legend.x + legend.retro_col,
                y,
                size: theme.legend_retro_size,
                bold: true,
                accent: false,
                centered: false,
                symbol: false,
            });
        }

        // ASC and MC define the houses; they carry no house number.
        if config.display.show_house_numbers && !body.is_axis() {
            let house = calc::house_number(pos.sign, asc_sign);
            scene.texts.push(Text {
                text: calc::ordinal(u32::from(house)),
                x: legend.x + legend.house_col,
                y,
                size: theme.legend_house_size,
                bold: false,
                accent: false,
                centered: false,
                symbol: false,
            });
        }

        y += legend.line_height;
    }

    if let Some(ts) = timestamp {
        let text = if config.location.is_empty() {
            ts.to_string()
        } else {
            format!("{} | {}", config.location, ts)
        };
        scene.texts.push(Text {
            text,
            x: legend.x + legend.header_center,
            y: legend.footer_y,
            size: theme.footer_size,
            bold: false,
            accent: true,
            centered: true,
            symbol: true,
        });
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::BodyPosition;

    fn snapshot() -> Positions {
        let mut positions = Positions::new();
        positions.insert(Body::Sun, BodyPosition::from_longitude(319.5, false));
        positions.insert(Body::Moon, BodyPosition::from_longitude(216.1, false));
        positions.insert(Body::Mercury, BodyPosition::from_longitude(305.0, true));
        positions.insert(Body::Ascendant, BodyPosition::from_longitude(248.3, false));
        positions
    }

    fn scene_with(config: &ChartConfig, timestamp: Option<&str>) -> Scene {
        compute_legend_scene(
            &snapshot(),
            config,
            &LegendConfig::default(),
            &Theme::eink(),
            timestamp,
        )
    }

    #[test]
    fn header_carries_moon_phase_glyph() {
        let scene = scene_with(&ChartConfig::default(), None);
        let header = &scene.texts[0];
        // Sun 319.5 / Moon 216.1 is phase 5, waning gibbous.
        assert!(header.text.starts_with(MOON_PHASES[5]));
        assert!(header.text.ends_with("Planetary Positions"));
    }

    #[test]
    fn moon_phase_toggle_suppresses_glyph() {
        let mut config = ChartConfig::default();
        config.display.show_moon_phase = false;
        let scene = scene_with(&config, None);
        assert_eq!(scene.texts[0].text, "Planetary Positions");
    }

    #[test]
    fn rows_follow_config_order_not_longitude() {
        let mut config = ChartConfig::default();
        config.bodies = vec![
            "moon".to_string(),
            "sun".to_string(),
            "nonsense".to_string(),
        ];
        let scene = scene_with(&config, None);
        let glyph_rows: Vec<&Text> = scene
            .texts
            .iter()
            .filter(|t| t.x == 470.0 + 10.0)
            .collect();
        assert_eq!(glyph_rows.len(), 2);
        assert_eq!(glyph_rows[0].text, glyphs::body_glyph(Body::Moon));
        assert_eq!(glyph_rows[1].text, glyphs::body_glyph(Body::Sun));
        assert!(glyph_rows[0].y < glyph_rows[1].y);
    }

    #[test]
    fn retrograde_marker_only_for_flagged_bodies() {
        let scene = scene_with(&ChartConfig::default(), None);
        let markers: Vec<&Text> = scene
            .texts
            .iter()
            .filter(|t| t.text == RETROGRADE_GLYPH)
            .collect();
        // Only Mercury is retrograde in the snapshot.
        assert_eq!(markers.len(), 1);
    }

    #[test]
    fn retrograde_toggle_hides_markers() {
        let mut config = ChartConfig::default();
        config.display.show_retrograde = false;
        let scene = scene_with(&config, None);
        assert!(scene.texts.iter().all(|t| t.text != RETROGRADE_GLYPH));
    }

    #[test]
    fn houses_skip_chart_angles() {
        let scene = scene_with(&ChartConfig::default(), None);
        // Sun sign 10, ASC sign 8 -> 3rd; Moon sign 7 -> 12th; Mercury
        // sign 10 -> 3rd. The Ascendant row itself has no ordinal.
        let ordinals: Vec<&str> = scene
            .texts
            .iter()
            .filter(|t| t.x == 470.0 + 195.0)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(ordinals, vec!["3rd", "12th", "3rd"]);
    }

    #[test]
    fn footer_joins_location_and_timestamp() {
        let mut config = ChartConfig::default();
        config.location = "Portland".to_string();
        let scene = scene_with(&config, Some("February 03 2026 7:15 am"));
        let footer = scene.texts.last().unwrap();
        assert_eq!(footer.text, "Portland | February 03 2026 7:15 am");
        assert!(footer.accent);
    }

    #[test]
    fn no_timestamp_means_no_footer() {
        let scene = scene_with(&ChartConfig::default(), None);
        assert!(scene.texts.iter().all(|t| !t.accent));
    }
}
