//! Chart layout: positions every element of the wheel and legend on the
//! fixed 800x480 canvas and returns a flat vector scene for the renderer.
//!
//! Every call is a pure function of the snapshot and configuration; nothing
//! is retained between renders.

pub mod angle;
pub mod legend;
pub mod placement;
pub mod wheel;

use crate::config::{ChartConfig, LegendConfig, WheelProfile};
use crate::ephemeris::Positions;
use crate::theme::Theme;

/// Stroked circle, no fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    /// Accent lines render in the theme's mid-gray instead of ink.
    pub accent: bool,
}

/// One positioned text run. Styling is resolved against the theme at render
/// time; the layout only records which role the run plays.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub bold: bool,
    pub accent: bool,
    /// Middle-anchored when set; start-anchored otherwise.
    pub centered: bool,
    /// Use the symbol font stack instead of the plain text stack.
    pub symbol: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub circles: Vec<Circle>,
    pub lines: Vec<Line>,
    pub texts: Vec<Text>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }
}

/// The assembled chart: wheel and legend share the canvas origin but are
/// otherwise independent scenes.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub wheel: Scene,
    pub legend: Scene,
}

/// Compute the full chart layout for one render.
///
/// `timestamp` is the pre-formatted footer timestamp; the layout never reads
/// the clock itself. Pass `None` to omit the footer.
pub fn compute_chart_layout(
    positions: &Positions,
    config: &ChartConfig,
    theme: &Theme,
    timestamp: Option<&str>,
) -> ChartLayout {
    let profile = WheelProfile::for_kind(config.profile);
    let legend_cfg = LegendConfig::default();

    ChartLayout {
        width: profile.geometry.width,
        height: profile.geometry.height,
        wheel: wheel::compute_wheel_scene(positions, config, &profile, theme),
        legend: legend::compute_legend_scene(positions, config, &legend_cfg, theme, timestamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileKind;
    use crate::ephemeris::{Body, BodyPosition};

    #[test]
    fn layout_is_canvas_sized() {
        let layout = compute_chart_layout(
            &Positions::new(),
            &ChartConfig::default(),
            &Theme::eink(),
            None,
        );
        assert_eq!(layout.width, 800.0);
        assert_eq!(layout.height, 480.0);
    }

    #[test]
    fn empty_snapshot_still_yields_wheel_geometry() {
        let layout = compute_chart_layout(
            &Positions::new(),
            &ChartConfig::default(),
            &Theme::eink(),
            None,
        );
        assert_eq!(layout.wheel.circles.len(), 2);
        assert_eq!(layout.wheel.lines.len(), 12);
        assert!(!layout.legend.is_empty());
    }

    #[test]
    fn same_inputs_same_layout() {
        let mut positions = Positions::new();
        positions.insert(Body::Sun, BodyPosition::from_longitude(10.0, false));
        positions.insert(Body::Moon, BodyPosition::from_longitude(12.0, false));
        let config = ChartConfig::default();
        let theme = Theme::eink();
        let a = compute_chart_layout(&positions, &config, &theme, Some("now"));
        let b = compute_chart_layout(&positions, &config, &theme, Some("now"));
        assert_eq!(a.wheel.texts, b.wheel.texts);
        assert_eq!(a.legend.texts, b.legend.texts);
    }

    #[test]
    fn profile_selection_changes_geometry() {
        let mut positions = Positions::new();
        positions.insert(Body::Sun, BodyPosition::from_longitude(10.0, false));
        let mut config = ChartConfig::default();
        let compact = compute_chart_layout(&positions, &config, &Theme::eink(), None);
        config.profile = ProfileKind::Flared;
        let flared = compute_chart_layout(&positions, &config, &Theme::eink(), None);
        let outer = |layout: &ChartLayout| {
            layout
                .wheel
                .circles
                .iter()
                .map(|c| c.radius)
                .fold(0.0, f64::max)
        };
        assert_eq!(outer(&compact), 175.0);
        assert_eq!(outer(&flared), 155.0);
    }
}
