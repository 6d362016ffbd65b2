use serde::{Deserialize, Serialize};

/// Colors, font stacks, and per-element font sizes for the chart.
///
/// The palette is restricted to black, white, and one mid-gray accent: the
/// target panel quantizes to four gray levels, so anything finer would alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Font stack for astrological glyphs and mixed glyph/text runs.
    pub symbol_font_family: String,
    /// Font stack for plain text (degree labels, axis names, house ordinals).
    pub text_font_family: String,
    pub background: String,
    pub ink: String,
    /// Mid-gray for secondary marks such as body ticks and the footer.
    pub accent: String,
    pub sign_glyph_size: f64,
    pub body_glyph_size: f64,
    pub degree_label_size: f64,
    pub combined_glyph_size: f64,
    pub axis_label_size: f64,
    pub legend_header_size: f64,
    pub legend_glyph_size: f64,
    pub legend_degree_size: f64,
    pub legend_retro_size: f64,
    pub legend_house_size: f64,
    pub footer_size: f64,
}

impl Theme {
    pub fn eink() -> Self {
        Self {
            symbol_font_family: "Noto Sans Symbols 2, DejaVu Sans, sans-serif".to_string(),
            text_font_family: "DejaVu Sans, Arial, sans-serif".to_string(),
            background: "white".to_string(),
            ink: "black".to_string(),
            accent: "#555555".to_string(),
            sign_glyph_size: 18.0,
            body_glyph_size: 20.0,
            degree_label_size: 12.0,
            combined_glyph_size: 15.0,
            axis_label_size: 11.0,
            legend_header_size: 18.0,
            legend_glyph_size: 20.0,
            legend_degree_size: 18.0,
            legend_retro_size: 14.0,
            legend_house_size: 16.0,
            footer_size: 14.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::eink()
    }
}
