//! SVG serialization and raster output.
//!
//! The layout is already fully positioned; this module only turns it into
//! markup. PNG output (feature `png`) rasterizes through `resvg` and then
//! quantizes to the four gray levels the 2-bit panel can display.

use crate::layout::{ChartLayout, Scene, Text};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// The panel's 2-bit luminance levels. Output pixels never fall outside
/// this set.
pub const GRAY_LEVELS: [u8; 4] = [0, 85, 170, 255];

pub fn render_svg(layout: &ChartLayout, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    render_scene(&mut svg, &layout.wheel, theme);
    render_scene(&mut svg, &layout.legend, theme);

    svg.push_str("</svg>");
    svg
}

fn render_scene(svg: &mut String, scene: &Scene, theme: &Theme) {
    for circle in &scene.circles {
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>",
            circle.cx, circle.cy, circle.radius, theme.ink, circle.stroke_width
        ));
    }
    for line in &scene.lines {
        let stroke = if line.accent { &theme.accent } else { &theme.ink };
        svg.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            line.x1, line.y1, line.x2, line.y2, stroke, line.width
        ));
    }
    for text in &scene.texts {
        svg.push_str(&text_svg(text, theme));
    }
}

fn text_svg(text: &Text, theme: &Theme) -> String {
    let family = if text.symbol {
        &theme.symbol_font_family
    } else {
        &theme.text_font_family
    };
    let fill = if text.accent { &theme.accent } else { &theme.ink };
    let anchor = if text.centered {
        " text-anchor=\"middle\""
    } else {
        ""
    };
    let weight = if text.bold { " font-weight=\"bold\"" } else { "" };
    format!(
        "<text x=\"{:.2}\" y=\"{:.2}\"{anchor} font-size=\"{}px\" font-family=\"{}\"{weight} fill=\"{}\">{}</text>",
        text.x,
        text.y,
        text.size,
        family,
        fill,
        escape_xml(&text.text)
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{svg}");
        }
    }
    Ok(())
}

/// Quantize one pixel's luminance (ITU-R 601 weights) onto the panel's four
/// gray levels.
pub fn quantize_luminance(r: u8, g: u8, b: u8) -> u8 {
    let luminance =
        (0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)) as usize;
    GRAY_LEVELS[(luminance / 64).min(3)]
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "DejaVu Sans".to_string();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);

    // The chart is drawn on an opaque background, so premultiplied RGBA and
    // straight RGBA coincide and the quantization can run on raw bytes.
    for pixel in pixmap.data_mut().chunks_exact_mut(4) {
        let gray = quantize_luminance(pixel[0], pixel[1], pixel[2]);
        pixel[0] = gray;
        pixel[1] = gray;
        pixel[2] = gray;
        pixel[3] = 255;
    }

    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
