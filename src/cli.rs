use crate::config::{load_config, ProfileKind};
use crate::ephemeris::parse_snapshot;
use crate::layout::compute_chart_layout;
use crate::render::{render_svg, write_output_svg};
use crate::theme::Theme;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "astrowheel",
    version,
    about = "Zodiac wheel + legend renderer for 2-bit grayscale e-ink panels"
)]
pub struct Args {
    /// Position snapshot JSON file, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (bodies, display toggles, location, profile)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Wheel profile override
    #[arg(short = 'p', long = "profile", value_enum)]
    pub profile: Option<ProfileArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ProfileArg {
    Compact,
    Flared,
}

impl From<ProfileArg> for ProfileKind {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Compact => ProfileKind::Compact,
            ProfileArg::Flared => ProfileKind::Flared,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(profile) = args.profile {
        config.profile = profile.into();
    }

    let input = read_input(args.input.as_deref())?;
    let positions = parse_snapshot(&input)?;

    let theme = Theme::eink();
    let timestamp = footer_timestamp();
    let layout = compute_chart_layout(&positions, &config, &theme, Some(&timestamp));
    let svg = render_svg(&layout, &theme);

    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let output = ensure_output(&args.output, "png")?;
                crate::render::write_output_png(&svg, &output)?;
            }
            #[cfg(not(feature = "png"))]
            return Err(anyhow::anyhow!(
                "built without the `png` feature; only svg output is available"
            ));
        }
    }

    Ok(())
}

/// Footer timestamp in the panel's format, e.g. "February 03 2026 7:15 am".
fn footer_timestamp() -> String {
    chrono::Local::now().format("%B %d %Y %-I:%M %P").to_string()
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_arg_maps_to_kind() {
        assert_eq!(ProfileKind::from(ProfileArg::Compact), ProfileKind::Compact);
        assert_eq!(ProfileKind::from(ProfileArg::Flared), ProfileKind::Flared);
    }

    #[test]
    fn args_parse_with_defaults() {
        let args = Args::parse_from(["astrowheel", "-i", "snapshot.json"]);
        assert!(matches!(args.output_format, OutputFormat::Svg));
        assert!(args.profile.is_none());
        assert!(args.output.is_none());
    }
}
