pub mod calc;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ephemeris;
pub mod glyphs;
pub mod layout;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{ChartConfig, ProfileKind, WheelProfile};
pub use ephemeris::{parse_snapshot, Body, BodyPosition, Positions};
pub use layout::{compute_chart_layout, ChartLayout};
pub use render::render_svg;
pub use theme::Theme;
