//! Command-line flags shared by both binaries.

use crate::controllers::data::explorer_config::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, ExplorerConfig, ScrollZoomAnchor,
};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColouringMode;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_I_MAX, DEFAULT_I_MIN, DEFAULT_MAX_ITERATIONS, DEFAULT_R_MAX, DEFAULT_R_MIN,
    MandelbrotConfig,
};
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::navigation::NavigationSettings;
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColouringArg {
    Smooth,
    Discrete,
}

impl From<ColouringArg> for ColouringMode {
    fn from(arg: ColouringArg) -> Self {
        match arg {
            ColouringArg::Smooth => ColouringMode::Smooth,
            ColouringArg::Discrete => ColouringMode::Discrete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteArg {
    Plan9,
    Fire,
    BlueWhite,
}

impl From<PaletteArg> for PaletteKind {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Plan9 => PaletteKind::Plan9,
            PaletteArg::Fire => PaletteKind::Fire,
            PaletteArg::BlueWhite => PaletteKind::BlueWhite,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScrollZoomArg {
    Center,
    Cursor,
}

impl From<ScrollZoomArg> for ScrollZoomAnchor {
    fn from(arg: ScrollZoomArg) -> Self {
        match arg {
            ScrollZoomArg::Center => ScrollZoomAnchor::Center,
            ScrollZoomArg::Cursor => ScrollZoomAnchor::Cursor,
        }
    }
}

/// View and renderer flags.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct ViewArgs {
    /// Frame width in pixels
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Starting iteration cap
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(long, default_value_t = DEFAULT_R_MIN, allow_hyphen_values = true)]
    pub r_min: f64,

    #[arg(long, default_value_t = DEFAULT_R_MAX, allow_hyphen_values = true)]
    pub r_max: f64,

    #[arg(long, default_value_t = DEFAULT_I_MIN, allow_hyphen_values = true)]
    pub i_min: f64,

    #[arg(long, default_value_t = DEFAULT_I_MAX, allow_hyphen_values = true)]
    pub i_max: f64,

    #[arg(short, long, value_enum, default_value_t = ColouringArg::Smooth)]
    pub colouring: ColouringArg,

    #[arg(short, long, value_enum, default_value_t = PaletteArg::Plan9)]
    pub palette: PaletteArg,

    /// Where scroll-wheel zoom is anchored
    #[arg(long, value_enum, default_value_t = ScrollZoomArg::Center)]
    pub scroll_zoom: ScrollZoomArg,

    /// Render threads, 0 for one per core
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,
}

impl ViewArgs {
    /// Unvalidated; errors surface when the session is built.
    #[must_use]
    pub fn into_config(self) -> ExplorerConfig {
        ExplorerConfig {
            width: self.width,
            height: self.height,
            mandelbrot: MandelbrotConfig {
                r_min: self.r_min,
                r_max: self.r_max,
                i_min: self.i_min,
                i_max: self.i_max,
                max_iterations: self.max_iterations,
                colouring: self.colouring.into(),
                palette: self.palette.into(),
            },
            navigation: NavigationSettings::default(),
            scroll_zoom: self.scroll_zoom.into(),
            threads: self.threads,
        }
    }
}

/// Interactive explorer.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "gui", version, about = "Explore the Mandelbrot set in a window")]
pub struct GuiArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

/// Headless render to a PPM file.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(version, about = "Render one Mandelbrot frame to a PPM file")]
pub struct RenderArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Output file, parent directories are created
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_default_config() {
        let args = RenderArgs::try_parse_from(["render"]).unwrap();

        assert_eq!(args.view.into_config(), ExplorerConfig::default());
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn short_and_long_flags_reach_config() {
        let args = RenderArgs::try_parse_from([
            "render", "-w", "320", "-H", "200", "-i", "1000", "-c", "discrete", "-p",
            "blue-white", "--scroll-zoom", "cursor", "-t", "3", "-o", "frames/a.ppm",
        ])
        .unwrap();

        let config = args.view.into_config();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 200);
        assert_eq!(config.mandelbrot.max_iterations, 1000);
        assert_eq!(config.mandelbrot.colouring, ColouringMode::Discrete);
        assert_eq!(config.mandelbrot.palette, PaletteKind::BlueWhite);
        assert_eq!(config.scroll_zoom, ScrollZoomAnchor::Cursor);
        assert_eq!(config.threads, 3);
        assert_eq!(args.output, PathBuf::from("frames/a.ppm"));
    }

    #[test]
    fn negative_bounds_parse_as_values() {
        let args = GuiArgs::try_parse_from([
            "gui", "--r-min", "-0.75", "--r-max", "-0.7", "--i-min", "-0.1", "--i-max", "-0.05",
        ])
        .unwrap();

        let config = args.view.into_config();
        assert_eq!(config.mandelbrot.r_min, -0.75);
        assert_eq!(config.mandelbrot.r_max, -0.7);
        assert_eq!(config.mandelbrot.i_min, -0.1);
        assert_eq!(config.mandelbrot.i_max, -0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_palette_is_rejected() {
        assert!(RenderArgs::try_parse_from(["render", "-p", "sepia"]).is_err());
    }

    #[test]
    fn invalid_values_parse_but_fail_validation() {
        let args = RenderArgs::try_parse_from(["render", "-i", "0"]).unwrap();

        assert!(args.view.into_config().validate().is_err());
    }
}
