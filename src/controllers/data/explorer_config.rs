use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::render_frame::{FrameRenderer, RenderError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, MandelbrotConfigError};
use crate::core::fractals::mandelbrot::palettes::palette::PaletteError;
use crate::core::navigation::{NavigationSettings, NavigationSettingsError, ViewportController};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Where scroll-wheel zooms are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollZoomAnchor {
    #[default]
    Center,
    Cursor,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid frame size: {0}")]
    FrameSize(#[from] PixelRectError),

    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotConfigError),

    #[error("invalid navigation settings: {0}")]
    Navigation(#[from] NavigationSettingsError),

    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Everything fixed at startup. Built from command-line flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub mandelbrot: MandelbrotConfig,
    pub navigation: NavigationSettings,
    pub scroll_zoom: ScrollZoomAnchor,
    /// Render worker count; 0 lets rayon choose.
    pub threads: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mandelbrot: MandelbrotConfig::default(),
            navigation: NavigationSettings::default(),
            scroll_zoom: ScrollZoomAnchor::default(),
            threads: 0,
        }
    }
}

/// The live pieces a controller drives: view state and the renderer.
#[derive(Debug)]
pub struct RenderSession {
    pub navigation: ViewportController,
    pub renderer: FrameRenderer<Box<dyn ColourMap>>,
}

impl ExplorerConfig {
    pub fn pixel_rect(&self) -> Result<PixelRect, PixelRectError> {
        PixelRect::new(self.width, self.height)
    }

    /// Checks every value without building the thread pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pixel_rect()?;
        self.mandelbrot.viewport()?;
        self.navigation.validate()?;
        Ok(())
    }

    pub fn build_session(&self) -> Result<RenderSession, ConfigError> {
        self.validate()?;

        let pixel_rect = self.pixel_rect()?;
        let navigation =
            ViewportController::new(self.mandelbrot.viewport()?, pixel_rect, self.navigation)?;

        let palette = self.mandelbrot.palette.build()?;
        let colour_map = mandelbrot_colour_map_factory(self.mandelbrot.colouring, palette);
        let renderer = FrameRenderer::new(colour_map, self.threads)?;

        info!(
            width = self.width,
            height = self.height,
            max_iterations = self.mandelbrot.max_iterations,
            colouring = %self.mandelbrot.colouring,
            palette = %self.mandelbrot.palette,
            threads = renderer.threads(),
            "render session ready"
        );

        Ok(RenderSession {
            navigation,
            renderer,
        })
    }
}
