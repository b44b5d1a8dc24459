//! Interactive Mandelbrot explorer.
//!
//! `core` holds the plane model, the escape-time evaluator, colouring and
//! the parallel frame renderer. `controllers` drive it per tick or once for
//! a file, `presenters` put frames on disk or in a window, and `input`
//! turns flags and window events into configuration and tick input.

pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::cli::render_to_file::CliRenderController;
pub use controllers::data::explorer_config::{ConfigError, ExplorerConfig, ScrollZoomAnchor};
pub use controllers::interactive::{InputSnapshot, InteractiveController, ViewStatus};
pub use input::cli::{GuiArgs, RenderArgs, ViewArgs};
#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};
pub use presenters::file::ppm::PpmFilePresenter;
