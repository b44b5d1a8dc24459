//! Windowed front end: winit for the window and input, pixels for the
//! framebuffer, egui for the debug overlay.

mod app;
mod frame_rate;
pub mod view_input;

pub use app::{GuiError, run_gui};
