//! Output adapters: frames go to disk or to a window.

pub mod file;
#[cfg(feature = "gui")]
pub mod pixels;
