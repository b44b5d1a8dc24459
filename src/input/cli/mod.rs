pub mod args;

pub use args::{GuiArgs, RenderArgs, ViewArgs};
