//! Interactive controller for real-time exploration.
//!
//! The GUI samples its input state once per tick into an [`InputSnapshot`]
//! and hands it to [`InteractiveController::tick`], which applies the view
//! transitions, re-renders when the view is dirty and pushes new frames to a
//! [`FramePresenterPort`].

mod controller;
pub mod data;
pub mod ports;

pub use controller::{InteractiveController, TickOutcome};
pub use data::input_snapshot::InputSnapshot;
pub use data::view_status::ViewStatus;
pub use ports::presenter::FramePresenterPort;
