pub mod controller;
pub mod direction;
pub mod settings;

pub use controller::{NavigationReport, NavigationWarning, ViewportController};
pub use direction::PanDirection;
pub use settings::{NavigationSettings, NavigationSettingsError};
