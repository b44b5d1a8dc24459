pub mod discrete;
pub mod factory;
pub mod kinds;
pub mod smooth;
