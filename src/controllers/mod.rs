pub mod cli;
pub mod data;
pub mod interactive;
pub mod ports;
