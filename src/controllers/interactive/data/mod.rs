pub mod input_snapshot;
pub mod view_status;
