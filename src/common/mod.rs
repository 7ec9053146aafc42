pub mod run_status;
pub mod tspace;
