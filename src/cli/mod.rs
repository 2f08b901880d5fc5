//! CLI command implementations for the kbgrab binary.

pub mod doctor;
pub mod run_cmd;
