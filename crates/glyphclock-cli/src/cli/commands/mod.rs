//! CLI command handlers.

pub mod clock;
pub mod config;
pub mod once;
