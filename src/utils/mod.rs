/// Module containing environment variable parsing helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use logger::*;
