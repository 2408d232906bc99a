// Utility functions
pub mod config;
pub mod error;

pub use config::*;
