// wka Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, WkaError};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;

// Initialize logging (RUST_LOG overrides the default level)
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
