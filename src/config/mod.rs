//! Configuration management module
//!
//! Loads application configuration from environment variables and an optional JSON file.

pub mod file;
pub mod settings;

pub use file::AppConfig;
pub use settings::Settings;
