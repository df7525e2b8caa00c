//! PPL SOAP Translator Library
//!
//! Translates legacy PPL SOAP/XML requests into descriptors of the
//! equivalent calls against the PPL CPL REST API

pub mod config;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{AppConfig, Settings};
pub use extract::{Extract, LegacyXml};
pub use handlers::{create_router, AppState};
pub use models::{LegacyOperation, RestCall, RestCallDescriptor};
pub use services::{detect_operation, translate_request, RequestTranslator};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
