//! Service layer module
//!
//! Operation detection, dispatch and the per-operation translators

pub mod access_points;
pub mod common;
pub mod detector;
pub mod orders;
pub mod shipments;
pub mod translator;

pub use detector::detect_operation;
pub use translator::{translate_request, RequestTranslator};
