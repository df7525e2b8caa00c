//! Utilities module
//!
//! Error handling, logging helpers and the small text normalizers the
//! translators share

pub mod date;
pub mod error;
pub mod logging;
pub mod numbers;
pub mod query;
