//! Data models module
//!
//! Defines the legacy operation catalogue, the REST payload shapes and the
//! descriptor produced by a translation

pub mod descriptor;
pub mod legacy;
pub mod rest;

pub use descriptor::{HttpMethod, Note, NoteKind, QueryParams, QueryValue, RestCall, RestCallDescriptor};
pub use legacy::LegacyOperation;
