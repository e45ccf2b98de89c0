//! HTTP response building module
//!
//! Builders for JSON responses and status-code responses, decoupled from
//! business logic.

pub mod response;

pub use response::{build_405_response, build_options_response, error_response, json_response};
