//! Request handler module
//!
//! Request routing dispatch and the business logic behind the two read
//! endpoints.

pub mod people;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
