//! Data Transfer Objects for API requests.
//!
//! DTOs use Serde for JSON deserialization and validator for input
//! validation.

pub mod add_ssl;
