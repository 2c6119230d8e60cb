//! Application layer services.
//!
//! Services sit between HTTP handlers and the outbound client traits of the
//! domain layer.
//!
//! # Available Services
//!
//! - [`services::ssl_service::UniversalSslService`] - Enables Universal SSL for a zone

pub mod services;
