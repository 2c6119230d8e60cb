//! Business logic services for the application layer.

pub mod ssl_service;

pub use ssl_service::UniversalSslService;
