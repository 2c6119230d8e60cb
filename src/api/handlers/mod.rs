//! HTTP request handlers for API endpoints.

pub mod add_ssl;

pub use add_ssl::add_ssl_handler;
