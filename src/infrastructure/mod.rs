//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cloudflare`] - Cloudflare REST API client

pub mod cloudflare;
