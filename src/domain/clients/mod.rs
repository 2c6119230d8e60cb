//! Outbound client trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for calls to third-party APIs
//! - Implementations live in `crate::infrastructure::cloudflare`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod zone_settings_client;

pub use zone_settings_client::ZoneSettingsClient;

#[cfg(test)]
pub use zone_settings_client::MockZoneSettingsClient;
