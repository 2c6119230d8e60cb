//! Core domain entities.
//!
//! Every value here lives for the duration of one request and is never
//! persisted.
//!
//! # Entity Types
//!
//! - [`ZoneCredentials`] - Validated email, zone id and API key
//! - [`UniversalSslSettings`] - Fixed body sent to the zone settings endpoint
//! - [`UpstreamReply`] - Parsed status and JSON body returned by the upstream API

pub mod credentials;
pub mod universal_ssl;

pub use credentials::ZoneCredentials;
pub use universal_ssl::{DEFAULT_CERTIFICATE_AUTHORITY, UniversalSslSettings, UpstreamReply};
