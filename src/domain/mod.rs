//! Domain layer containing the relay's data model and outbound contract.
//!
//! # Architecture
//!
//! - [`entities`] - Credentials, the Universal SSL settings body and the upstream reply
//! - [`clients`] - Trait describing the zone settings API, implemented by infrastructure
//!
//! # Request Flow
//!
//! 1. HTTP handler receives the credential payload
//! 2. [`crate::application::services::UniversalSslService`] turns it into [`entities::ZoneCredentials`]
//! 3. [`clients::ZoneSettingsClient`] issues the single outbound call
//! 4. The resulting [`entities::UpstreamReply`] is relayed back to the caller

pub mod clients;
pub mod entities;
