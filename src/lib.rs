//! # Universal SSL Relay
//!
//! A small Axum service that serves a browser form and forwards the submitted
//! Cloudflare credentials to the Cloudflare API to enable Universal SSL on a
//! zone.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Credentials, settings body and the zone settings client trait
//! - **Application Layer** ([`application`]) - The relay service
//! - **Infrastructure Layer** ([`infrastructure`]) - Cloudflare client over `reqwest`
//! - **API Layer** ([`api`]) - `POST /api/add-ssl` handler, DTOs and middleware
//! - **Web Layer** ([`web`]) - The localized HTML form
//!
//! ## Behavior
//!
//! - `POST /api/add-ssl` with `{ email, zone_id, api_key }` issues exactly one
//!   `PATCH /zones/{zone_id}/ssl/universal/settings` and relays the reply
//! - Every other request receives the form page
//! - Credentials are never stored or logged
//!
//! ## Quick Start
//!
//! ```bash
//! export UI_LOCALE="id"   # Optional, defaults to English
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UniversalSslService;
    pub use crate::domain::clients::ZoneSettingsClient;
    pub use crate::domain::entities::{UniversalSslSettings, UpstreamReply, ZoneCredentials};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::web::Locale;
}
