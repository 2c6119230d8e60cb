//! Client trait for the zone settings API.

use crate::domain::entities::{UniversalSslSettings, UpstreamReply, ZoneCredentials};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface to the third-party API that manages per-zone settings.
///
/// # Implementations
///
/// - [`crate::infrastructure::cloudflare::CloudflareClient`] - Cloudflare REST API over `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ZoneSettingsClient: Send + Sync {
    /// Applies Universal SSL settings to the zone named in `credentials`.
    ///
    /// Issues exactly one request. Any upstream status is returned as a
    /// successful [`UpstreamReply`]; only transport and decoding failures are
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RequestFailed`] if the request cannot be sent or the
    /// reply body is not JSON.
    async fn patch_universal_ssl(
        &self,
        credentials: &ZoneCredentials,
        settings: &UniversalSslSettings,
    ) -> Result<UpstreamReply, AppError>;
}
