//! Universal SSL relay service.

use crate::domain::clients::ZoneSettingsClient;
use crate::domain::entities::{UniversalSslSettings, UpstreamReply, ZoneCredentials};
use crate::error::AppError;
use std::sync::Arc;

/// Service that enables Universal SSL for a caller's zone.
///
/// Holds the fixed settings body and forwards each request to the zone
/// settings API exactly once. Nothing is retried, cached or stored.
pub struct UniversalSslService<C: ZoneSettingsClient + ?Sized> {
    client: Arc<C>,
    settings: UniversalSslSettings,
}

impl<C: ZoneSettingsClient + ?Sized> UniversalSslService<C> {
    /// Creates a new service sending `settings` on every call.
    pub fn new(client: Arc<C>, settings: UniversalSslSettings) -> Self {
        Self { client, settings }
    }

    /// Enables Universal SSL for the zone in `credentials`.
    ///
    /// The upstream status is not interpreted: a Cloudflare error reply
    /// (wrong key, unknown zone) is still an `Ok` reply to be relayed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RequestFailed`] if the upstream call fails or its
    /// reply cannot be decoded.
    pub async fn enable_universal_ssl(
        &self,
        credentials: ZoneCredentials,
    ) -> Result<UpstreamReply, AppError> {
        self.client
            .patch_universal_ssl(&credentials, &self.settings)
            .await
    }
}
