//! Cloudflare REST API implementation of [`ZoneSettingsClient`].

use crate::domain::clients::ZoneSettingsClient;
use crate::domain::entities::{UniversalSslSettings, UpstreamReply, ZoneCredentials};
use crate::error::AppError;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use url::Url;

/// Public Cloudflare API v4 base URL.
pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

const AUTH_EMAIL_HEADER: &str = "X-Auth-Email";
const AUTH_KEY_HEADER: &str = "X-Auth-Key";

/// HTTP client for the Cloudflare zone settings API.
///
/// Authenticates with the legacy global API key scheme (`X-Auth-Email` and
/// `X-Auth-Key`), using whatever credentials the caller supplied. The
/// underlying [`reqwest::Client`] pools connections across requests; no
/// timeout or retry is applied to the call.
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    http_client: ReqwestClient,
    base_url: Url,
}

impl CloudflareClient {
    /// Creates a client rooted at `base_url` (e.g. [`DEFAULT_API_BASE`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid base URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).context("Invalid Cloudflare API base URL")?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Cloudflare API base URL cannot be a base: {base_url}");
        }

        let http_client = ReqwestClient::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Builds `{base}/zones/{zone_id}/ssl/universal/settings`.
    ///
    /// The zone id is pushed as a single path segment, so `/`, `?` and `#`
    /// in it are percent-encoded instead of changing the target resource.
    pub fn universal_ssl_url(&self, zone_id: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::request_failed("Invalid Cloudflare API base URL"))?
            .pop_if_empty()
            .extend(["zones", zone_id, "ssl", "universal", "settings"]);

        Ok(url)
    }
}

#[async_trait]
impl ZoneSettingsClient for CloudflareClient {
    async fn patch_universal_ssl(
        &self,
        credentials: &ZoneCredentials,
        settings: &UniversalSslSettings,
    ) -> Result<UpstreamReply, AppError> {
        let url = self.universal_ssl_url(credentials.zone_id())?;

        tracing::debug!(zone_id = credentials.zone_id(), "Patching Universal SSL settings");

        let response = self
            .http_client
            .patch(url)
            .header(AUTH_EMAIL_HEADER, credentials.email())
            .header(AUTH_KEY_HEADER, credentials.api_key())
            .json(settings)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body: Value = response.json().await?;

        tracing::info!(
            zone_id = credentials.zone_id(),
            status,
            "Cloudflare responded"
        );

        Ok(UpstreamReply::new(status, body))
    }
}
