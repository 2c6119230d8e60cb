//! Universal SSL settings body and the upstream reply.

use serde::Serialize;
use serde_json::Value;

/// Certificate authority requested when none is configured.
pub const DEFAULT_CERTIFICATE_AUTHORITY: &str = "ssl_com";

/// Body of `PATCH /zones/{zone_id}/ssl/universal/settings`.
///
/// ```json
/// { "enabled": true, "certificate_authority": "ssl_com" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniversalSslSettings {
    pub enabled: bool,
    pub certificate_authority: String,
}

impl UniversalSslSettings {
    /// Settings that turn Universal SSL on with the given certificate authority.
    pub fn enable(certificate_authority: impl Into<String>) -> Self {
        Self {
            enabled: true,
            certificate_authority: certificate_authority.into(),
        }
    }
}

impl Default for UniversalSslSettings {
    fn default() -> Self {
        Self::enable(DEFAULT_CERTIFICATE_AUTHORITY)
    }
}

/// Status and JSON body returned by the zone settings API, relayed unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

impl UpstreamReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}
