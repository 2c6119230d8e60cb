//! Domain entity holding the caller-supplied Cloudflare credentials.

use std::fmt;

/// Credentials for a single zone settings call.
///
/// Fields are checked for emptiness at the HTTP boundary
/// ([`crate::api::dto::add_ssl::AddSslRequest::into_credentials`]).
/// The `Debug` output redacts the API key so the value can appear in spans
/// and error logs without leaking it.
#[derive(Clone, PartialEq, Eq)]
pub struct ZoneCredentials {
    email: String,
    zone_id: String,
    api_key: String,
}

impl ZoneCredentials {
    pub fn new(email: String, zone_id: String, api_key: String) -> Self {
        Self {
            email,
            zone_id,
            api_key,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ZoneCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneCredentials")
            .field("email", &self.email)
            .field("zone_id", &self.zone_id)
            .field("api_key", &"***")
            .finish()
    }
}
