//! DTOs for the add-ssl endpoint.

use crate::domain::entities::ZoneCredentials;
use crate::error::AppError;
use serde::Deserialize;
use serde_json::Value;
use serde_with::{DefaultOnError, serde_as};
use validator::Validate;

/// Credentials submitted by the browser form.
///
/// A field that is absent, `null` or not a string deserializes to `None`, so
/// a wrongly typed field is reported as missing instead of as a parse
/// failure.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddSslRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub zone_id: Option<String>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub api_key: Option<String>,
}

impl AddSslRequest {
    /// Parses a raw request body.
    ///
    /// Fields are only read from a JSON object: arrays, strings, numbers and
    /// booleans carry no named fields and yield an empty request. When a key
    /// repeats, the last value wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RequestFailed`] if the body is not JSON or is `null`.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Err(AppError::request_failed(
                "Cannot read credentials from a null body",
            )),
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            _ => Ok(Self::default()),
        }
    }

    /// Validates the request and converts it into domain credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is missing or empty.
    pub fn into_credentials(self) -> Result<ZoneCredentials, AppError> {
        self.validate()?;

        Ok(ZoneCredentials::new(
            self.email.unwrap_or_default(),
            self.zone_id.unwrap_or_default(),
            self.api_key.unwrap_or_default(),
        ))
    }
}
