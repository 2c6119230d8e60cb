//! Handler for the add-ssl relay endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::add_ssl::AddSslRequest;
use crate::domain::entities::UpstreamReply;
use crate::error::AppError;
use crate::state::AppState;

/// Enables Universal SSL on a Cloudflare zone with the caller's credentials.
///
/// # Endpoint
///
/// `POST /api/add-ssl`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "user@example.com",
///   "zone_id": "023e105f4ecef8ad9ca31a8372d0c353",
///   "api_key": "c2547eb745079dac9320b638f5e225cf483cc5cfdda41"
/// }
/// ```
///
/// # Response Codes
///
/// - **Upstream status**: Cloudflare's JSON reply, relayed unchanged
/// - **400 Bad Request**: A field is missing or empty
/// - **500 Internal Server Error**: Malformed or `null` body, network failure, or non-JSON reply
///
/// The body is read as raw bytes rather than through [`Json`] so that a
/// request without a JSON content type is still accepted, and a malformed
/// body is reported as a failed request.
pub async fn add_ssl_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let credentials = AddSslRequest::from_body(&body)?.into_credentials()?;

    let reply = state.ssl_service.enable_universal_ssl(credentials).await?;

    relay_response(reply)
}

/// Wraps an upstream reply with the permissive CORS headers the form expects.
fn relay_response(reply: UpstreamReply) -> Result<Response, AppError> {
    let status = StatusCode::from_u16(reply.status)
        .map_err(|e| AppError::request_failed(e.to_string()))?;

    Ok((
        status,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        Json(reply.body),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relay_response_keeps_status_and_adds_cors() {
        let response = relay_response(UpstreamReply::new(403, json!({ "success": false }))).unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_relay_response_rejects_impossible_status() {
        let result = relay_response(UpstreamReply::new(42, json!({})));

        assert!(matches!(result, Err(AppError::RequestFailed(_))));
    }
}
