#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use universal_ssl_relay::application::services::UniversalSslService;
use universal_ssl_relay::domain::clients::ZoneSettingsClient;
use universal_ssl_relay::domain::entities::{
    UniversalSslSettings, UpstreamReply, ZoneCredentials,
};
use universal_ssl_relay::error::AppError;
use universal_ssl_relay::state::AppState;
use universal_ssl_relay::web::Locale;

/// Scripted outcome returned by [`StubClient`].
pub enum StubOutcome {
    Reply(UpstreamReply),
    Fail(String),
}

/// Zone settings client that records every call and returns a fixed outcome.
pub struct StubClient {
    outcome: StubOutcome,
    calls: Mutex<Vec<(ZoneCredentials, UniversalSslSettings)>>,
}

impl StubClient {
    pub fn replying(status: u16, body: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::Reply(UpstreamReply::new(status, body)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::Fail(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(ZoneCredentials, UniversalSslSettings)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ZoneSettingsClient for StubClient {
    async fn patch_universal_ssl(
        &self,
        credentials: &ZoneCredentials,
        settings: &UniversalSslSettings,
    ) -> Result<UpstreamReply, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((credentials.clone(), settings.clone()));

        match &self.outcome {
            StubOutcome::Reply(reply) => Ok(reply.clone()),
            StubOutcome::Fail(message) => Err(AppError::request_failed(message.clone())),
        }
    }
}

pub fn create_test_state(client: Arc<dyn ZoneSettingsClient>, locale: Locale) -> AppState {
    let ssl_service = Arc::new(UniversalSslService::new(
        client,
        UniversalSslSettings::default(),
    ));

    AppState::new(ssl_service, locale)
}

pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "email": "user@example.com",
        "zone_id": "023e105f4ecef8ad9ca31a8372d0c353",
        "api_key": "c2547eb745079dac9320b638f5e225cf483cc5cfdda41"
    })
}
