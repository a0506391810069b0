//! Test data factories.
//!
//! Each factory returns a complete, valid value. Use the closure parameter to
//! override specific fields as needed.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::infra::config::{AppConfig, DEFAULT_ROOM_NAME};

fn secret(value: &str) -> Option<SecretString> {
    Some(SecretString::from(value.to_string()))
}

/// Create a fully configured `AppConfig`.
pub fn create_test_config(overrides: impl FnOnce(&mut AppConfig)) -> AppConfig {
    let mut config = AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        secure_cookies: true,
        json_logs: false,
        room_password: secret("room-pass"),
        room_auth_secret: secret("room-secret"),
        admin_password: secret("admin-pass"),
        admin_auth_secret: secret("admin-secret"),
        livekit_url: Some("wss://media.example.test".to_string()),
        livekit_api_key: Some("lk_key".to_string()),
        livekit_api_secret: secret("lk_secret_with_enough_length_for_hs256"),
        room_name: DEFAULT_ROOM_NAME.to_string(),
    };
    overrides(&mut config);
    config
}
