use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

use crate::domain::entities::{config_key::ConfigKey, scope::Scope};

pub const DEFAULT_ROOM_NAME: &str = "friends-room";

/// Process-wide configuration, read once at startup.
///
/// Passwords, scope secrets and media credentials are optional here: a missing
/// value turns the requests that need it into a 500 instead of stopping the
/// server, so the admin checklist can still report what is absent.
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Adds the `Secure` attribute to session cookies. Only disable for local plain-HTTP runs.
    pub secure_cookies: bool,
    /// Emit JSON log lines instead of the pretty console format.
    pub json_logs: bool,
    pub room_password: Option<SecretString>,
    pub room_auth_secret: Option<SecretString>,
    pub admin_password: Option<SecretString>,
    /// Dedicated admin secret. When unset the room secret signs admin tokens too.
    pub admin_auth_secret: Option<SecretString>,
    pub livekit_url: Option<String>,
    pub livekit_api_key: Option<String>,
    pub livekit_api_secret: Option<SecretString>,
    pub room_name: String,
}

/// Media service credentials, present only when all three are configured.
pub struct LivekitCredentials<'a> {
    pub url: &'a str,
    pub api_key: &'a str,
    pub api_secret: &'a SecretString,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3000".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let secure_cookies: bool = get_env_default("SECURE_COOKIES", true);
        let json_logs = optional_env("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        Self {
            bind_addr,
            cors_origin,
            secure_cookies,
            json_logs,
            room_password: optional_secret("ROOM_PASSWORD"),
            room_auth_secret: optional_secret("ROOM_AUTH_SECRET"),
            admin_password: optional_secret("ADMIN_PASSWORD"),
            admin_auth_secret: optional_secret("ADMIN_AUTH_SECRET"),
            livekit_url: optional_env("LIVEKIT_URL"),
            livekit_api_key: optional_env("LIVEKIT_API_KEY"),
            livekit_api_secret: optional_secret("LIVEKIT_API_SECRET"),
            room_name: optional_env("LIVEKIT_ROOM_NAME")
                .unwrap_or_else(|| DEFAULT_ROOM_NAME.to_string()),
        }
    }

    pub fn password(&self, scope: Scope) -> Option<&SecretString> {
        match scope {
            Scope::Room => self.room_password.as_ref(),
            Scope::Admin => self.admin_password.as_ref(),
        }
    }

    pub fn secret(&self, scope: Scope) -> Option<&SecretString> {
        match scope {
            Scope::Room => self.room_auth_secret.as_ref(),
            Scope::Admin => self
                .admin_auth_secret
                .as_ref()
                .or(self.room_auth_secret.as_ref()),
        }
    }

    /// True when admin tokens are signed with the room secret.
    pub fn admin_secret_falls_back(&self) -> bool {
        self.admin_auth_secret.is_none() && self.room_auth_secret.is_some()
    }

    pub fn livekit(&self) -> Option<LivekitCredentials<'_>> {
        Some(LivekitCredentials {
            url: self.livekit_url.as_deref()?,
            api_key: self.livekit_api_key.as_deref()?,
            api_secret: self.livekit_api_secret.as_ref()?,
        })
    }

    pub fn is_set(&self, key: ConfigKey) -> bool {
        match key {
            ConfigKey::RoomPassword => self.room_password.is_some(),
            ConfigKey::RoomAuthSecret => self.room_auth_secret.is_some(),
            ConfigKey::LivekitUrl => self.livekit_url.is_some(),
            ConfigKey::LivekitApiKey => self.livekit_api_key.is_some(),
            ConfigKey::LivekitApiSecret => self.livekit_api_secret.is_some(),
            ConfigKey::AdminPassword => self.admin_password.is_some(),
        }
    }
}

// Empty values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn optional_secret(key: &str) -> Option<SecretString> {
    optional_env(key).map(|v| SecretString::new(v.into()))
}
