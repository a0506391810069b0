use std::sync::Arc;

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::{access_grant, ports::room_service::RoomService},
    domain::entities::{
        config_key::ConfigKey,
        display_name::{DISPLAY_NAME_MAX_CHARS, DISPLAY_NAME_MIN_CHARS, DisplayName},
    },
    infra::{config::AppConfig, livekit::normalize_ws_url},
};

// ============================================================================
// Response Types
// ============================================================================

/// Everything a client needs to connect to the media room.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTicket {
    pub token: String,
    pub room_name: String,
    pub ws_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthCheck {
    pub label: String,
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub room_name: String,
    pub participant_count: usize,
    pub checks: Vec<HealthCheck>,
}

// ============================================================================
// Use Cases
// ============================================================================

pub struct MediaUseCases {
    config: Arc<AppConfig>,
    /// Absent when media credentials are not configured.
    room_service: Option<Arc<dyn RoomService>>,
}

impl MediaUseCases {
    pub fn new(config: Arc<AppConfig>, room_service: Option<Arc<dyn RoomService>>) -> Self {
        Self {
            config,
            room_service,
        }
    }

    pub fn room_name(&self) -> &str {
        &self.config.room_name
    }

    /// Validates the requested display name and mints a participant grant.
    #[instrument(skip(self))]
    pub fn issue_join_ticket(&self, raw_name: Option<&str>) -> AppResult<JoinTicket> {
        let name = raw_name.and_then(DisplayName::parse).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Name must be between {} and {} characters",
                DISPLAY_NAME_MIN_CHARS, DISPLAY_NAME_MAX_CHARS
            ))
        })?;

        let livekit = self.config.livekit().ok_or_else(|| {
            AppError::Misconfigured(
                "LIVEKIT_URL, LIVEKIT_API_KEY and LIVEKIT_API_SECRET must be configured".into(),
            )
        })?;

        let grant = access_grant::mint(
            &name,
            &self.config.room_name,
            livekit.api_key,
            livekit.api_secret,
        )?;

        tracing::info!(
            identity = %grant.identity,
            room = %self.config.room_name,
            "Issued media access grant"
        );

        Ok(JoinTicket {
            token: grant.token,
            room_name: self.config.room_name.clone(),
            ws_url: normalize_ws_url(livekit.url),
        })
    }

    /// Participants in the configured room. Any failure reads as an empty room.
    pub async fn participant_count(&self) -> usize {
        let Some(room_service) = &self.room_service else {
            return 0;
        };

        match room_service.count_participants(&self.config.room_name).await {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(error = %err, room = %self.config.room_name, "Participant lookup failed");
                0
            }
        }
    }

    /// Presence of each required setting plus the current participant count.
    pub async fn health_report(&self) -> HealthReport {
        let checks = ConfigKey::iter()
            .map(|key| HealthCheck {
                label: key.as_str().to_string(),
                ok: self.config.is_set(key),
            })
            .collect();

        HealthReport {
            room_name: self.config.room_name.clone(),
            participant_count: self.participant_count().await,
            checks,
        }
    }
}
