use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::IgnoredAny};
use url::Url;

use super::{error::InfraError, http_client::try_build_client};
use crate::{
    app_error::{AppError, AppResult},
    application::{
        access_grant,
        ports::room_service::RoomService,
    },
};

const LIST_PARTICIPANTS_PATH: &str = "twirp/livekit.RoomService/ListParticipants";

/// Address handed to browsers: the configured URL minus one trailing slash.
pub fn normalize_ws_url(ws_url: &str) -> String {
    ws_url.strip_suffix('/').unwrap_or(ws_url).to_string()
}

/// Management API base for a client-facing URL (`wss` -> `https`, `ws` -> `http`).
/// The returned path always ends with `/` so endpoint paths can be joined onto it.
pub fn to_http_url(ws_url: &str) -> Result<Url, InfraError> {
    let mut url = Url::parse(ws_url).map_err(InfraError::InvalidLivekitUrl)?;

    let scheme = match url.scheme() {
        "wss" | "https" => "https",
        "ws" | "http" => "http",
        other => return Err(InfraError::UnsupportedLivekitScheme(other.to_string())),
    };
    url.set_scheme(scheme)
        .map_err(|_| InfraError::UnsupportedLivekitScheme(url.scheme().to_string()))?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[derive(Serialize)]
struct ListParticipantsRequest<'a> {
    room: &'a str,
}

// Only the number of entries is used; their contents are skipped.
#[derive(Deserialize)]
struct ListParticipantsResponse {
    #[serde(default)]
    participants: Vec<IgnoredAny>,
}

/// LiveKit RoomService over Twirp/JSON.
pub struct LivekitRoomService {
    client: Client,
    base_url: Url,
    api_key: String,
    api_secret: SecretString,
}

impl LivekitRoomService {
    pub fn new(ws_url: &str, api_key: &str, api_secret: &SecretString) -> Result<Self, InfraError> {
        Ok(Self {
            client: try_build_client().map_err(InfraError::HttpClient)?,
            base_url: to_http_url(ws_url)?,
            api_key: api_key.to_string(),
            api_secret: SecretString::from(api_secret.expose_secret().to_string()),
        })
    }
}

#[async_trait]
impl RoomService for LivekitRoomService {
    async fn count_participants(&self, room_name: &str) -> AppResult<usize> {
        let token = access_grant::mint_room_admin(room_name, &self.api_key, &self.api_secret)?;
        let endpoint = self
            .base_url
            .join(LIST_PARTICIPANTS_PATH)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(token)
            .json(&ListParticipantsRequest { room: room_name })
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("RoomService request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "RoomService returned {}",
                status
            )));
        }

        let body: ListParticipantsResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid RoomService response: {}", e)))?;
        Ok(body.participants.len())
    }
}
