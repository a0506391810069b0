use axum::{Json, Router, body::Bytes, extract::State, routing::post};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, session::scope_token},
    app_error::AppResult,
    domain::entities::scope::Scope,
    use_cases::media::JoinTicket,
};

#[derive(Deserialize)]
struct JoinPayload {
    #[serde(default)]
    name: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/external-media-token", post(issue_token))
}

/// POST /api/external-media-token
/// Mints a media access grant for a holder of a valid room cookie.
async fn issue_token(
    State(app_state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> AppResult<Json<JoinTicket>> {
    app_state
        .gate_use_cases
        .require(Scope::Room, scope_token(&jar, Scope::Room))?;

    let payload: Option<JoinPayload> = serde_json::from_slice(&body).ok();
    let name = payload.as_ref().and_then(|p| p.name.as_deref());

    let ticket = app_state.media_use_cases.issue_join_ticket(name)?;
    Ok(Json(ticket))
}
