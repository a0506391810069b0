//! Password login/logout for the room and admin scopes.
//!
//! Both scopes share one set of handlers; the thin wrappers only pick the scope.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    response::IntoResponse,
    routing::post,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{
        app_state::AppState,
        session::{cleared_cookie, scope_token, session_cookie},
    },
    app_error::AppResult,
    domain::entities::scope::Scope,
};

#[derive(Deserialize)]
struct LoginPayload {
    #[serde(default)]
    password: Option<String>,
}

#[derive(Serialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Serialize)]
struct StatusResponse {
    authenticated: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/auth",
            post(room_login).delete(room_logout).get(room_status),
        )
        .route(
            "/admin-auth",
            post(admin_login).delete(admin_logout).get(admin_status),
        )
}

async fn room_login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    login(Scope::Room, &app_state, jar, &body)
}

async fn room_logout(State(app_state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    logout(Scope::Room, &app_state, jar)
}

async fn room_status(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    status(Scope::Room, &app_state, &jar)
}

async fn admin_login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    login(Scope::Admin, &app_state, jar, &body)
}

async fn admin_logout(State(app_state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    logout(Scope::Admin, &app_state, jar)
}

async fn admin_status(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    status(Scope::Admin, &app_state, &jar)
}

// An unreadable body or a non-string password is just a wrong password.
fn login(
    scope: Scope,
    app_state: &AppState,
    jar: CookieJar,
    body: &[u8],
) -> AppResult<(CookieJar, Json<OkResponse>)> {
    let payload: Option<LoginPayload> = serde_json::from_slice(body).ok();
    let password = payload.as_ref().and_then(|p| p.password.as_deref());

    let token = app_state.gate_use_cases.login(scope, password)?;
    let jar = jar.add(session_cookie(scope, token, app_state.config.secure_cookies));
    Ok((jar, Json(OkResponse { ok: true })))
}

fn logout(scope: Scope, app_state: &AppState, jar: CookieJar) -> (CookieJar, Json<OkResponse>) {
    let jar = jar.add(cleared_cookie(scope, app_state.config.secure_cookies));
    (jar, Json(OkResponse { ok: true }))
}

fn status(scope: Scope, app_state: &AppState, jar: &CookieJar) -> AppResult<Json<StatusResponse>> {
    app_state
        .gate_use_cases
        .require(scope, scope_token(jar, scope))?;
    Ok(Json(StatusResponse {
        authenticated: true,
    }))
}
