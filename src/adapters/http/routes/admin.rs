use axum::{Json, Router, extract::State, routing::get};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    adapters::http::{app_state::AppState, session::scope_token},
    app_error::AppResult,
    domain::entities::scope::Scope,
    use_cases::media::HealthReport,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/health", get(health))
}

/// GET /api/admin/health
/// Configuration checklist and participant count for admins.
async fn health(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> AppResult<Json<HealthReport>> {
    app_state
        .gate_use_cases
        .require(Scope::Admin, scope_token(&jar, Scope::Admin))?;

    Ok(Json(app_state.media_use_cases.health_report().await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use std::sync::Arc;

    use crate::test_utils::{StubRoomService, TestAppStateBuilder, admin_cookie, room_cookie};

    fn build_test_router(app_state: AppState) -> Router<()> {
        router().with_state(app_state)
    }

    #[tokio::test]
    async fn requires_admin_cookie() {
        let builder = TestAppStateBuilder::new();
        let room = room_cookie(&builder);
        let server = TestServer::new(build_test_router(builder.build())).unwrap();

        server
            .get("/admin/health")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        server
            .get("/admin/health")
            .add_cookie(room)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn reports_checklist_and_participants() {
        let builder = TestAppStateBuilder::new()
            .with_config(|c| c.livekit_api_secret = None)
            .with_room_service(Arc::new(StubRoomService::with_participants(4)));
        let cookie = admin_cookie(&builder);
        let server = TestServer::new(build_test_router(builder.build())).unwrap();

        let response = server.get("/admin/health").add_cookie(cookie).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["roomName"], "friends-room");
        assert_eq!(body["participantCount"], 4);
        assert_eq!(body["checks"][4], json!({ "label": "LIVEKIT_API_SECRET", "ok": false }));
        assert_eq!(body["checks"][0], json!({ "label": "ROOM_PASSWORD", "ok": true }));
        // Values themselves are never exposed.
        assert!(!response.text().contains("room-pass"));
    }

    #[tokio::test]
    async fn failing_media_service_reports_zero_participants() {
        let builder =
            TestAppStateBuilder::new().with_room_service(Arc::new(StubRoomService::failing()));
        let cookie = admin_cookie(&builder);
        let server = TestServer::new(build_test_router(builder.build())).unwrap();

        let response = server.get("/admin/health").add_cookie(cookie).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["participantCount"], 0);
    }
}
