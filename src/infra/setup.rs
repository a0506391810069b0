use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::http::app_state::AppState,
    application::ports::room_service::RoomService,
    infra::{config::AppConfig, livekit::LivekitRoomService},
    use_cases::{gate::GateUseCases, media::MediaUseCases},
};

pub fn init_app_state() -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::from_env());

    init_tracing(config.json_logs);
    log_configuration(&config);

    let room_service = build_room_service(&config);

    Ok(AppState {
        config: config.clone(),
        gate_use_cases: Arc::new(GateUseCases::new(config.clone())),
        media_use_cases: Arc::new(MediaUseCases::new(config, room_service)),
    })
}

/// Management client for diagnostics. Missing or unusable settings only
/// disable the participant count.
fn build_room_service(config: &AppConfig) -> Option<Arc<dyn RoomService>> {
    let livekit = config.livekit()?;
    match LivekitRoomService::new(livekit.url, livekit.api_key, livekit.api_secret) {
        Ok(service) => Some(Arc::new(service)),
        Err(e) => {
            tracing::warn!(error = %e, "LiveKit room service disabled");
            None
        }
    }
}

fn log_configuration(config: &AppConfig) {
    if config.admin_secret_falls_back() {
        tracing::warn!(
            "ADMIN_AUTH_SECRET is not set; admin sessions are signed with ROOM_AUTH_SECRET"
        );
    }
    if config.room_password.is_none() || config.room_auth_secret.is_none() {
        tracing::warn!("ROOM_PASSWORD or ROOM_AUTH_SECRET missing; room login will fail");
    }
    if config.livekit().is_none() {
        tracing::warn!("LiveKit credentials incomplete; joining the call will fail");
    }
    if !config.secure_cookies {
        tracing::warn!("SECURE_COOKIES=false; session cookies will be sent over plain HTTP");
    }
}

pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "leo_meet=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
            .ok();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false) // don’t show target (module path)
                    .with_level(true)
                    .pretty(),
            )
            .try_init()
            .ok();
    }
}
