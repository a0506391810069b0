//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` assembles an `AppState` from `create_test_config`
//! and, optionally, a stubbed room service. Without one the participant
//! count falls back to zero and no network call is made.

use std::sync::Arc;

use axum_extra::extract::cookie::Cookie;
use secrecy::SecretString;

use crate::{
    adapters::http::{app_state::AppState, session},
    application::{ports::room_service::RoomService, scoped_token},
    domain::entities::scope::Scope,
    infra::config::AppConfig,
    test_utils::create_test_config,
    use_cases::{gate::GateUseCases, media::MediaUseCases},
};

pub struct TestAppStateBuilder {
    config: AppConfig,
    room_service: Option<Arc<dyn RoomService>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            config: create_test_config(|_| {}),
            room_service: None,
        }
    }

    pub fn with_config(mut self, overrides: impl FnOnce(&mut AppConfig)) -> Self {
        overrides(&mut self.config);
        self
    }

    pub fn with_room_service(mut self, room_service: Arc<dyn RoomService>) -> Self {
        self.room_service = Some(room_service);
        self
    }

    /// A valid session token for `scope` under the current configuration.
    /// Scopes without a secret get a token signed with a throwaway key.
    pub fn token_for(&self, scope: Scope) -> String {
        match self.config.secret(scope) {
            Some(secret) => scoped_token::encode(scope, secret),
            None => scoped_token::encode(scope, &SecretString::from("unconfigured".to_string())),
        }
    }

    pub fn build(self) -> AppState {
        let config = Arc::new(self.config);
        AppState {
            config: config.clone(),
            gate_use_cases: Arc::new(GateUseCases::new(config.clone())),
            media_use_cases: Arc::new(MediaUseCases::new(config, self.room_service)),
        }
    }
}

/// Session cookie the room login would have set.
pub fn room_cookie(builder: &TestAppStateBuilder) -> Cookie<'static> {
    session::session_cookie(Scope::Room, builder.token_for(Scope::Room), true)
}

/// Session cookie the admin login would have set.
pub fn admin_cookie(builder: &TestAppStateBuilder) -> Cookie<'static> {
    session::session_cookie(Scope::Admin, builder.token_for(Scope::Admin), true)
}
