use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::{scoped_token, signature::constant_time_eq},
    domain::entities::scope::Scope,
    infra::config::AppConfig,
};

/// Password gate for the room and admin surfaces.
///
/// Holds no per-session state: whether a request is authenticated is decided
/// entirely from the cookie it carries.
pub struct GateUseCases {
    config: Arc<AppConfig>,
}

impl GateUseCases {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Checks `password` for `scope` and returns a fresh scoped token.
    ///
    /// Missing configuration is reported before the password is looked at.
    #[instrument(skip(self, password))]
    pub fn login(&self, scope: Scope, password: Option<&str>) -> AppResult<String> {
        let (expected, secret) = self.credentials(scope)?;

        let Some(password) = password else {
            tracing::warn!(?scope, "Login attempt without password");
            return Err(AppError::InvalidPassword(scope));
        };

        if !constant_time_eq(password.as_bytes(), expected.expose_secret().as_bytes()) {
            tracing::warn!(?scope, "Login attempt with wrong password");
            return Err(AppError::InvalidPassword(scope));
        }

        tracing::info!(?scope, "Session granted");
        Ok(scoped_token::encode(scope, secret))
    }

    /// Signing secret for `scope`, if configured.
    pub fn secret(&self, scope: Scope) -> Option<&SecretString> {
        self.config.secret(scope)
    }

    /// Whether `token` grants `scope`. An unconfigured secret authenticates nobody.
    pub fn is_authenticated(&self, scope: Scope, token: Option<&str>) -> bool {
        match (self.secret(scope), token) {
            (Some(secret), Some(token)) => scoped_token::verify(token, scope, secret),
            _ => false,
        }
    }

    /// API flavour of [`Self::is_authenticated`]: 500 without a secret, 401 without a valid token.
    pub fn require(&self, scope: Scope, token: Option<&str>) -> AppResult<()> {
        if self.secret(scope).is_none() {
            return Err(AppError::Misconfigured(format!(
                "{} must be configured",
                secret_var(scope)
            )));
        }
        if !self.is_authenticated(scope, token) {
            return Err(AppError::Unauthorized);
        }
        Ok(())
    }

    fn credentials(&self, scope: Scope) -> AppResult<(&SecretString, &SecretString)> {
        match (self.config.password(scope), self.config.secret(scope)) {
            (Some(password), Some(secret)) => Ok((password, secret)),
            _ => Err(AppError::Misconfigured(format!(
                "{} and {} must be configured",
                password_var(scope),
                secret_var(scope)
            ))),
        }
    }
}

fn password_var(scope: Scope) -> &'static str {
    match scope {
        Scope::Room => "ROOM_PASSWORD",
        Scope::Admin => "ADMIN_PASSWORD",
    }
}

fn secret_var(scope: Scope) -> &'static str {
    match scope {
        Scope::Room => "ROOM_AUTH_SECRET",
        Scope::Admin => "ADMIN_AUTH_SECRET",
    }
}
