use thiserror::Error;

use crate::domain::entities::scope::Scope;

#[derive(Error, Debug)]
pub enum AppError {
    /// A password, secret or media credential is not configured.
    #[error("{0}")]
    Misconfigured(String),

    #[error("{}", invalid_password_message(.0))]
    InvalidPassword(Scope),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn invalid_password_message(scope: &Scope) -> &'static str {
    match scope {
        Scope::Room => "Invalid password",
        Scope::Admin => "Invalid admin password",
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Misconfigured(_) => ErrorCode::Misconfigured,
            AppError::InvalidPassword(_) => ErrorCode::InvalidCredentials,
            AppError::Unauthorized => ErrorCode::Unauthorized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Upstream(_) => ErrorCode::UpstreamError,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Misconfigured,
    InvalidCredentials,
    Unauthorized,
    InvalidInput,
    UpstreamError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Misconfigured => "MISCONFIGURED",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::UpstreamError => "UPSTREAM_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
