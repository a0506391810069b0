use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Misconfigured(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::InvalidPassword(_) | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        // Log the error before it gets converted into a status response.
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let message = match &self {
            // Internal details stay in the logs.
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::Upstream(_) => "Media service unavailable".to_string(),
            other => other.to_string(),
        };
        error_resp(status, self.code(), message)
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: String) -> Response {
    let body = serde_json::json!({ "error": message, "code": code.as_str() });
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::scope::Scope;

    #[test]
    fn statuses_follow_error_taxonomy() {
        let cases = [
            (AppError::Misconfigured("X".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InvalidPassword(Scope::Room), StatusCode::UNAUTHORIZED),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::InvalidInput("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::Upstream("down".into()), StatusCode::BAD_GATEWAY),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
