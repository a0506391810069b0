pub mod admin;
pub mod gate;
pub mod media_token;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(gate::router())
        .merge(media_token::router())
        .merge(admin::router())
}
