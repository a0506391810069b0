use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{gate::GateUseCases, media::MediaUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gate_use_cases: Arc<GateUseCases>,
    pub media_use_cases: Arc<MediaUseCases>,
}
