use std::sync::Arc;

use crate::application::services::SamplerService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub sampler_service: Arc<SamplerService>,
    pub settings: Settings,
}
