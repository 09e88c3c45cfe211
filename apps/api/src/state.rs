use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::features::FeatureExtractor;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::weather::WeatherClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub weather: WeatherClient,
    /// Pluggable image feature backend. Default: PlaceholderExtractor.
    pub extractor: Arc<dyn FeatureExtractor>,
    pub config: Config,
}
