// Route exports
pub mod matches;
pub mod quiz;
pub mod users;

use actix_web::web;
use std::sync::Arc;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::services::{CacheManager, EmbeddingProvider, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub cache: Arc<CacheManager>,
    pub embedder: Arc<EmbeddingProvider>,
    pub matcher: Matcher,
    pub limits: MatchLimits,
}

/// Bounds applied to match requests
#[derive(Debug, Clone, Copy)]
pub struct MatchLimits {
    pub default_limit: usize,
    pub max_limit: usize,
    pub candidate_pool: usize,
}

impl MatchLimits {
    pub fn from_settings(settings: &MatchingSettings) -> Self {
        Self {
            default_limit: usize::from(settings.default_limit.unwrap_or(20)),
            max_limit: usize::from(settings.max_limit.unwrap_or(100)),
            candidate_pool: settings.candidate_pool.unwrap_or(500),
        }
    }

    /// Requested limit, or the default, capped at the maximum
    pub fn resolve(&self, requested: Option<u16>) -> usize {
        requested
            .map(usize::from)
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(quiz::configure)
            .configure(users::configure)
            .configure(matches::configure),
    );
}
