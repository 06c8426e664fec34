use std::sync::Arc;

use axum::http::HeaderMap;

use crate::analysis::analyzer::AnswerAnalyzer;
use crate::config::Config;
use crate::errors::AppError;
use crate::rate_limit::{client_identifier, RateLimitDecision, RateLimiter};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub rate_limiter: Arc<RateLimiter>,
    /// `None` when no LLM key is configured; analysis then answers 503.
    pub analyzer: Option<Arc<dyn AnswerAnalyzer>>,
}

impl AppState {
    pub fn new(config: Config, analyzer: Option<Arc<dyn AnswerAnalyzer>>) -> Self {
        Self {
            config,
            rate_limiter: Arc::new(RateLimiter::new()),
            analyzer,
        }
    }

    /// Counts the request against the caller's window. Over-limit requests
    /// become `AppError::RateLimited`.
    pub fn enforce_rate_limit(&self, headers: &HeaderMap) -> Result<RateLimitDecision, AppError> {
        let identifier = client_identifier(headers, None);
        let decision = self.rate_limiter.check(
            &identifier,
            self.config.rate_limit_requests,
            self.config.rate_limit_window_seconds,
        );
        if decision.allowed {
            Ok(decision)
        } else {
            Err(AppError::RateLimited(decision))
        }
    }
}
