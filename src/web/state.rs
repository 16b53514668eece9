//! Application State
//!
//! Arc-wrapped state shared across handlers.

use std::sync::Arc;

use crate::core::client::HttpTagRecommender;
use crate::domain::ports::TagRecommender;

/// Shared application state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    recommender: Arc<dyn TagRecommender>,
}

impl AppState {
    pub fn new(recommender: Arc<dyn TagRecommender>) -> Self {
        Self { recommender }
    }

    /// State backed by the HTTP client for `upstream_url`.
    pub fn with_upstream(upstream_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTagRecommender::new(upstream_url)))
    }

    pub fn recommender(&self) -> &dyn TagRecommender {
        self.recommender.as_ref()
    }
}
