//! Edge request handler.
//!
//! Takes a function-URL style event, runs the same cycle as the server and
//! returns the page as a raw HTML string.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::cycle::{run_cycle, slug_from_query};
use crate::domain::ports::TagRecommender;
use crate::templates::render_page;
use crate::utils::error::Result;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRequest {
    #[serde(default)]
    pub raw_query_string: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl EdgeRequest {
    /// `slug` from the parsed parameters, else from the raw query string.
    pub fn slug(&self) -> Option<String> {
        if let Some(slug) = self
            .query_string_parameters
            .as_ref()
            .and_then(|params| params.get("slug"))
        {
            return Some(slug.clone());
        }

        slug_from_query(self.raw_query_string.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl EdgeResponse {
    pub fn html(body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), HTML_CONTENT_TYPE.to_string());
        Self {
            status_code: 200,
            headers,
            body,
        }
    }
}

pub async fn handle_request<R>(recommender: &R, request: &EdgeRequest) -> Result<EdgeResponse>
where
    R: TagRecommender + ?Sized,
{
    let slug = request.slug();
    let page = run_cycle(recommender, slug.as_deref()).await;
    let body = render_page(&page)?;
    Ok(EdgeResponse::html(body))
}
