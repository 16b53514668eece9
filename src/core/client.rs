use crate::domain::model::{RecommendRequest, TagRecommendation, UpstreamReply};
use crate::domain::ports::TagRecommender;
use crate::utils::error::{Result, ViewerError};
use reqwest::Client;

/// Calls the tag-recommendation function URL over HTTP.
///
/// The client carries no timeout and never retries: one slug, one POST.
#[derive(Debug, Clone)]
pub struct HttpTagRecommender {
    client: Client,
    upstream_url: String,
}

impl HttpTagRecommender {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), upstream_url)
    }

    pub fn with_client(client: Client, upstream_url: impl Into<String>) -> Self {
        Self {
            client,
            upstream_url: upstream_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl TagRecommender for HttpTagRecommender {
    async fn recommend(&self, slug: &str) -> Result<UpstreamReply> {
        let request = RecommendRequest {
            slug: slug.to_string(),
        };

        tracing::debug!("Lambda URL: {}", self.upstream_url);
        tracing::debug!("Request slug: {}", slug);

        let response = self
            .client
            .post(&self.upstream_url)
            .json(&request)
            .send()
            .await
            .map_err(ViewerError::transport)?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.map_err(ViewerError::transport)?;
            tracing::error!("Error response ({}): {}", status, body);
            return Err(ViewerError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(ViewerError::transport)?;
        tracing::debug!("Response body: {} bytes", text.len());

        // JSON 解析失敗也算傳輸錯誤
        let result: TagRecommendation =
            serde_json::from_str(&text).map_err(ViewerError::transport)?;
        tracing::debug!("Parsed {} tags", result.selected_tags.len());

        Ok(UpstreamReply {
            upstream_url: self.upstream_url.clone(),
            status: status.as_u16(),
            body_size: text.len(),
            received_at: chrono::Utc::now(),
            result,
        })
    }

    fn upstream_url(&self) -> &str {
        &self.upstream_url
    }
}
