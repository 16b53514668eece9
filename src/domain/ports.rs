use crate::domain::model::UpstreamReply;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TagRecommender: Send + Sync {
    /// Issues exactly one request for `slug`. Non-2xx responses come back as
    /// `ViewerError::UpstreamError`, network and decode failures as
    /// `ViewerError::TransportError`.
    async fn recommend(&self, slug: &str) -> Result<UpstreamReply>;

    fn upstream_url(&self) -> &str;
}
