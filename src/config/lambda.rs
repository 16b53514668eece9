use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

/// Function URL the edge handler always calls.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://fumsphmmxktt4afevrre332fvu0hfdal.lambda-url.us-west-2.on.aws/";

/// Settings for the edge variant. The upstream URL is fixed at build time.
#[derive(Debug, Clone)]
pub struct EdgeConfig {
    pub upstream_url: String,
}

impl EdgeConfig {
    pub fn hard_coded() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self::hard_coded()
    }
}

impl Validate for EdgeConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream_url", &self.upstream_url)
    }
}
