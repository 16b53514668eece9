use crate::domain::model::UpstreamReply;
use crate::domain::ports::TagRecommender;
use crate::utils::error::ViewerError;

/// Outcome of one slug submission, ready to be rendered.
#[derive(Debug)]
pub enum Page {
    /// No slug given: show the input form and usage notes.
    Form,
    /// The upstream call failed; nothing from it is rendered.
    Failed { slug: String, error: ViewerError },
    Results { slug: String, reply: UpstreamReply },
}

impl Page {
    pub fn slug(&self) -> &str {
        match self {
            Page::Form => "",
            Page::Failed { slug, .. } | Page::Results { slug, .. } => slug,
        }
    }
}

/// Trims the raw slug; blank counts as missing.
pub fn normalize_slug(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// First `slug` value in an url-encoded query or form body.
///
/// Repeated keys are not an error; later values are ignored.
pub fn slug_from_query(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    url::form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == "slug")
        .map(|(_, value)| value.into_owned())
}

/// Runs the whole submit → fetch → branch cycle for one request.
///
/// Makes at most one upstream call. Errors are folded into `Page::Failed`
/// so every front end renders them inline.
pub async fn run_cycle<R>(recommender: &R, raw_slug: Option<&str>) -> Page
where
    R: TagRecommender + ?Sized,
{
    let Some(slug) = normalize_slug(raw_slug) else {
        tracing::debug!("No slug supplied, rendering form");
        return Page::Form;
    };

    tracing::info!("🔎 Requesting tags for slug: {}", slug);
    tracing::debug!("Upstream: {}", recommender.upstream_url());

    match recommender.recommend(&slug).await {
        Ok(reply) => {
            tracing::info!(
                "✅ Received {} tags for {}",
                reply.result.selected_tags.len(),
                slug
            );
            Page::Results { slug, reply }
        }
        Err(error) => {
            tracing::error!(
                "❌ Tag request failed for {}: {} (Category: {:?})",
                slug,
                error,
                error.category()
            );
            Page::Failed { slug, error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TagRecommendation;
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRecommender {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingRecommender {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl TagRecommender for CountingRecommender {
        async fn recommend(&self, slug: &str) -> Result<UpstreamReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ViewerError::UpstreamError {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(UpstreamReply {
                upstream_url: "http://stub".to_string(),
                status: 200,
                body_size: 2,
                received_at: chrono::Utc::now(),
                result: TagRecommendation {
                    slug: Some(slug.to_string()),
                    ..Default::default()
                },
            })
        }

        fn upstream_url(&self) -> &str {
            "http://stub"
        }
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug(None), None);
        assert_eq!(normalize_slug(Some("")), None);
        assert_eq!(normalize_slug(Some("   ")), None);
        assert_eq!(
            normalize_slug(Some("  example-slug ")),
            Some("example-slug".to_string())
        );
    }

    #[test]
    fn test_slug_from_query_first_value_wins() {
        assert_eq!(slug_from_query(None), None);
        assert_eq!(slug_from_query(Some("")), None);
        assert_eq!(slug_from_query(Some("foo=1")), None);
        assert_eq!(
            slug_from_query(Some("slug=a&slug=b")).as_deref(),
            Some("a")
        );
        assert_eq!(
            slug_from_query(Some("foo=1&slug=a%20b+c")).as_deref(),
            Some("a b c")
        );
        assert_eq!(slug_from_query(Some("slug=")).as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_missing_slug_makes_no_call() {
        let stub = CountingRecommender::new(false);
        let page = run_cycle(&stub, None).await;
        assert!(matches!(page, Page::Form));

        let page = run_cycle(&stub, Some("  ")).await;
        assert!(matches!(page, Page::Form));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_slug_is_trimmed_before_call() {
        let stub = CountingRecommender::new(false);
        let page = run_cycle(&stub, Some(" example-slug ")).await;

        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        match page {
            Page::Results { slug, reply } => {
                assert_eq!(slug, "example-slug");
                assert_eq!(reply.result.slug.as_deref(), Some("example-slug"));
            }
            other => panic!("unexpected page: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_becomes_failed_page() {
        let stub = CountingRecommender::new(true);
        let page = run_cycle(&stub, Some("x")).await;

        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        assert_eq!(page.slug(), "x");
        match page {
            Page::Failed { error, .. } => assert_eq!(error.user_message(), "boom"),
            other => panic!("unexpected page: {:?}", other),
        }
    }
}
