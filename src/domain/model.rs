use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::lenient::{lenient, lenient_tags, lenient_text};

/// Body sent to the tag-recommendation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendRequest {
    pub slug: String,
}

/// One recommended tag. `id` and `score` are kept as raw JSON so they
/// render exactly as the upstream sent them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default)]
    pub score: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary_input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary_output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ranking_input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ranking_output_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub used_summary: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostJpy {
    #[serde(default, deserialize_with = "lenient")]
    pub total_cost_jpy: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub input_cost_jpy: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub output_cost_jpy: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub exchange_rate: Option<f64>,
    /// 上游不認得模型時會回 `{"error": "Unknown model pricing"}`
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}

/// Result returned by the upstream service. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRecommendation {
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub selected_tags: Vec<Tag>,
    #[serde(default, deserialize_with = "lenient")]
    pub cache_info: Option<CacheInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub cost_jpy: Option<CostJpy>,
    #[serde(default, deserialize_with = "lenient")]
    pub article_length: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_long_article: Option<bool>,
    pub processing_flow: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags_hash: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub filtered_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_tags_count: Option<u64>,
}

/// A decoded upstream success plus the transport facts shown in the debug panel.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub upstream_url: String,
    pub status: u16,
    pub body_size: usize,
    pub received_at: DateTime<Utc>,
    pub result: TagRecommendation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_result() {
        let body = json!({
            "slug": "aws-lambda-intro",
            "model": "us.amazon.nova-lite-v1:0",
            "selected_tags": [
                {"id": "awsLambda", "name": "AWS Lambda", "score": 95},
                {"id": "serverless", "name": "Serverless", "score": 80.5}
            ],
            "cache_info": {"input_tokens": 12000, "output_tokens": 340, "used_summary": false},
            "cost_jpy": {"total_cost_jpy": 0.1204, "exchange_rate": 150},
            "article_length": 1800,
            "is_long_article": false,
            "processing_flow": {"step1": "Article retrieved"},
            "tags_hash": "ab12cd34"
        });

        let parsed: TagRecommendation = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.selected_tags.len(), 2);
        assert_eq!(parsed.selected_tags[0].name, "AWS Lambda");
        assert_eq!(parsed.cache_info.unwrap().input_tokens, Some(12000));
        assert_eq!(parsed.cost_jpy.unwrap().exchange_rate, Some(150.0));
        assert_eq!(parsed.tags_hash.as_deref(), Some("ab12cd34"));
    }

    #[test]
    fn test_parse_sparse_result() {
        let parsed: TagRecommendation = serde_json::from_str("{}").unwrap();
        assert!(parsed.selected_tags.is_empty());
        assert!(parsed.cache_info.is_none());
        assert!(parsed.cost_jpy.is_none());
        assert!(parsed.model.is_none());
    }

    #[test]
    fn test_unknown_pricing_error() {
        let parsed: TagRecommendation =
            serde_json::from_value(json!({"cost_jpy": {"error": "Unknown model pricing"}}))
                .unwrap();
        let cost = parsed.cost_jpy.unwrap();
        assert!(cost.total_cost_jpy.is_none());
        assert_eq!(cost.error.as_deref(), Some("Unknown model pricing"));
    }

    #[test]
    fn test_null_name_keeps_row() {
        let parsed: TagRecommendation = serde_json::from_value(json!({
            "selected_tags": [
                {"id": "t1", "name": null, "score": 3},
                {"id": "t2", "name": "Two", "score": 2}
            ]
        }))
        .unwrap();
        assert_eq!(parsed.selected_tags.len(), 2);
        assert_eq!(parsed.selected_tags[0].name, "");
        assert_eq!(parsed.selected_tags[0].id, json!("t1"));
        assert_eq!(parsed.selected_tags[1].name, "Two");
    }

    #[test]
    fn test_null_selected_tags_is_empty() {
        let parsed: TagRecommendation =
            serde_json::from_value(json!({"slug": "s", "selected_tags": null})).unwrap();
        assert!(parsed.selected_tags.is_empty());
        assert_eq!(parsed.slug.as_deref(), Some("s"));

        let parsed: TagRecommendation =
            serde_json::from_value(json!({"selected_tags": [null, {"name": "Kept"}]})).unwrap();
        assert_eq!(parsed.selected_tags.len(), 2);
        assert_eq!(parsed.selected_tags[1].name, "Kept");
    }

    #[test]
    fn test_null_and_float_counts_are_absent() {
        let parsed: TagRecommendation = serde_json::from_value(json!({
            "model": null,
            "cache_info": {"input_tokens": null, "output_tokens": 12.5, "used_summary": "yes"},
            "cost_jpy": {"total_cost_jpy": null, "exchange_rate": "150"},
            "article_length": null,
            "is_long_article": null
        }))
        .unwrap();
        let cache = parsed.cache_info.unwrap();
        assert!(cache.input_tokens.is_none());
        assert!(cache.output_tokens.is_none());
        assert!(cache.used_summary.is_none());
        let cost = parsed.cost_jpy.unwrap();
        assert!(cost.total_cost_jpy.is_none());
        assert!(cost.exchange_rate.is_none());
        assert!(parsed.model.is_none());
        assert!(parsed.article_length.is_none());
    }

    #[test]
    fn test_null_cost_sections() {
        let parsed: TagRecommendation =
            serde_json::from_value(json!({"cache_info": null, "cost_jpy": null})).unwrap();
        assert!(parsed.cache_info.is_none());
        assert!(parsed.cost_jpy.is_none());
    }
}
