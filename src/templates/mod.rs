//! Askama Templates
//!
//! Page templates and the view models interpolated into them. Values are
//! formatted here so the templates only print strings.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::core::cycle::Page;
use crate::domain::model::{Tag, UpstreamReply};
use crate::utils::error::Result;
use crate::utils::format::{count_or_na, display_value, number_or_na, text_or_na};

pub const EXAMPLE_SLUG: &str = "saichan-transition-IMDSv2-netshtrace-20251031";

/// Input form with usage notes.
#[derive(Template, WebTemplate)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub slug: String,
    pub example_slug: &'static str,
}

/// Error panel next to the pre-filled form.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub slug: String,
    pub message: String,
}

/// Tag table, cost panel and debug dump.
#[derive(Template, WebTemplate)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub slug: String,
    pub tags: Vec<TagRow>,
    pub cost: CostPanel,
    pub debug_json: String,
}

pub struct TagRow {
    pub name: String,
    pub id: String,
    pub score: String,
}

impl From<&Tag> for TagRow {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            id: display_value(&tag.id),
            score: display_value(&tag.score),
        }
    }
}

pub struct CostPanel {
    pub input_tokens: String,
    pub output_tokens: String,
    pub total_cost_jpy: String,
    pub model: String,
    /// Extra lines only listed when the upstream sent them.
    pub details: Vec<CostLine>,
}

pub struct CostLine {
    pub label: &'static str,
    pub value: String,
}

impl CostPanel {
    pub fn from_reply(reply: &UpstreamReply) -> Self {
        let result = &reply.result;
        let cache = result.cache_info.clone().unwrap_or_default();
        let cost = result.cost_jpy.clone().unwrap_or_default();

        let mut details = Vec::new();
        let counts = [
            ("要約 入力トークン", cache.summary_input_tokens),
            ("要約 出力トークン", cache.summary_output_tokens),
            ("評価 入力トークン", cache.ranking_input_tokens),
            ("評価 出力トークン", cache.ranking_output_tokens),
        ];
        for (label, value) in counts {
            if value.is_some() {
                details.push(CostLine {
                    label,
                    value: count_or_na(value),
                });
            }
        }
        let amounts = [
            ("入力コスト (円)", cost.input_cost_jpy),
            ("出力コスト (円)", cost.output_cost_jpy),
            ("為替レート", cost.exchange_rate),
        ];
        for (label, value) in amounts {
            if value.is_some() {
                details.push(CostLine {
                    label,
                    value: number_or_na(value),
                });
            }
        }
        if let Some(error) = cost.error {
            details.push(CostLine {
                label: "コスト計算エラー",
                value: error,
            });
        }

        Self {
            input_tokens: count_or_na(cache.input_tokens),
            output_tokens: count_or_na(cache.output_tokens),
            total_cost_jpy: number_or_na(cost.total_cost_jpy),
            model: text_or_na(result.model.as_deref()),
            details,
        }
    }
}

/// Request metadata plus the selected response fields, pretty-printed.
pub fn debug_json(slug: &str, reply: &UpstreamReply) -> Result<String> {
    let result = &reply.result;
    let info = json!({
        "upstreamUrl": reply.upstream_url,
        "requestSlug": slug,
        "responseStatus": reply.status,
        "responseSize": reply.body_size,
        "receivedAt": reply.received_at.to_rfc3339(),
        "slug": result.slug,
        "model": result.model,
        "tagsCount": result.selected_tags.len(),
        "articleLength": result.article_length,
        "isLongArticle": result.is_long_article,
        "processingFlow": result.processing_flow,
        "tagsHash": result.tags_hash,
        "filteredCount": result.filtered_count,
        "totalTagsCount": result.total_tags_count,
    });
    Ok(serde_json::to_string_pretty(&info)?)
}

impl ResultsTemplate {
    pub fn new(slug: &str, reply: &UpstreamReply) -> Result<Self> {
        Ok(Self {
            slug: slug.to_string(),
            tags: reply.result.selected_tags.iter().map(TagRow::from).collect(),
            cost: CostPanel::from_reply(reply),
            debug_json: debug_json(slug, reply)?,
        })
    }
}

impl FormTemplate {
    pub fn new() -> Self {
        Self {
            slug: String::new(),
            example_slug: EXAMPLE_SLUG,
        }
    }
}

impl Default for FormTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorTemplate {
    pub fn new(slug: &str, message: String) -> Self {
        Self {
            slug: slug.to_string(),
            message,
        }
    }
}

/// Renders a page to a full HTML document.
pub fn render_page(page: &Page) -> Result<String> {
    let html = match page {
        Page::Form => FormTemplate::new().render()?,
        Page::Failed { slug, error } => ErrorTemplate::new(slug, error.user_message()).render()?,
        Page::Results { slug, reply } => ResultsTemplate::new(slug, reply)?.render()?,
    };
    Ok(html)
}

/// Converts a page into an axum response through the template's web integration.
pub fn page_response(page: Page) -> Result<Response> {
    let response = match page {
        Page::Form => FormTemplate::new().into_response(),
        Page::Failed { slug, error } => {
            ErrorTemplate::new(&slug, error.user_message()).into_response()
        }
        Page::Results { slug, reply } => ResultsTemplate::new(&slug, &reply)?.into_response(),
    };
    Ok(response)
}
