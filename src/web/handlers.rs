//! Page Handlers

use axum::{
    extract::{RawQuery, State},
    response::{Redirect, Response},
};

use super::{errors::AppError, state::AppState};
use crate::core::cycle::{normalize_slug, run_cycle, slug_from_query};
use crate::templates::page_response;

/// `GET /` renders the form, an error, or the results for `?slug=`.
///
/// The query is parsed by hand so a repeated `slug` key picks the first
/// value instead of rejecting the request.
pub async fn index(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let slug = slug_from_query(query.as_deref());
    let page = run_cycle(state.recommender(), slug.as_deref()).await;
    Ok(page_response(page)?)
}

/// `POST /` turns an url-encoded form body into the equivalent `GET /?slug=` URL.
pub async fn submit(body: String) -> Redirect {
    let slug = slug_from_query(Some(body.as_str()));
    match normalize_slug(slug.as_deref()) {
        Some(slug) => Redirect::to(&slug_location(&slug)),
        None => Redirect::to("/"),
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub fn slug_location(slug: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(slug.as_bytes()).collect();
    format!("/?slug={}", encoded)
}
