//! Shared harness: spawns the server on an ephemeral port against a stub upstream.

#![allow(dead_code)]

use httpmock::MockServer;
use reqwest::Client;
use serde_json::{json, Value};
use tag_viewer::web::{create_router, AppState};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct TestApp {
    pub address: String,
    pub client: Client,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with the given upstream URL.
    pub async fn spawn(upstream_url: String) -> anyhow::Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = format!("http://{}", listener.local_addr()?);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(AppState::with_upstream(upstream_url));
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        // 不自動跟隨 redirect，才能檢查 POST / 的 Location
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            address,
            client,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Spawns the server pointed at `mock_server`'s root.
    pub async fn spawn_with_mock(mock_server: &MockServer) -> anyhow::Result<Self> {
        Self::spawn(mock_server.url("/")).await
    }

    pub async fn get_page(&self, path_and_query: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .get(format!("{}{}", self.address, path_and_query))
            .send()
            .await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// An upstream URL nobody listens on.
pub fn closed_upstream_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

pub fn sample_result(slug: &str) -> Value {
    json!({
        "slug": slug,
        "model": "us.anthropic.claude-haiku-4-5-20251001-v1:0",
        "selected_tags": [
            {"id": "awsLambda", "name": "AWS Lambda", "score": 95},
            {"id": "imdsv2", "name": "IMDSv2", "score": 88.5},
            {"id": "windows", "name": "Windows", "score": 60}
        ],
        "cache_info": {"input_tokens": 15234, "output_tokens": 812},
        "cost_jpy": {"total_cost_jpy": 0.7235, "exchange_rate": 150},
        "article_length": 3120,
        "is_long_article": true,
        "processing_flow": {"step1": "Article retrieved"}
    })
}

pub fn count_rows(html: &str) -> usize {
    html.matches("<tr class=\"tag-row\">").count()
}
