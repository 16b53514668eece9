use crate::config::toml_config::TomlConfig;
use crate::config::{ServerSettings, DEFAULT_BIND};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tag-viewer")]
#[command(about = "Renders recommended tags for an article slug")]
pub struct ServerConfig {
    /// Address to listen on (default 127.0.0.1:3000)
    #[arg(long, env = "TAG_VIEWER_BIND")]
    pub bind: Option<String>,

    /// Tag-recommendation function URL
    #[arg(long, env = "LAMBDA_URL")]
    pub upstream_url: Option<String>,

    /// Optional TOML file with [server] and [upstream] sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerConfig {
    /// Merges flags/env over the optional TOML file. Flags and env win.
    pub fn resolve(&self) -> Result<ServerSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let upstream_url = self.upstream_url.clone().or(file.upstream.url);
        let upstream_url = validate_required_field("upstream_url", &upstream_url)?.clone();

        let bind = self
            .bind
            .clone()
            .or(file.server.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(ServerSettings { bind, upstream_url })
    }
}
