#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_socket_addr, validate_url, Validate};
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Final settings for the server variant after CLI, env and file are merged.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub bind: String,
    pub upstream_url: String,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("bind", &self.bind)
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        // 驗證上游 URL
        validate_url("upstream_url", &self.upstream_url)?;

        // 驗證監聽位址
        self.bind_addr()?;

        tracing::info!("✅ Server configuration validation passed");
        Ok(())
    }
}
