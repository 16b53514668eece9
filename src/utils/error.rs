use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    /// 上游回傳非 2xx，body 原文保留給使用者看
    #[error("Lambda error: {status} - {body}")]
    UpstreamError { status: u16, body: String },

    #[error("{message}")]
    TransportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Upstream,
    Transport,
    Rendering,
    System,
}

impl ViewerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ViewerError::ConfigError { .. }
            | ViewerError::InvalidConfigValueError { .. }
            | ViewerError::MissingConfigError { .. }
            | ViewerError::TomlError(_) => ErrorCategory::Configuration,
            ViewerError::UpstreamError { .. } => ErrorCategory::Upstream,
            ViewerError::SerializationError(_) | ViewerError::TransportError { .. } => {
                ErrorCategory::Transport
            }
            ViewerError::TemplateError(_) => ErrorCategory::Rendering,
            ViewerError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, ViewerError::UpstreamError { .. })
    }

    /// The text shown in the page's error panel.
    ///
    /// Upstream failures show the raw response body; everything else shows
    /// the error's own message.
    pub fn user_message(&self) -> String {
        match self {
            ViewerError::UpstreamError { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        ViewerError::TransportError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
