pub mod config;
pub mod core;
pub mod domain;
pub mod edge;
pub mod templates;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use config::cli::ServerConfig;

pub use self::config::{lambda::EdgeConfig, ServerSettings};
pub use self::core::{client::HttpTagRecommender, cycle::Page};
pub use domain::ports::TagRecommender;
pub use utils::error::{Result, ViewerError};
