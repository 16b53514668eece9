//! tracing 初始化：CLI/server 用 compact 文字，Lambda 用 JSON lines。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Output shape of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One JSON object per line, no timestamp (CloudWatch adds its own).
    Json,
}

/// Directives used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "tag_viewer=debug,tower_http=debug,info"
    } else {
        "tag_viewer=info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let layer = match format {
        LogFormat::Compact => fmt::layer().with_target(false).compact().boxed(),
        LogFormat::Json => fmt::layer()
            .with_target(false)
            .without_time()
            .json()
            .flatten_event(true)
            .boxed(),
    };

    let installed = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(layer)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Logger already installed, keeping the existing one");
    }
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(LogFormat::Compact, verbose);
}

pub fn init_lambda_logger() {
    init_logger(LogFormat::Json, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false), "tag_viewer=info");
        assert!(default_directives(true).contains("tag_viewer=debug"));
        assert!(default_directives(true).contains("tower_http=debug"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(LogFormat::Compact, false);
        init_logger(LogFormat::Json, true);
    }
}
