use clap::Parser;
use tag_viewer::utils::{logger, validation::Validate};
use tag_viewer::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tag-viewer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 合併設定並驗證
    let settings = match config.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(
                "❌ Configuration validation failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e);
            eprintln!("💡 Set LAMBDA_URL or pass --upstream-url");
            std::process::exit(1);
        }
    };

    tag_viewer::web::run(&settings).await?;

    tracing::info!("👋 tag-viewer stopped");
    Ok(())
}
