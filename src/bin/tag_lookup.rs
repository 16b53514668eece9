use clap::{Parser, ValueEnum};
use tag_viewer::core::cycle::{run_cycle, Page};
use tag_viewer::templates::{render_page, CostPanel, TagRow};
use tag_viewer::utils::{logger, validation::validate_url};
use tag_viewer::HttpTagRecommender;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

#[derive(Parser)]
#[command(name = "tag-lookup")]
#[command(about = "Fetch recommended tags for one slug and print them")]
struct Args {
    /// Article slug to look up
    #[arg(short, long)]
    slug: String,

    /// Tag-recommendation function URL
    #[arg(long, env = "LAMBDA_URL")]
    upstream_url: String,

    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    if let Err(e) = validate_url("upstream_url", &args.upstream_url) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let recommender = HttpTagRecommender::new(args.upstream_url.clone());
    let page = run_cycle(&recommender, Some(&args.slug)).await;

    match &page {
        Page::Form => {
            eprintln!("❌ Slug cannot be empty");
            std::process::exit(1);
        }
        Page::Failed { error, .. } => {
            eprintln!("❌ {}", error);
            std::process::exit(1);
        }
        Page::Results { .. } => {}
    }

    match args.format {
        OutputFormat::Html => println!("{}", render_page(&page)?),
        OutputFormat::Json => {
            if let Page::Results { reply, .. } = &page {
                println!("{}", serde_json::to_string_pretty(&reply.result)?);
            }
        }
        OutputFormat::Text => {
            if let Page::Results { slug, reply } = &page {
                println!("📄 {}", slug);
                for (i, tag) in reply.result.selected_tags.iter().enumerate() {
                    let row = TagRow::from(tag);
                    println!("{:>3}. {:<30} {:<24} {:>6}", i + 1, row.name, row.id, row.score);
                }

                let cost = CostPanel::from_reply(reply);
                println!();
                println!("入力トークン: {}", cost.input_tokens);
                println!("出力トークン: {}", cost.output_tokens);
                println!("総コスト: {} 円", cost.total_cost_jpy);
                println!("モデル: {}", cost.model);
            }
        }
    }

    Ok(())
}
