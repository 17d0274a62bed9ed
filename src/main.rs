use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use honeymanga::app::AppContext;
use honeymanga::cli::{commands, Cli, Commands};
use honeymanga::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config)?;
    let json = cli.json;

    match cli.command {
        Commands::Popular { page } => {
            commands::popular(&ctx, page, json).await?;
        }
        Commands::Latest { page } => {
            commands::latest(&ctx, page, json).await?;
        }
        Commands::Search { query } => {
            commands::search(&ctx, &query, json).await?;
        }
        Commands::Details { manga_id } => {
            commands::details(&ctx, &manga_id, json).await?;
        }
        Commands::Chapters { manga_id } => {
            commands::chapters(&ctx, &manga_id, json).await?;
        }
        Commands::Pages { chapter_id } => {
            commands::pages(&ctx, &chapter_id, json).await?;
        }
    }

    Ok(())
}
