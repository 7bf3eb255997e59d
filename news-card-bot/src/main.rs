//! Binary for the news card bot.

use anyhow::Result;
use clap::Parser;
use news_card_bot::{load_config, render_once, run_bot, CardConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Render { url, output } => render_once(CardConfig::from_env(), &url, &output).await,
    }
}
