use clap::Parser;
use msbao::{Bot, BotConfig, ChannelContext};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Runs the bot against stdin, one chat message per line.
#[derive(Debug, Parser)]
#[command(name = "msbao-console", version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, default_value = "msbao.toml")]
    config: PathBuf,

    /// User id the messages are sent as
    #[arg(short, long, default_value = "console")]
    user: String,

    /// Group channel id; omit for a private conversation
    #[arg(long)]
    channel: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = if args.config.exists() {
        BotConfig::load(&args.config)?
    } else {
        tracing::warn!(path = %args.config.display(), "Config file not found, using defaults");
        let mut config = BotConfig::default();
        config.apply_env_overrides(std::env::var(msbao::config::API_KEY_ENV).ok());
        config
    };

    let bot = Bot::from_config(config)?;
    let ctx = ChannelContext {
        user_id: args.user,
        channel_id: args.channel,
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(reply) = bot.handle_message(&ctx, &line).await {
            println!("{}", reply.text);
            if let Some(image) = reply.image {
                println!("[image] {}", image.display());
            }
        }
    }

    Ok(())
}
