use std::sync::Arc;
use std::time::Duration;

use al_core::settings;
use al_http::CoinGeckoClient;
use al_http::HttpClientConfig;
use al_tg::BotContext;
use al_tg::Command;
use al_tg::handle_command;
use teloxide::prelude::*;

const DEFAULT_CONFIG_PATH: &str = "assetlog.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Settings file is optional; defaults cover a stock deployment
    let config_path = std::env::var("ASSETLOG_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let app_config = settings::load_config_or_default(&config_path);

    // Initialise bot
    let bot = Bot::from_env();
    tracing::info!("AssetLog bot initialised");

    let provider = CoinGeckoClient::builder()
        .base_url(app_config.coingecko_base_url.clone())
        .http_config(HttpClientConfig::with_request_timeout(Duration::from_secs(app_config.quote_timeout_secs)))
        .build()?;

    let ctx = Arc::new(BotContext { config: app_config, provider: Arc::new(provider) });

    // Build command handler
    let handler = Update::filter_message().filter_command::<Command>().endpoint({
        let ctx = ctx.clone();
        move |bot: Bot, msg: Message, cmd: Command| {
            let ctx = ctx.clone();
            async move { handle_command(bot, msg, cmd, ctx).await }
        }
    });

    // Start dispatcher
    tracing::info!("Starting AssetLog dispatcher...");
    Dispatcher::builder(bot, handler).enable_ctrlc_handler().build().dispatch().await;

    Ok(())
}
