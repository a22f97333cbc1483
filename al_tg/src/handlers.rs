use std::sync::Arc;

use al_core::AppConfig;
use al_core::CommandError;
use al_core::QuoteProvider;
use al_core::parser;
use al_core::resolver;
use al_core::valuation;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use time::Date;
use time::OffsetDateTime;

use crate::bot_commands::Command;
use crate::error_handling::send_with_retry;
use crate::replies;

/// Shared immutable per-process state handed to every command task.
pub struct BotContext {
    pub config: AppConfig,
    pub provider: Arc<dyn QuoteProvider>,
}

/// Handle incoming Telegram commands. Every outcome becomes reply text;
/// nothing here takes down the dispatch task.
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command, ctx: Arc<BotContext>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let reply = match cmd {
        Command::Start => replies::greeting(),
        Command::Help => Command::descriptions().to_string(),
        Command::Add(args) => {
            let today = OffsetDateTime::now_utc().date();
            add_reply(&ctx, today, &args).await
        }
    };

    send_with_retry(&bot, chat_id, reply).await?;

    Ok(())
}

/// Run `/add` and turn every outcome into user-facing text.
async fn add_reply(ctx: &BotContext, today: Date, raw_args: &str) -> String {
    match run_add_command(&ctx.config, ctx.provider.as_ref(), today, raw_args).await {
        Ok(reply) => reply,
        Err(CommandError::Parse(err)) => replies::parse_error(&err),
        Err(CommandError::Resolve(err)) => replies::price_unavailable(&err),
        Err(CommandError::Internal(err)) => {
            tracing::error!("Unexpected failure handling /add: {err}");
            replies::internal_error()
        }
    }
}

/// The full `/add` pipeline: parse, resolve, valuate, render. Generic over
/// the provider so tests can drive the whole command with an in-memory stub.
pub async fn run_add_command<P>(
    config: &AppConfig,
    provider: &P,
    today: Date,
    raw_args: &str,
) -> Result<String, CommandError>
where
    P: QuoteProvider + ?Sized,
{
    let tokens: Vec<&str> = raw_args.split_whitespace().collect();
    let entry = parser::parse_add_args(&tokens)?;

    let quote =
        resolver::resolve_unit_price(provider, &entry.ticker, entry.provider_id, entry.purchase_date, today).await?;

    let valuation = valuation::valuate(entry.amount, quote.unit_price_usd, config);

    Ok(replies::added(&entry, &valuation))
}
