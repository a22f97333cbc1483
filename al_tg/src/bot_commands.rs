use teloxide::utils::command::BotCommands;

/// Telegram bot commands with type-safe parsing
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "AssetLog Commands:")]
pub enum Command {
    #[command(description = "Greeting and the supported asset list")]
    Start,

    #[command(description = "Log an asset purchase (usage: /add <SYMBOL> <AMOUNT> <YYYY-MM-DD>)")]
    Add(String),

    #[command(description = "Show help message")]
    Help,
}
