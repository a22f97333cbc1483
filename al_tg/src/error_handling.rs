use std::time::Duration;

use teloxide::ApiError;
use teloxide::RequestError;
use teloxide::prelude::*;
use teloxide::types::ChatId;

/// Send a reply with one retry on rate limiting and transient network
/// errors. Blocked chats are dropped without retry.
pub async fn send_with_retry(bot: &Bot, chat_id: ChatId, text: String) -> Result<(), RequestError> {
    match bot.send_message(chat_id, text.clone()).await {
        Ok(_) => Ok(()),
        Err(RequestError::RetryAfter(seconds)) => {
            tracing::warn!("Rate limited by Telegram, waiting {seconds:?}");
            tokio::time::sleep(seconds.duration()).await;
            bot.send_message(chat_id, text).await?;
            Ok(())
        }
        Err(RequestError::Network(ref err)) => {
            tracing::warn!("Network error sending reply: {err}");
            tokio::time::sleep(Duration::from_secs(1)).await;
            bot.send_message(chat_id, text).await?;
            Ok(())
        }
        Err(RequestError::Api(ApiError::BotBlocked)) => {
            tracing::warn!("Bot was blocked by chat {chat_id}");
            Ok(()) // Don't retry blocks
        }
        Err(err) => {
            tracing::error!("Unexpected error sending reply: {err}");
            Err(err)
        }
    }
}
