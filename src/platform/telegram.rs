use teloxide::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Token;
use crate::error::StartupError;
use crate::platform::IncomingMessage;

/// Build the platform-neutral message, skipping anything without text.
fn to_incoming(msg: &Message) -> Option<IncomingMessage> {
    let text = msg.text()?;
    let (user_id, user_name) = match msg.from.as_ref() {
        Some(user) => (user.id.0.to_string(), user.first_name.clone()),
        None => (String::new(), String::new()),
    };

    Some(IncomingMessage {
        user_id,
        chat_id: msg.chat.id.0.to_string(),
        user_name,
        text: text.to_string(),
    })
}

/// Connect to Telegram and dispatch messages until shutdown.
pub async fn run(token: Token) -> Result<(), StartupError> {
    let bot = Bot::new(token.expose());

    info!("Connecting to Telegram...");
    let me = bot.get_me().await.map_err(StartupError::from_login)?;
    info!("Logged in as @{}", me.username());
    info!("DTBot has started successfully!");

    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .default_handler(|upd| async move {
            debug!("Ignoring update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("telegram"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("DTBot stopped");
    Ok(())
}

async fn handle_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    let Some(incoming) = to_incoming(&msg) else {
        return Ok(());
    };

    let Some(reply) = incoming.reply() else {
        return Ok(());
    };

    debug!(
        "Command from {} ({}) in chat {}: {} -> {}",
        incoming.user_name, incoming.user_id, incoming.chat_id, incoming.text, reply
    );

    if let Err(e) = bot.send_message(msg.chat.id, reply).await {
        warn!("Failed to send reply to chat {}: {}", incoming.chat_id, e);
    }

    Ok(())
}
