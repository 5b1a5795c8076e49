pub mod telegram;

/// A text message received from the chat platform
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Platform-specific user ID as string
    pub user_id: String,
    /// Platform-specific chat/channel ID as string
    pub chat_id: String,
    /// Display name of the user
    pub user_name: String,
    /// The message text
    pub text: String,
}

impl IncomingMessage {
    /// Run the command handler on this message.
    pub fn reply(&self) -> Option<String> {
        let mut rng = rand::rng();
        crate::commands::handle(&self.text, &mut rng)
    }
}
