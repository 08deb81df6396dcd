use crate::{
    errors::ClientError,
    model::{BotCommand, ChatMessage, ChatUpdate, ParseMode},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynChatClient = Arc<dyn ChatClientTrait + Send + Sync>;

#[async_trait]
pub trait ChatClientTrait {
    /// Long-polls for updates with ids at or above `offset`.
    async fn get_updates(&self, offset: i64, timeout_secs: u64)
    -> Result<Vec<ChatUpdate>, ClientError>;

    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<ChatMessage, ClientError>;

    async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<(), ClientError>;

    async fn set_my_commands(&self, commands: &[BotCommand]) -> Result<(), ClientError>;
}
