mod check;
mod generate;
mod parser;
mod start;

pub use self::check::{CHECK_PENDING, CHECK_USAGE, format_bin, lookup_error_message};
pub use self::generate::{DIVIDER, GEN_FAILED, GEN_INVALID_BIN, GEN_USAGE, format_batch};
pub use self::parser::{Command, CommandParser, GenArgs, GenArgsError};
pub use self::start::{bot_commands, welcome_text};

use crate::di::DependenciesInject;
use shared::{
    domain::requests::{BinLookupRequest, GenerateCardsRequest},
    errors::ClientError,
    model::{ChatMessage, ParseMode},
    utils::Status,
};
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct CommandDispatcher {
    deps: DependenciesInject,
}

impl CommandDispatcher {
    pub fn new(deps: DependenciesInject) -> Self {
        Self { deps }
    }

    /// Handles one incoming chat message. Text that is not a command is ignored.
    pub async fn dispatch(&self, message: &ChatMessage) {
        let Some(text) = message.text.as_deref() else {
            return;
        };
        let Some(command) = self.deps.parser.parse(text) else {
            return;
        };

        let name = command.name();
        let chat_id = message.chat.id;
        let start = Instant::now();

        info!("📨 /{name} from chat {chat_id}");

        let status = match self.execute(chat_id, command).await {
            Ok(status) => status,
            Err(e) => {
                error!("❌ Failed to answer /{name} in chat {chat_id}: {e}");
                Status::Error
            }
        };

        self.deps
            .metrics
            .record(name, status, start.elapsed().as_secs_f64());
    }

    async fn execute(&self, chat_id: i64, command: Command) -> Result<Status, ClientError> {
        match command {
            Command::Start => {
                let text = welcome_text(self.deps.parser.limits());
                self.reply(chat_id, &text).await?;
                Ok(Status::Success)
            }
            Command::GenUsage => {
                self.reply(chat_id, GEN_USAGE).await?;
                Ok(Status::Success)
            }
            Command::GenInvalidBin => {
                self.reply(chat_id, GEN_INVALID_BIN).await?;
                Ok(Status::Error)
            }
            Command::Gen(args) => self.handle_gen(chat_id, args).await,
            Command::CheckUsage => {
                self.reply(chat_id, CHECK_USAGE).await?;
                Ok(Status::Success)
            }
            Command::Check(bin) => self.handle_check(chat_id, bin).await,
        }
    }

    async fn handle_gen(&self, chat_id: i64, args: GenArgs) -> Result<Status, ClientError> {
        let bin = args.bin.clone();
        let req = GenerateCardsRequest::from(args);

        let (text, status) = match self.deps.card_generator.generate(&req) {
            Ok(response) if !response.data.is_empty() => {
                (format_batch(&bin, &response.data), Status::Success)
            }
            Ok(_) => (GEN_FAILED.to_string(), Status::Error),
            Err(e) => {
                warn!("⚠️ Generation for BIN {bin} rejected: {e}");
                (GEN_FAILED.to_string(), Status::Error)
            }
        };

        self.reply(chat_id, &text).await?;
        Ok(status)
    }

    async fn handle_check(&self, chat_id: i64, bin: String) -> Result<Status, ClientError> {
        let pending = self
            .deps
            .chat_client
            .send_message(chat_id, CHECK_PENDING, Some(ParseMode::Markdown))
            .await?;

        let req = BinLookupRequest::new(bin);

        match self.deps.bin_service.check(&req).await {
            Ok(response) => {
                self.deps
                    .chat_client
                    .edit_message_text(
                        chat_id,
                        pending.message_id,
                        &format_bin(&response.data),
                        Some(ParseMode::Markdown),
                    )
                    .await?;
                Ok(Status::Success)
            }
            Err(e) => {
                let text = format!("❌ {}", lookup_error_message(&e));
                self.deps
                    .chat_client
                    .edit_message_text(chat_id, pending.message_id, &text, None)
                    .await?;
                Ok(Status::Error)
            }
        }
    }

    async fn reply(&self, chat_id: i64, text: &str) -> Result<(), ClientError> {
        self.deps
            .chat_client
            .send_message(chat_id, text, Some(ParseMode::Markdown))
            .await
            .map(|_| ())
    }
}
