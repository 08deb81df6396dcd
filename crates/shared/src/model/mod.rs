mod bin;
mod chat;

pub use self::bin::{BinBank, BinCountry, BinInfo};
pub use self::chat::{BotCommand, Chat, ChatMessage, ChatUpdate, ParseMode};
