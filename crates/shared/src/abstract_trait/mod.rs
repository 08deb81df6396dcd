pub mod bin;
pub mod card;
pub mod chat;
