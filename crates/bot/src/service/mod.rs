mod binlist;
mod telegram;

pub use self::binlist::BinlistClientService;
pub use self::telegram::TelegramClientService;

use anyhow::{Context, Result};
use reqwest::Client;
use shared::{
    abstract_trait::{bin::http::DynBinLookupClient, chat::http::DynChatClient},
    config::Config,
};
use std::{sync::Arc, time::Duration};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn create_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("bin-bot/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

#[derive(Clone)]
pub struct HttpClients {
    pub chat: DynChatClient,
    pub bin_lookup: DynBinLookupClient,
}

impl HttpClients {
    pub fn init(config: &Config) -> Result<Self> {
        let client = create_client()?;

        let chat = Arc::new(TelegramClientService::new(
            client.clone(),
            &config.telegram_api_url,
            &config.bot_token,
        )) as DynChatClient;

        let bin_lookup =
            Arc::new(BinlistClientService::new(client, &config.bin_lookup_url)) as DynBinLookupClient;

        Ok(Self { chat, bin_lookup })
    }
}
