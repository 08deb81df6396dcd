use crate::{command::CommandParser, service::HttpClients};
use anyhow::{Context, Result};
use shared::{
    abstract_trait::{
        bin::service::DynBinService, card::service::generator::DynCardGeneratorService,
        chat::http::DynChatClient,
    },
    config::Config,
    service::{bin::BinService, card::CardGeneratorService},
    utils::{DynClock, Metrics, SystemClock},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub card_generator: DynCardGeneratorService,
    pub bin_service: DynBinService,
    pub chat_client: DynChatClient,
    pub parser: Arc<CommandParser>,
    pub metrics: Metrics,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("card_generator", &"CardGeneratorService")
            .field("bin_service", &"BinService")
            .field("chat_client", &"ChatClient")
            .field("parser", &self.parser)
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(clients: HttpClients, config: &Config, metrics: Metrics) -> Result<Self> {
        let clock = Arc::new(SystemClock) as DynClock;

        let card_generator = Arc::new(CardGeneratorService::new(clock, metrics.clone()))
            as DynCardGeneratorService;

        let bin_service = Arc::new(BinService::new(clients.bin_lookup)) as DynBinService;

        Self::from_parts(
            card_generator,
            bin_service,
            clients.chat,
            config,
            metrics,
        )
    }

    pub fn from_parts(
        card_generator: DynCardGeneratorService,
        bin_service: DynBinService,
        chat_client: DynChatClient,
        config: &Config,
        metrics: Metrics,
    ) -> Result<Self> {
        let parser = CommandParser::new(config.generator)
            .context("Failed to compile command patterns")?;

        Ok(Self {
            card_generator,
            bin_service,
            chat_client,
            parser: Arc::new(parser),
            metrics,
        })
    }
}
