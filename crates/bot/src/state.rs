use crate::{di::DependenciesInject, service::HttpClients};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{config::Config, utils::Metrics};
use std::{sync::Arc, time::Instant};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let clients = HttpClients::init(&config).context("failed http clients")?;

        let metrics = Metrics::new();

        let di_container = DependenciesInject::new(clients, &config, metrics.clone())
            .context("Failed to initialized dependency injection container")?;

        Ok(Self::from_parts(config, di_container))
    }

    /// Builds state around an existing container, registering its metrics.
    pub fn from_parts(config: Config, di_container: DependenciesInject) -> Self {
        let mut registry = Registry::default();
        di_container.metrics.register(&mut registry);

        Self {
            config,
            di_container,
            registry: Arc::new(registry),
            started_at: Instant::now(),
        }
    }
}
