use crate::command::CommandDispatcher;
use shared::{abstract_trait::chat::http::DynChatClient, model::ChatUpdate};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{error, info};

const RETRY_DELAY: Duration = Duration::from_secs(5);

/// First update id not yet seen. Never moves backwards.
pub fn next_offset(current: i64, updates: &[ChatUpdate]) -> i64 {
    updates
        .iter()
        .map(|update| update.update_id + 1)
        .fold(current, i64::max)
}

pub struct UpdatePoller {
    client: DynChatClient,
    dispatcher: CommandDispatcher,
    timeout_secs: u64,
    retry_delay: Duration,
}

impl UpdatePoller {
    pub fn new(client: DynChatClient, dispatcher: CommandDispatcher, timeout_secs: u64) -> Self {
        Self {
            client,
            dispatcher,
            timeout_secs,
            retry_delay: RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Long-polls until shutdown. Each message is handled on its own task so a
    /// slow lookup never stalls the loop.
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) {
        let mut offset = 0;

        info!("🤖 Polling for updates");

        loop {
            let result = tokio::select! {
                _ = shutdown_rx.recv() => break,
                result = self.client.get_updates(offset, self.timeout_secs) => result,
            };

            match result {
                Ok(updates) => {
                    offset = next_offset(offset, &updates);

                    for message in updates.into_iter().filter_map(|u| u.message) {
                        let dispatcher = self.dispatcher.clone();
                        tokio::spawn(async move {
                            dispatcher.dispatch(&message).await;
                        });
                    }
                }
                Err(e) => {
                    error!(
                        "❌ Polling failed: {e}. Retrying in {}s...",
                        self.retry_delay.as_secs()
                    );

                    tokio::select! {
                        _ = shutdown_rx.recv() => break,
                        _ = tokio::time::sleep(self.retry_delay) => {}
                    }
                }
            }
        }

        info!("Poller received shutdown signal");
    }
}
