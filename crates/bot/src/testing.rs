use crate::di::DependenciesInject;
use async_trait::async_trait;
use shared::{
    abstract_trait::{
        bin::service::{BinServiceTrait, DynBinService},
        card::service::generator::DynCardGeneratorService,
        chat::http::{ChatClientTrait, DynChatClient},
    },
    config::Config,
    domain::{
        requests::BinLookupRequest,
        responses::{ApiResponse, BinResponse},
    },
    errors::{ClientError, ServiceError},
    model::{BotCommand, Chat, ChatMessage, ChatUpdate, ParseMode},
    service::card::CardGeneratorService,
    utils::{DynClock, FixedClock, Metrics},
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Message {
        chat_id: i64,
        text: String,
        parse_mode: Option<ParseMode>,
    },
    Edit {
        chat_id: i64,
        message_id: i64,
        text: String,
        parse_mode: Option<ParseMode>,
    },
}

#[derive(Default)]
pub struct FakeChat {
    pub sent: Mutex<Vec<Sent>>,
    pub offsets: Mutex<Vec<i64>>,
    pub batches: Mutex<VecDeque<Result<Vec<ChatUpdate>, ClientError>>>,
    pub commands: Mutex<Vec<BotCommand>>,
}

impl FakeChat {
    pub fn with_batches(batches: Vec<Result<Vec<ChatUpdate>, ClientError>>) -> Self {
        Self {
            batches: Mutex::new(batches.into()),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClientTrait for FakeChat {
    async fn get_updates(
        &self,
        offset: i64,
        _timeout_secs: u64,
    ) -> Result<Vec<ChatUpdate>, ClientError> {
        self.offsets.lock().unwrap().push(offset);

        let next = self.batches.lock().unwrap().pop_front();
        match next {
            Some(batch) => batch,
            None => {
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok(Vec::new())
            }
        }
    }

    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<ChatMessage, ClientError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(Sent::Message {
            chat_id,
            text: text.to_string(),
            parse_mode,
        });

        Ok(ChatMessage {
            message_id: 100 + sent.len() as i64,
            chat: Chat { id: chat_id },
            text: Some(text.to_string()),
        })
    }

    async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<(), ClientError> {
        self.sent.lock().unwrap().push(Sent::Edit {
            chat_id,
            message_id,
            text: text.to_string(),
            parse_mode,
        });
        Ok(())
    }

    async fn set_my_commands(&self, commands: &[BotCommand]) -> Result<(), ClientError> {
        self.commands.lock().unwrap().extend_from_slice(commands);
        Ok(())
    }
}

pub struct FakeBinService {
    pub result: fn() -> Result<BinResponse, ClientError>,
}

#[async_trait]
impl BinServiceTrait for FakeBinService {
    async fn check(
        &self,
        req: &BinLookupRequest,
    ) -> Result<ApiResponse<BinResponse>, ServiceError> {
        let data = (self.result)()?;
        Ok(ApiResponse::success(format!("BIN {} found", req.bin), data))
    }
}

pub fn visa_response() -> Result<BinResponse, ClientError> {
    Ok(BinResponse {
        bin: "453201".into(),
        scheme: Some("visa".into()),
        card_type: Some("debit".into()),
        brand: None,
        prepaid: Some(false),
        country_name: Some("Denmark".into()),
        country_emoji: Some("🇩🇰".into()),
        bank_name: Some("Jyske Bank".into()),
        bank_url: None,
        bank_phone: None,
    })
}

pub fn not_found() -> Result<BinResponse, ClientError> {
    Err(ClientError::NotFound)
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "BOT_TOKEN" => Some("token".to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn message(chat_id: i64, text: &str) -> ChatMessage {
    ChatMessage {
        message_id: 1,
        chat: Chat { id: chat_id },
        text: Some(text.to_string()),
    }
}

pub fn deps(
    chat: Arc<FakeChat>,
    lookup: fn() -> Result<BinResponse, ClientError>,
) -> DependenciesInject {
    let metrics = Metrics::new();
    let clock = Arc::new(FixedClock(2025)) as DynClock;

    let card_generator =
        Arc::new(CardGeneratorService::new(clock, metrics.clone())) as DynCardGeneratorService;
    let bin_service = Arc::new(FakeBinService { result: lookup }) as DynBinService;

    DependenciesInject::from_parts(
        card_generator,
        bin_service,
        chat as DynChatClient,
        &test_config(),
        metrics,
    )
    .unwrap()
}
