use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use shared::{
    abstract_trait::chat::http::ChatClientTrait,
    errors::ClientError,
    model::{BotCommand, ChatMessage, ChatUpdate, ParseMode},
};
use std::time::Duration;

/// Extra time granted to a long poll on top of the server-side wait.
const POLL_GRACE: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Serialize)]
struct GetUpdates {
    offset: i64,
    timeout: u64,
    allowed_updates: [&'static str; 1],
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
}

#[derive(Serialize)]
struct EditMessageText<'a> {
    chat_id: i64,
    message_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
}

#[derive(Serialize)]
struct SetMyCommands<'a> {
    commands: &'a [BotCommand],
}

pub struct TelegramClientService {
    base_url: String,
    client: Client,
}

impl TelegramClientService {
    pub fn new(client: Client, api_url: &str, token: &str) -> Self {
        Self {
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
            client,
        }
    }

    async fn call<P, T>(
        &self,
        method: &str,
        payload: &P,
        timeout: Option<Duration>,
    ) -> Result<T, ClientError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .json(payload);

        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::RateLimited);
        }

        let body = response.json::<TelegramResponse<T>>().await?;

        match (body.ok, body.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(ClientError::Api(format!("{method} returned no result"))),
            (false, _) => Err(ClientError::Api(body.description.unwrap_or_else(|| {
                format!("{method} failed with status {}", status.as_u16())
            }))),
        }
    }
}

#[async_trait]
impl ChatClientTrait for TelegramClientService {
    async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<ChatUpdate>, ClientError> {
        let payload = GetUpdates {
            offset,
            timeout: timeout_secs,
            allowed_updates: ["message"],
        };

        self.call(
            "getUpdates",
            &payload,
            Some(Duration::from_secs(timeout_secs) + POLL_GRACE),
        )
        .await
    }

    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<ChatMessage, ClientError> {
        let payload = SendMessage {
            chat_id,
            text,
            parse_mode,
        };

        self.call("sendMessage", &payload, None).await
    }

    async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<(), ClientError> {
        let payload = EditMessageText {
            chat_id,
            message_id,
            text,
            parse_mode,
        };

        // Telegram answers with the edited message or `true`.
        self.call::<_, serde_json::Value>("editMessageText", &payload, None)
            .await
            .map(|_| ())
    }

    async fn set_my_commands(&self, commands: &[BotCommand]) -> Result<(), ClientError> {
        let payload = SetMyCommands { commands };

        self.call::<_, bool>("setMyCommands", &payload, None)
            .await
            .map(|_| ())
    }
}
