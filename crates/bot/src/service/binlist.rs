use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::ACCEPT};
use shared::{
    abstract_trait::bin::http::BinLookupClientTrait, errors::ClientError, model::BinInfo,
};

pub struct BinlistClientService {
    base_url: String,
    client: Client,
}

impl BinlistClientService {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl BinLookupClientTrait for BinlistClientService {
    async fn lookup(&self, bin: &str) -> Result<BinInfo, ClientError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, bin))
            .header("Accept-Version", "3")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<BinInfo>().await?),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited),
            status => Err(ClientError::Status(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::{HeaderMap, StatusCode as AxumStatus},
        response::{IntoResponse, Response},
        routing::get,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn fake_directory(Path(bin): Path<String>, headers: HeaderMap) -> Response {
        if headers.get("Accept-Version").and_then(|v| v.to_str().ok()) != Some("3") {
            return AxumStatus::BAD_REQUEST.into_response();
        }

        match bin.as_str() {
            "453201" => Json(json!({
                "scheme": "visa",
                "type": "debit",
                "prepaid": true,
                "country": {"name": "United States", "emoji": "🇺🇸"},
                "bank": {"name": "Test Bank", "url": "www.test.example"}
            }))
            .into_response(),
            "429429" => AxumStatus::TOO_MANY_REQUESTS.into_response(),
            "500500" => AxumStatus::INTERNAL_SERVER_ERROR.into_response(),
            _ => AxumStatus::NOT_FOUND.into_response(),
        }
    }

    async fn spawn_directory() -> String {
        let app = Router::new().route("/{bin}", get(fake_directory));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn decodes_found_bin() {
        let base_url = spawn_directory().await;
        let client = BinlistClientService::new(Client::new(), &base_url);

        let info = client.lookup("453201").await.unwrap();

        assert_eq!(info.scheme.as_deref(), Some("visa"));
        assert_eq!(info.prepaid, Some(true));
        assert_eq!(info.bank.unwrap().url.as_deref(), Some("www.test.example"));
    }

    #[tokio::test]
    async fn maps_error_statuses() {
        let base_url = spawn_directory().await;
        let client = BinlistClientService::new(Client::new(), &format!("{base_url}/"));

        assert!(matches!(
            client.lookup("111111").await,
            Err(ClientError::NotFound)
        ));
        assert!(matches!(
            client.lookup("429429").await,
            Err(ClientError::RateLimited)
        ));
        assert!(matches!(
            client.lookup("500500").await,
            Err(ClientError::Status(500))
        ));
    }

    #[tokio::test]
    async fn unreachable_service_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = BinlistClientService::new(Client::new(), &format!("http://{addr}"));

        assert!(matches!(
            client.lookup("453201").await,
            Err(ClientError::Http(_))
        ));
    }
}
