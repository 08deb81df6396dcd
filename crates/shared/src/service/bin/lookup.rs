use crate::{
    abstract_trait::bin::{http::DynBinLookupClient, service::BinServiceTrait},
    domain::{
        requests::BinLookupRequest,
        responses::{ApiResponse, BinResponse},
    },
    errors::{ClientError, ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct BinService {
    client: DynBinLookupClient,
}

impl BinService {
    pub fn new(client: DynBinLookupClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BinServiceTrait for BinService {
    async fn check(
        &self,
        req: &BinLookupRequest,
    ) -> Result<ApiResponse<BinResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        if !req.bin.chars().all(|c| c.is_ascii_digit()) {
            error!("Validation failed: BIN {} is not numeric", req.bin);
            return Err(ServiceError::Validation(vec![
                "bin: BIN must be 6-8 digits".to_string(),
            ]));
        }

        info!("🔍 Looking up BIN {}", req.bin);

        let info = self.client.lookup(&req.bin).await.map_err(|e| {
            match &e {
                ClientError::NotFound | ClientError::RateLimited => {
                    warn!("🔍 BIN lookup for {} rejected: {e}", req.bin)
                }
                _ => error!("💥 BIN lookup for {} failed: {e}", req.bin),
            }
            ServiceError::from(e)
        })?;

        let response = BinResponse::from_info(&req.bin, info);

        info!(
            "✅ BIN {} resolved to scheme={:?} bank={:?}",
            response.bin, response.scheme, response.bank_name
        );

        Ok(ApiResponse::success("✅ BIN found", response))
    }
}
