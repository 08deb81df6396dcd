use crate::{
    domain::{
        requests::BinLookupRequest,
        responses::{ApiResponse, BinResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait BinServiceTrait {
    async fn check(
        &self,
        req: &BinLookupRequest,
    ) -> Result<ApiResponse<BinResponse>, ServiceError>;
}

pub type DynBinService = Arc<dyn BinServiceTrait + Send + Sync>;
