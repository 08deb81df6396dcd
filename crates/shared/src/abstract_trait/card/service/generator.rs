use crate::{
    domain::{
        requests::GenerateCardsRequest,
        responses::{ApiResponse, CardBatch},
    },
    errors::ServiceError,
};
use anyhow::Result;
use std::sync::Arc;

pub trait CardGeneratorServiceTrait {
    fn generate(&self, req: &GenerateCardsRequest)
    -> Result<ApiResponse<CardBatch>, ServiceError>;
}

pub type DynCardGeneratorService = Arc<dyn CardGeneratorServiceTrait + Send + Sync>;
