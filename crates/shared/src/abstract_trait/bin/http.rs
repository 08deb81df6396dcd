use crate::{errors::ClientError, model::BinInfo};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBinLookupClient = Arc<dyn BinLookupClientTrait + Send + Sync>;

#[async_trait]
pub trait BinLookupClientTrait {
    async fn lookup(&self, bin: &str) -> Result<BinInfo, ClientError>;
}
