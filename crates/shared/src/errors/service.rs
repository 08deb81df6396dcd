use crate::errors::{client::ClientError, generator::GeneratorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),
}
