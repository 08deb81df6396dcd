use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BinLookupRequest {
    #[validate(length(min = 6, max = 8, message = "BIN must be 6-8 digits"))]
    pub bin: String,
}

impl BinLookupRequest {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}
