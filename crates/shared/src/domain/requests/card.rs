use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateCardsRequest {
    #[validate(length(min = 6, max = 8, message = "BIN must be 6-8 digits"))]
    pub prefix: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub count: usize,

    #[serde(default)]
    pub fixed_expiry: Option<String>,

    #[serde(default)]
    pub fixed_cvv: Option<String>,
}

impl GenerateCardsRequest {
    pub fn new(prefix: impl Into<String>, count: usize) -> Self {
        Self {
            prefix: prefix.into(),
            count,
            fixed_expiry: None,
            fixed_cvv: None,
        }
    }

    pub fn with_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.fixed_expiry = Some(expiry.into());
        self
    }

    pub fn with_cvv(mut self, cvv: impl Into<String>) -> Self {
        self.fixed_cvv = Some(cvv.into());
        self
    }
}
