use crate::model::BinInfo;
use serde::Serialize;

/// Issuer details for one BIN with the lookup service's optional fields flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinResponse {
    pub bin: String,
    pub scheme: Option<String>,
    pub card_type: Option<String>,
    pub brand: Option<String>,
    pub prepaid: Option<bool>,
    pub country_name: Option<String>,
    pub country_emoji: Option<String>,
    pub bank_name: Option<String>,
    pub bank_url: Option<String>,
    pub bank_phone: Option<String>,
}

impl BinResponse {
    pub fn from_info(bin: &str, info: BinInfo) -> Self {
        let (country_name, country_emoji) = info
            .country
            .map(|c| (c.name, c.emoji))
            .unwrap_or_default();
        let (bank_name, bank_url, bank_phone) = info
            .bank
            .map(|b| (b.name, b.url, b.phone))
            .unwrap_or_default();

        Self {
            bin: bin.to_string(),
            scheme: non_empty(info.scheme),
            card_type: non_empty(info.card_type),
            brand: non_empty(info.brand),
            prepaid: info.prepaid,
            country_name: non_empty(country_name),
            country_emoji: non_empty(country_emoji),
            bank_name: non_empty(bank_name),
            bank_url: non_empty(bank_url),
            bank_phone: non_empty(bank_phone),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
