use serde::Deserialize;

/// Body returned by the issuer directory for a BIN. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BinInfo {
    pub scheme: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub brand: Option<String>,
    pub prepaid: Option<bool>,
    pub country: Option<BinCountry>,
    pub bank: Option<BinBank>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BinCountry {
    pub name: Option<String>,
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BinBank {
    pub name: Option<String>,
    pub url: Option<String>,
    pub phone: Option<String>,
}
