use crate::command::generate::DIVIDER;
use shared::{
    domain::responses::BinResponse,
    errors::{ClientError, ServiceError},
};

pub const CHECK_USAGE: &str = "❌ Missing BIN.\n\n\
     Usage: `/check <BIN>`\n\
     Example: `/check 453201`";

pub const CHECK_PENDING: &str = "🔍 Looking up BIN...";

pub fn lookup_error_message(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::Client(ClientError::NotFound) => "BIN not found.",
        ServiceError::Client(ClientError::RateLimited) => {
            "Too many requests. Please try again later."
        }
        ServiceError::Client(ClientError::Http(_)) => "Service unavailable.",
        _ => "Lookup failed.",
    }
}

pub fn format_bin(info: &BinResponse) -> String {
    let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());

    let scheme = info
        .scheme
        .as_deref()
        .unwrap_or("Unknown")
        .to_uppercase();
    let prepaid = match info.prepaid {
        Some(true) => "✅ Yes",
        Some(false) => "❌ No",
        None => "N/A",
    };
    let country = match (&info.country_emoji, &info.country_name) {
        (None, None) => "N/A".to_string(),
        (emoji, name) => format!(
            "{} {}",
            emoji.as_deref().unwrap_or_default(),
            name.as_deref().unwrap_or("N/A")
        )
        .trim_start()
        .to_string(),
    };

    let mut text = format!("🔍 *BIN Lookup*\n{DIVIDER}\n");
    text.push_str(&format!("📌 BIN: `{}`\n", info.bin));
    text.push_str(&format!("💳 Scheme: *{scheme}*\n"));
    text.push_str(&format!("📋 Type: {}\n", or_na(&info.card_type)));
    text.push_str(&format!("🏷 Brand: {}\n", or_na(&info.brand)));
    text.push_str(&format!("💰 Prepaid: {prepaid}\n"));
    text.push_str(&format!("🌍 Country: {country}\n"));
    text.push_str(&format!("🏦 Bank: {}\n", or_na(&info.bank_name)));
    if let Some(url) = &info.bank_url {
        text.push_str(&format!("🌐 Website: {url}\n"));
    }
    if let Some(phone) = &info.bank_phone {
        text.push_str(&format!("📞 Phone: {phone}\n"));
    }
    text.push_str(DIVIDER);

    text
}
