use crate::command::parser::GenArgs;
use shared::domain::{requests::GenerateCardsRequest, responses::CardBatch};

pub const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━";

pub const GEN_USAGE: &str = "❌ Missing BIN prefix.\n\n\
     Usage: `/gen <BIN> [quantity] [MM|YY] [CVV]`\n\
     Example: `/gen 453201 10`";

pub const GEN_INVALID_BIN: &str = "❌ BIN must be 6-8 digits.";

pub const GEN_FAILED: &str = "❌ Could not generate cards.";

impl From<GenArgs> for GenerateCardsRequest {
    fn from(args: GenArgs) -> Self {
        Self {
            prefix: args.bin,
            count: args.quantity,
            fixed_expiry: args.fixed_expiry,
            fixed_cvv: args.fixed_cvv,
        }
    }
}

pub fn format_batch(bin: &str, batch: &CardBatch) -> String {
    let lines = batch
        .records
        .iter()
        .map(|card| format!("`{card}`"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "⚡ *BIN Generator*\n📌 BIN: `{bin}` | Quantity: {}\n{DIVIDER}\n{lines}\n{DIVIDER}",
        batch.len()
    )
}
