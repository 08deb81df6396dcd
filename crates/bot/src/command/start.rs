use shared::{config::GeneratorConfig, model::BotCommand};

pub fn bot_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Show usage instructions"),
        BotCommand::new("gen", "Generate card numbers from a BIN prefix"),
        BotCommand::new("check", "Look up BIN issuer details"),
    ]
}

pub fn welcome_text(limits: GeneratorConfig) -> String {
    format!(
        "💳 *BIN Generator Bot*\n\
         \n\
         Available commands:\n\
         \n\
         🔹 `/gen <BIN>` - Generate {default} random cards\n\
         🔹 `/gen <BIN> <quantity>` - Generate up to {max} cards\n\
         🔹 `/gen <BIN> <quantity> <MM|YY> <CVV>` - Pin expiry and CVV\n\
         🔹 `/check <BIN>` - Look up BIN details\n\
         \n\
         *Examples:*\n\
         `/gen 453201`\n\
         `/gen 453201 20`\n\
         `/gen 453201 10 05|28 123`\n\
         `/check 453201`",
        default = limits.default_quantity,
        max = limits.max_quantity,
    )
}
