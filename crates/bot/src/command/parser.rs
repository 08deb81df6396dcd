use regex::Regex;
use shared::config::GeneratorConfig;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Gen(GenArgs),
    GenUsage,
    GenInvalidBin,
    Check(String),
    CheckUsage,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Gen(_) | Command::GenUsage | Command::GenInvalidBin => "gen",
            Command::Check(_) | Command::CheckUsage => "check",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenArgs {
    pub bin: String,
    pub quantity: usize,
    pub fixed_expiry: Option<String>,
    pub fixed_cvv: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenArgsError {
    #[error("no BIN given")]
    MissingBin,

    #[error("BIN must be 6-8 digits, got {0}")]
    InvalidBin(usize),
}

/// Turns chat text into bot commands. Commands may carry an `@botname` suffix.
#[derive(Debug, Clone)]
pub struct CommandParser {
    command: Regex,
    bin: Regex,
    expiry: Regex,
    cvv: Regex,
    limits: GeneratorConfig,
}

impl CommandParser {
    pub fn new(limits: GeneratorConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            command: Regex::new(r"(?s)^/([A-Za-z]+)(?:@\w+)?(?:\s+(.*))?$")?,
            bin: Regex::new(r"^\d{6,8}$")?,
            expiry: Regex::new(r"^(\d{2})\|(\d{2})$")?,
            cvv: Regex::new(r"^\d{3}$")?,
            limits,
        })
    }

    pub fn limits(&self) -> GeneratorConfig {
        self.limits
    }

    /// Returns `None` for text that is not one of the bot's commands.
    pub fn parse(&self, text: &str) -> Option<Command> {
        let caps = self.command.captures(text.trim())?;
        let name = caps.get(1)?.as_str().to_ascii_lowercase();
        let args = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();

        match name.as_str() {
            "start" => Some(Command::Start),
            "gen" => Some(match self.parse_gen(args) {
                Ok(gen_args) => Command::Gen(gen_args),
                Err(GenArgsError::MissingBin) => Command::GenUsage,
                Err(GenArgsError::InvalidBin(_)) => Command::GenInvalidBin,
            }),
            "check" => {
                let bin = args.split_whitespace().next().unwrap_or_default();
                Some(if self.bin.is_match(bin) {
                    Command::Check(bin.to_string())
                } else {
                    Command::CheckUsage
                })
            }
            _ => None,
        }
    }

    pub fn parse_gen(&self, args: &str) -> Result<GenArgs, GenArgsError> {
        let mut parts = args.split_whitespace();

        let raw_bin = parts.next().ok_or(GenArgsError::MissingBin)?;
        let bin: String = raw_bin.chars().filter(|c| c.is_ascii_digit()).collect();
        if !(6..=8).contains(&bin.len()) {
            return Err(GenArgsError::InvalidBin(bin.len()));
        }

        let quantity = match parts.next().and_then(leading_integer) {
            Some(n) if n >= 1 => usize::try_from(n)
                .unwrap_or(usize::MAX)
                .min(self.limits.max_quantity),
            _ => self.limits.default_quantity,
        };

        let fixed_expiry = parts
            .next()
            .filter(|exp| self.is_valid_expiry(exp))
            .map(str::to_string);

        let fixed_cvv = parts
            .next()
            .filter(|cvv| self.cvv.is_match(cvv))
            .map(str::to_string);

        Ok(GenArgs {
            bin,
            quantity,
            fixed_expiry,
            fixed_cvv,
        })
    }

    fn is_valid_expiry(&self, value: &str) -> bool {
        self.expiry
            .captures(value)
            .and_then(|caps| caps.get(1)?.as_str().parse::<u8>().ok())
            .is_some_and(|month| (1..=12).contains(&month))
    }
}

/// Reads an optional sign and the leading run of digits, ignoring whatever follows.
/// Values beyond `i64` saturate.
fn leading_integer(value: &str) -> Option<i64> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
