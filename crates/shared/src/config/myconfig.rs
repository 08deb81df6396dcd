use anyhow::{Context, Result, anyhow};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub port: u16,
    pub telegram_api_url: String,
    pub bin_lookup_url: String,
    pub poll_timeout_secs: u64,
    pub is_dev: bool,
    pub generator: GeneratorConfig,
}

/// Quantity policy applied by the `/gen` command before the generator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub default_quantity: usize,
    pub max_quantity: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_quantity: 10,
            max_quantity: 50,
        }
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("BOT_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .context("Missing env: BOT_TOKEN")?;

        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let poll_timeout_secs = parse_or(&lookup, "POLL_TIMEOUT_SECS", 30u64)?;

        let telegram_api_url = lookup("TELEGRAM_API_URL")
            .unwrap_or_else(|| "https://api.telegram.org".to_string())
            .trim_end_matches('/')
            .to_string();
        let bin_lookup_url = lookup("BIN_LOOKUP_URL")
            .unwrap_or_else(|| "https://lookup.binlist.net".to_string())
            .trim_end_matches('/')
            .to_string();

        let is_dev = match lookup("DEV_MODE").as_deref() {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(anyhow!(
                    "DEV_MODE must be 'true', 'false', '1' or '0', got '{other}'",
                ));
            }
        };

        let defaults = GeneratorConfig::default();
        let generator = GeneratorConfig {
            default_quantity: parse_or(&lookup, "DEFAULT_QUANTITY", defaults.default_quantity)?,
            max_quantity: parse_or(&lookup, "MAX_QUANTITY", defaults.max_quantity)?,
        };

        if generator.default_quantity == 0 || generator.max_quantity < generator.default_quantity {
            return Err(anyhow!(
                "Quantity limits must satisfy 1 <= DEFAULT_QUANTITY <= MAX_QUANTITY, got {} and {}",
                generator.default_quantity,
                generator.max_quantity
            ));
        }

        Ok(Self {
            bot_token,
            port,
            telegram_api_url,
            bin_lookup_url,
            poll_timeout_secs,
            is_dev,
            generator,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = config_from(&[("BOT_TOKEN", "123:abc")]).unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.port, 8080);
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
        assert_eq!(config.bin_lookup_url, "https://lookup.binlist.net");
        assert_eq!(config.poll_timeout_secs, 30);
        assert!(!config.is_dev);
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("BOT_TOKEN", "t"),
            ("PORT", "9000"),
            ("BIN_LOOKUP_URL", "http://localhost:3000/"),
            ("DEV_MODE", "1"),
            ("DEFAULT_QUANTITY", "5"),
            ("MAX_QUANTITY", "20"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.bin_lookup_url, "http://localhost:3000");
        assert!(config.is_dev);
        assert_eq!(config.generator.default_quantity, 5);
        assert_eq!(config.generator.max_quantity, 20);
    }

    #[test]
    fn requires_bot_token() {
        let err = config_from(&[("PORT", "8080")]).unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(config_from(&[("BOT_TOKEN", "t"), ("PORT", "http")]).is_err());
        assert!(config_from(&[("BOT_TOKEN", "t"), ("DEV_MODE", "yes")]).is_err());
        assert!(
            config_from(&[
                ("BOT_TOKEN", "t"),
                ("DEFAULT_QUANTITY", "60"),
                ("MAX_QUANTITY", "50")
            ])
            .is_err()
        );
    }

    #[test]
    fn parses_dev_mode_strictly() {
        let cases = [
            ("true", true),
            ("1", true),
            ("false", false),
            ("0", false),
            ("", false),
        ];

        for (raw, expected) in cases {
            let config = config_from(&[("BOT_TOKEN", "t"), ("DEV_MODE", raw)]).unwrap();
            assert_eq!(config.is_dev, expected, "DEV_MODE={raw}");
        }

        assert!(config_from(&[("BOT_TOKEN", "t"), ("DEV_MODE", "TRUE")]).is_err());
    }
}
