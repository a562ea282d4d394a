//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use souq_commerce::order::DEFAULT_WHATSAPP_NUMBER;
use souq_commerce::{Currency, Lang};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Validate the config, returning (errors, warnings).
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if let Err(e) = souq_commerce::order::OrderChannel::new(&self.store.whatsapp_number) {
            errors.push(format!("store.whatsapp_number: {}", e));
        } else if self.store.whatsapp_number == DEFAULT_WHATSAPP_NUMBER {
            warnings.push("store.whatsapp_number is the placeholder number".to_string());
        }

        if Lang::from_code(&self.store.default_lang).is_none() {
            errors.push(format!(
                "store.default_lang '{}' must be 'en' or 'ar'",
                self.store.default_lang
            ));
        }

        if Currency::from_code(&self.store.currency).is_none() {
            errors.push(format!(
                "store.currency '{}' is not supported",
                self.store.currency
            ));
        }

        if let Some(ref path) = self.store.catalog_path {
            if !std::path::Path::new(path).exists() {
                warnings.push(format!("store.catalog_path '{}' does not exist", path));
            }
        }

        if !matches!(self.log.format.as_str(), "human" | "json") {
            errors.push(format!(
                "log.format '{}' must be 'human' or 'json'",
                self.log.format
            ));
        }

        if !matches!(
            self.log.level.as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            warnings.push(format!("log.level '{}' is unusual", self.log.level));
        }

        (errors, warnings)
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Number orders are sent to, in international format.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Interface language (`en` or `ar`).
    #[serde(default = "default_lang")]
    pub default_lang: String,

    /// Currency code prices are shown in.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Products JSON to use instead of the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
}

fn default_whatsapp_number() -> String {
    DEFAULT_WHATSAPP_NUMBER.to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_currency() -> String {
    "QAR".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            default_lang: default_lang(),
            currency: default_currency(),
            catalog_path: None,
        }
    }
}

impl StoreConfig {
    pub fn lang(&self) -> Lang {
        Lang::from_code(&self.default_lang).unwrap_or_default()
    }

    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.currency).unwrap_or_default()
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// `human` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default souq.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Souq storefront configuration

[store]
whatsapp_number = "{number}"
default_lang = "en"
currency = "QAR"
# catalog_path = "products.json"

[log]
level = "warn"
format = "human"
"#,
        number = DEFAULT_WHATSAPP_NUMBER
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: CliConfig = toml::from_str("[store]\nwhatsapp_number = \"97455551234\"\n").unwrap();
        assert_eq!(config.store.whatsapp_number, "97455551234");
        assert_eq!(config.store.lang(), Lang::En);
        assert_eq!(config.store.currency(), Currency::QAR);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_generated_config_parses_and_checks() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        let (errors, warnings) = config.check();
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_check_reports_errors() {
        let mut config = CliConfig::default();
        config.store.whatsapp_number = "call me".to_string();
        config.store.default_lang = "fr".to_string();
        config.log.format = "xml".to_string();
        let (errors, _) = config.check();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("souq.json");
        std::fs::write(&path, r#"{"store": {"default_lang": "ar", "currency": "sar"}}"#).unwrap();
        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.store.lang(), Lang::Ar);
        assert_eq!(config.store.currency(), Currency::SAR);
    }
}
