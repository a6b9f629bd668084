//! Environment-driven configuration.
//!
//! Every setting has a default, so an empty environment is a valid
//! configuration.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const ENV_CURRENCY: &str = "TAGQUOTE_CURRENCY";
pub const ENV_THOUSANDS_SEP: &str = "TAGQUOTE_THOUSANDS_SEP";
pub const ENV_DIMENSION_UNIT: &str = "TAGQUOTE_DIMENSION_UNIT";
pub const ENV_UNTITLED: &str = "TAGQUOTE_UNTITLED";
pub const ENV_LOG: &str = "TAGQUOTE_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Separator must be exactly one character
    #[error("Invalid thousands separator {0:?}: expected a single character")]
    InvalidSeparator(String),

    /// Log filter could not be parsed
    #[error("Invalid log filter {0:?}")]
    InvalidLogFilter(String),
}

/// How invoice amounts and labels are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceConfig {
    pub currency: String,
    pub thousands_separator: char,
    pub dimension_unit: String,
    pub untitled_label: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            currency: "Rp".to_string(),
            thousands_separator: '.',
            dimension_unit: "mm".to_string(),
            untitled_label: "Untitled".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub invoice: InvoiceConfig,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            invoice: InvoiceConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset or blank keys fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = InvoiceConfig::default();

        // A space is a legitimate separator, so only an empty value means unset.
        let thousands_separator = match lookup(ENV_THOUSANDS_SEP).filter(|v| !v.is_empty()) {
            Some(raw) => single_char(&raw).ok_or(ConfigError::InvalidSeparator(raw))?,
            None => defaults.thousands_separator,
        };

        let log_filter = get(ENV_LOG).unwrap_or_else(|| "info".to_string());
        if EnvFilter::try_new(&log_filter).is_err() {
            return Err(ConfigError::InvalidLogFilter(log_filter));
        }

        let invoice = InvoiceConfig {
            currency: get(ENV_CURRENCY).unwrap_or(defaults.currency),
            thousands_separator,
            dimension_unit: get(ENV_DIMENSION_UNIT).unwrap_or(defaults.dimension_unit),
            untitled_label: get(ENV_UNTITLED).unwrap_or(defaults.untitled_label),
        };

        Ok(Self { invoice, log_filter })
    }

    pub fn invoice(&self) -> &InvoiceConfig {
        &self.invoice
    }
}

fn single_char(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_from_empty_environment() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.invoice().currency, "Rp");
        assert_eq!(config.invoice().thousands_separator, '.');
        assert_eq!(config.invoice().dimension_unit, "mm");
        assert_eq!(config.invoice().untitled_label, "Untitled");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_CURRENCY, "USD"),
            (ENV_THOUSANDS_SEP, ","),
            (ENV_DIMENSION_UNIT, "cm"),
            (ENV_UNTITLED, "No title"),
            (ENV_LOG, "debug,quotes_block=trace"),
        ]))
        .unwrap();

        assert_eq!(config.invoice().currency, "USD");
        assert_eq!(config.invoice().thousands_separator, ',');
        assert_eq!(config.invoice().dimension_unit, "cm");
        assert_eq!(config.invoice().untitled_label, "No title");
        assert_eq!(config.log_filter, "debug,quotes_block=trace");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[(ENV_CURRENCY, "  "), (ENV_LOG, "")])).unwrap();
        assert_eq!(config.invoice().currency, "Rp");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_space_separator() {
        let config = Config::from_lookup(lookup(&[(ENV_THOUSANDS_SEP, " ")])).unwrap();
        assert_eq!(config.invoice().thousands_separator, ' ');
    }

    #[test]
    fn test_rejects_long_separator() {
        let err = Config::from_lookup(lookup(&[(ENV_THOUSANDS_SEP, "..")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidSeparator("..".to_string()));
    }

    #[test]
    fn test_rejects_bad_log_filter() {
        let err = Config::from_lookup(lookup(&[(ENV_LOG, "quotes_block=loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFilter(_)));
    }
}
