use std::env;
use crate::error::{SelectError, Result};
use dotenvy::dotenv;

/// Environment variable selecting deep candidate traversal.
pub const DEEP_VAR: &str = "RUBBERBAND_DEEP";
/// Environment variable holding the tracing filter directive.
pub const LOG_VAR: &str = "RUBBERBAND_LOG";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub deep: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deep: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists, ignore if it doesn't
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let deep = match lookup(DEEP_VAR) {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| SelectError::config(format!("{DEEP_VAR} must be a boolean, got '{raw}'")))?,
            None => defaults.deep,
        };

        let log_filter = lookup(LOG_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self { deep, log_filter })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
