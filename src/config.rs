use std::{env, path::PathBuf, time::Duration};

use crate::error::ConfigError;
use crate::loader::DEFAULT_LOAD_DELAY;

pub const SESSION_PATH_VAR: &str = "FINTRACK_SESSION_PATH";
pub const LOAD_DELAY_VAR: &str = "FINTRACK_LOAD_DELAY_MS";
pub const CURRENCY_VAR: &str = "FINTRACK_CURRENCY";

/// Application configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub session_path: PathBuf,
    pub load_delay: Duration,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_path: PathBuf::from("fintrack-session.json"),
            load_delay: DEFAULT_LOAD_DELAY,
            currency: "USD".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = lookup(SESSION_PATH_VAR) {
            config.session_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(LOAD_DELAY_VAR) {
            let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidDelay {
                name: LOAD_DELAY_VAR,
                value: raw.clone(),
            })?;
            config.load_delay = Duration::from_millis(millis);
        }
        if let Some(currency) = lookup(CURRENCY_VAR) {
            config.currency = currency.trim().to_uppercase();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.load_delay, Duration::from_millis(800));
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (SESSION_PATH_VAR, "/tmp/session.json"),
            (LOAD_DELAY_VAR, "0"),
            (CURRENCY_VAR, "eur"),
        ]))
        .unwrap();
        assert_eq!(config.session_path, PathBuf::from("/tmp/session.json"));
        assert_eq!(config.load_delay, Duration::ZERO);
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn rejects_non_numeric_delay() {
        let err = AppConfig::from_lookup(lookup(&[(LOAD_DELAY_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelay { .. }));
    }
}
