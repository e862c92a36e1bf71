//! Startup settings read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::session::Theme;

const CONTENT: &str = "PORTFOLIO_CONTENT";
const THEME: &str = "PORTFOLIO_THEME";
const SKIP_BOOT: &str = "PORTFOLIO_SKIP_BOOT";
const SUBMIT_COOLDOWN_MS: &str = "PORTFOLIO_SUBMIT_COOLDOWN_MS";

const DEFAULT_SUBMIT_COOLDOWN: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file replacing the built-in content tables.
    pub content_path: Option<PathBuf>,
    pub theme: Theme,
    pub skip_boot: bool,
    /// Input lock after each submitted line.
    pub submit_cooldown: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: None,
            theme: Theme::Standard,
            skip_boot: false,
            submit_cooldown: DEFAULT_SUBMIT_COOLDOWN,
        }
    }
}

impl Config {
    /// Load `.env` if there is one, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(CONTENT) {
            config.content_path = Some(PathBuf::from(path));
        }
        if let Some(theme) = get(THEME) {
            config.theme = theme.parse()?;
        }
        if let Some(value) = get(SKIP_BOOT) {
            config.skip_boot = parse_bool(SKIP_BOOT, &value)?;
        }
        if let Some(value) = get(SUBMIT_COOLDOWN_MS) {
            let ms = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: SUBMIT_COOLDOWN_MS,
                    value: value.clone(),
                })?;
            config.submit_cooldown = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.submit_cooldown, Duration::from_millis(250));
    }

    #[test]
    fn reads_every_setting() {
        let config = Config::from_lookup(lookup(&[
            (CONTENT, "/tmp/portfolio.json"),
            (THEME, "Void"),
            (SKIP_BOOT, "yes"),
            (SUBMIT_COOLDOWN_MS, "0"),
        ]))
        .unwrap();
        assert_eq!(config.content_path, Some(PathBuf::from("/tmp/portfolio.json")));
        assert_eq!(config.theme, Theme::Void);
        assert!(config.skip_boot);
        assert_eq!(config.submit_cooldown, Duration::ZERO);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[(THEME, "  "), (CONTENT, "")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[(THEME, "neon")])),
            Err(ConfigError::InvalidTheme("neon".into()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(SKIP_BOOT, "maybe")])),
            Err(ConfigError::InvalidBool {
                key: SKIP_BOOT,
                value: "maybe".into()
            })
        );
        assert!(matches!(
            Config::from_lookup(lookup(&[(SUBMIT_COOLDOWN_MS, "-5")])),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }
}
