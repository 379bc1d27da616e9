use std::time::Duration;

use thiserror::Error;

use crate::player::{PlayerConfig, SeekPolicy, track::duration_from_secs};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub frame_rate: Duration,
    pub toast_lifetime: Duration,
    pub toast_slide: Duration,
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_rate: Duration::from_millis(33),
            toast_lifetime: Duration::from_millis(3000),
            toast_slide: Duration::from_millis(300),
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub player: PlayerConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PLAYDECK_DEFAULT_DURATION") {
            config.player.default_duration = value
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|secs| duration_from_secs(secs).ok())
                .ok_or_else(|| invalid("PLAYDECK_DEFAULT_DURATION", &value))?;
        }

        if let Some(value) = lookup("PLAYDECK_SEEK_POLICY") {
            config.player.seek_policy = match value.trim().to_ascii_lowercase().as_str() {
                "clamp" => SeekPolicy::Clamp,
                "reject" => SeekPolicy::Reject,
                _ => return Err(invalid("PLAYDECK_SEEK_POLICY", &value)),
            };
        }

        if let Some(value) = lookup("PLAYDECK_TOAST_MS") {
            let millis = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| invalid("PLAYDECK_TOAST_MS", &value))?;
            config.ui.toast_lifetime = Duration::from_millis(millis);
        }

        if let Some(value) = lookup("PLAYDECK_MOUSE") {
            config.ui.mouse = match value.trim() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => return Err(invalid("PLAYDECK_MOUSE", &value)),
            };
        }

        Ok(config)
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
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
    fn defaults_without_overrides() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.player.default_duration, Duration::from_secs(213));
        assert_eq!(config.player.seek_policy, SeekPolicy::Clamp);
        assert_eq!(config.ui.toast_lifetime, Duration::from_millis(3000));
        assert!(config.ui.mouse);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PLAYDECK_DEFAULT_DURATION", "10"),
            ("PLAYDECK_SEEK_POLICY", "Reject"),
            ("PLAYDECK_TOAST_MS", "1500"),
            ("PLAYDECK_MOUSE", "0"),
        ]))
        .unwrap();

        assert_eq!(config.player.default_duration, Duration::from_secs(10));
        assert_eq!(config.player.seek_policy, SeekPolicy::Reject);
        assert_eq!(config.ui.toast_lifetime, Duration::from_millis(1500));
        assert!(!config.ui.mouse);
    }

    #[test]
    fn rejects_bad_values() {
        let err = AppConfig::from_lookup(lookup(&[("PLAYDECK_DEFAULT_DURATION", "-4")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "PLAYDECK_DEFAULT_DURATION",
                value: "-4".to_string(),
            }
        );

        assert!(AppConfig::from_lookup(lookup(&[("PLAYDECK_SEEK_POLICY", "wrap")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("PLAYDECK_TOAST_MS", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("PLAYDECK_MOUSE", "maybe")])).is_err());
    }
}
