use std::{env, fmt, time::Duration};

use thiserror::Error;

use crate::{catalog::CdnConfig, fault_injection::FaultInjection};

/// Errors raised while reading service configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// `ERROR_RATE` outside of `[0, 1]`
    #[error("ERROR_RATE must be between 0 and 1, got {0}")]
    ErrorRateOutOfRange(String),
}

/// Which demo deployment is being served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Blocking, failure-prone API serving unoptimized images
    Slow,
    /// Responsive API serving optimized images
    Fast,
}

impl Variant {
    /// Port used when `PORT` is unset
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Slow => 4000,
            Self::Fast => 4001,
        }
    }

    /// Fault injection applied when no overrides are set
    #[must_use]
    pub const fn default_fault_injection(self) -> FaultInjection {
        match self {
            Self::Slow => FaultInjection {
                blocking_delay: Duration::from_millis(100),
                error_rate: 0.05,
            },
            Self::Fast => FaultInjection::disabled(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slow => write!(f, "slow"),
            Self::Fast => write!(f, "fast"),
        }
    }
}

/// Immutable service configuration, read once at start-up
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub variant: Variant,
    pub port: u16,
    pub cdn: CdnConfig,
    pub fault_injection: FaultInjection,
}

impl ServiceConfig {
    /// Configuration with variant defaults and no environment overrides
    #[must_use]
    pub const fn defaults(variant: Variant) -> Self {
        Self {
            variant,
            port: variant.default_port(),
            cdn: CdnConfig {
                use_cdn: false,
                base_url: None,
            },
            fault_injection: variant.default_fault_injection(),
        }
    }

    /// Reads `PORT`, `USE_CDN`, `CDN_BASE_URL`, `BLOCKING_DELAY_MS` and `ERROR_RATE`
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or `ERROR_RATE` is out of range
    pub fn from_env(variant: Variant) -> Result<Self, ConfigError> {
        Self::from_lookup(variant, |name| env::var(name).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or `ERROR_RATE` is out of range
    pub fn from_lookup<F>(variant: Variant, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::defaults(variant);
        // Set-but-empty numeric variables fall back to the variant default
        let numeric = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(port) = numeric("PORT") {
            config.port = parse_var("PORT", &port)?;
        }

        config.cdn = CdnConfig::new(
            lookup("USE_CDN").as_deref() == Some("true"),
            lookup("CDN_BASE_URL").as_deref(),
        );

        if let Some(delay) = numeric("BLOCKING_DELAY_MS") {
            config.fault_injection.blocking_delay =
                Duration::from_millis(parse_var("BLOCKING_DELAY_MS", &delay)?);
        }

        if let Some(rate) = numeric("ERROR_RATE") {
            let parsed: f64 = parse_var("ERROR_RATE", &rate)?;
            if !(0.0..=1.0).contains(&parsed) {
                return Err(ConfigError::ErrorRateOutOfRange(rate));
            }
            config.fault_injection.error_rate = parsed;
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_variant_defaults() {
        let slow = ServiceConfig::from_lookup(Variant::Slow, lookup(&[])).unwrap();
        assert_eq!(slow.port, 4000);
        assert_eq!(slow.fault_injection.blocking_delay, Duration::from_millis(100));
        assert!((slow.fault_injection.error_rate - 0.05).abs() < f64::EPSILON);
        assert_eq!(slow.cdn, CdnConfig::default());

        let fast = ServiceConfig::from_lookup(Variant::Fast, lookup(&[])).unwrap();
        assert_eq!(fast.port, 4001);
        assert_eq!(fast.fault_injection, FaultInjection::disabled());
    }

    #[test]
    fn test_use_cdn_requires_true_literal() {
        for value in ["TRUE", "1", "yes", ""] {
            let config = ServiceConfig::from_lookup(
                Variant::Fast,
                lookup(&[("USE_CDN", value), ("CDN_BASE_URL", "https://cdn.example.com")]),
            )
            .unwrap();
            assert!(!config.cdn.use_cdn, "USE_CDN={value}");
        }

        let config =
            ServiceConfig::from_lookup(Variant::Fast, lookup(&[("USE_CDN", "true")])).unwrap();
        assert!(config.cdn.use_cdn);
    }

    #[test]
    fn test_cdn_base_url_trailing_slash_stripped() {
        let config = ServiceConfig::from_lookup(
            Variant::Fast,
            lookup(&[("USE_CDN", "true"), ("CDN_BASE_URL", "https://cdn.example.com/")]),
        )
        .unwrap();
        assert_eq!(config.cdn.base_url.as_deref(), Some("https://cdn.example.com"));
    }

    #[test]
    fn test_fault_injection_overrides() {
        let config = ServiceConfig::from_lookup(
            Variant::Fast,
            lookup(&[("BLOCKING_DELAY_MS", "250"), ("ERROR_RATE", "0.5")]),
        )
        .unwrap();
        assert_eq!(config.fault_injection.blocking_delay, Duration::from_millis(250));
        assert!((config.fault_injection.error_rate - 0.5).abs() < f64::EPSILON);

        let config = ServiceConfig::from_lookup(
            Variant::Slow,
            lookup(&[("BLOCKING_DELAY_MS", "0"), ("ERROR_RATE", "0")]),
        )
        .unwrap();
        assert!(!config.fault_injection.is_enabled());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert_eq!(
            ServiceConfig::from_lookup(Variant::Fast, lookup(&[("PORT", "http")])),
            Err(ConfigError::InvalidValue {
                name: "PORT",
                value: "http".to_string()
            })
        );
        assert_eq!(
            ServiceConfig::from_lookup(Variant::Fast, lookup(&[("ERROR_RATE", "1.5")])),
            Err(ConfigError::ErrorRateOutOfRange("1.5".to_string()))
        );
        assert!(ServiceConfig::from_lookup(Variant::Fast, lookup(&[("ERROR_RATE", "NaN")])).is_err());
    }

    #[test]
    fn test_empty_numeric_values_use_defaults() {
        let config = ServiceConfig::from_lookup(
            Variant::Slow,
            lookup(&[("PORT", ""), ("BLOCKING_DELAY_MS", " "), ("ERROR_RATE", "")]),
        )
        .unwrap();

        assert_eq!(config, ServiceConfig::defaults(Variant::Slow));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_port() {
        env::set_var("PORT", "5055");
        let config = ServiceConfig::from_env(Variant::Slow).unwrap();
        env::remove_var("PORT");

        assert_eq!(config.port, 5055);
        assert_eq!(config.variant, Variant::Slow);
    }
}
