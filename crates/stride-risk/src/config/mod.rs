use crate::risk::{AgeBasedStandards, RiskConfig, RiskConfigError, RiskThresholds, RiskWeights};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scoring service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub risk: RiskConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let ansi = env_or("APP_LOG_ANSI", false)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, ansi },
            risk: load_risk_config()?,
        })
    }
}

/// Reads `RISK_*` overrides on top of the engine defaults, then validates the result.
fn load_risk_config() -> Result<RiskConfig, ConfigError> {
    let weight_defaults = RiskWeights::default();
    let standard_defaults = AgeBasedStandards::default();
    let threshold_defaults = standard_defaults.risk_thresholds;

    let config = RiskConfig {
        weights: RiskWeights {
            average_steps: env_or("RISK_WEIGHT_AVERAGE", weight_defaults.average_steps)?,
            step_variability: env_or(
                "RISK_WEIGHT_VARIABILITY",
                weight_defaults.step_variability,
            )?,
            trend_direction: env_or("RISK_WEIGHT_TREND", weight_defaults.trend_direction)?,
            consistency: env_or("RISK_WEIGHT_CONSISTENCY", weight_defaults.consistency)?,
        },
        standards: AgeBasedStandards {
            target_steps: env_or("RISK_TARGET_STEPS", standard_defaults.target_steps)?,
            minimum_steps: env_or("RISK_MINIMUM_STEPS", standard_defaults.minimum_steps)?,
            risk_thresholds: RiskThresholds {
                low: env_or("RISK_THRESHOLD_LOW", threshold_defaults.low)?,
                medium: env_or("RISK_THRESHOLD_MEDIUM", threshold_defaults.medium)?,
                high: env_or("RISK_THRESHOLD_HIGH", threshold_defaults.high)?,
            },
        },
    };

    config.validate().map_err(ConfigError::InvalidRisk)?;
    Ok(config)
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        _ => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ansi: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidRisk(RiskConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} could not be parsed from '{value}'")
            }
            ConfigError::InvalidRisk(err) => write!(f, "invalid risk configuration: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidRisk(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    const KEYS: [&str; 14] = [
        "APP_ENV",
        "APP_HOST",
        "APP_PORT",
        "APP_LOG_LEVEL",
        "APP_LOG_ANSI",
        "RISK_WEIGHT_AVERAGE",
        "RISK_WEIGHT_VARIABILITY",
        "RISK_WEIGHT_TREND",
        "RISK_WEIGHT_CONSISTENCY",
        "RISK_TARGET_STEPS",
        "RISK_MINIMUM_STEPS",
        "RISK_THRESHOLD_LOW",
        "RISK_THRESHOLD_MEDIUM",
        "RISK_THRESHOLD_HIGH",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.ansi);
        assert_eq!(config.risk, RiskConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn risk_overrides_are_applied() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RISK_TARGET_STEPS", "6000");
        env::set_var("RISK_WEIGHT_TREND", "0.35");
        env::set_var("RISK_THRESHOLD_HIGH", "85");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.risk.standards.target_steps, 6000);
        assert_eq!(config.risk.standards.minimum_steps, 1500);
        assert_eq!(config.risk.weights.trend_direction, 0.35);
        assert_eq!(config.risk.standards.risk_thresholds.high, 85.0);
        reset_env();
    }

    #[test]
    fn rejects_unparsable_risk_value() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RISK_MINIMUM_STEPS", "lots");
        match AppConfig::load() {
            Err(ConfigError::InvalidNumber { key, value }) => {
                assert_eq!(key, "RISK_MINIMUM_STEPS");
                assert_eq!(value, "lots");
            }
            other => panic!("expected invalid number, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn rejects_invalid_risk_configuration() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RISK_WEIGHT_CONSISTENCY", "-0.1");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidRisk(RiskConfigError::InvalidWeight { .. }))
        ));
        reset_env();
    }
}
