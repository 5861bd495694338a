use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::policy::Money;
use crate::workflows::hostel::HostelTariff;
use crate::workflows::placement::EligibilityConfig;

const DEFAULT_INTAKE_YEAR: i32 = 2026;

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub policy: PolicyConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            policy: PolicyConfig::from_env()?,
        })
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
}

/// Thresholds and tariffs handed to the workflows at composition time.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    pub eligibility: EligibilityConfig,
    pub tariff: HostelTariff,
    pub intake_year: i32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            eligibility: EligibilityConfig::default(),
            tariff: HostelTariff::standard(),
            intake_year: DEFAULT_INTAKE_YEAR,
        }
    }
}

impl PolicyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(min_cgpa) = parse_var::<f64>("PLACEMENT_MIN_CGPA")? {
            if !min_cgpa.is_finite() || min_cgpa < 0.0 {
                return Err(ConfigError::OutOfRange {
                    key: "PLACEMENT_MIN_CGPA",
                    value: min_cgpa.to_string(),
                });
            }
            config.eligibility.min_cgpa = min_cgpa;
        }
        if let Some(min_attendance) = parse_var::<u8>("PLACEMENT_MIN_ATTENDANCE")? {
            config.eligibility.min_attendance_pct = min_attendance;
        }
        if let Some(min_credits) = parse_var::<u16>("PLACEMENT_MIN_CREDITS")? {
            config.eligibility.min_credits = min_credits;
        }
        if let Some(rent) = parse_rupees("HOSTEL_FALLBACK_RENT")? {
            config.tariff.fallback_room_rate = rent;
        }
        if let Some(deposit) = parse_rupees("HOSTEL_DEPOSIT")? {
            config.tariff.security_deposit = deposit;
        }
        if let Some(year) = parse_var::<i32>("ONBOARDING_INTAKE_YEAR")? {
            config.intake_year = year;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Whole rupees, non-negative and small enough to hold in paise.
fn parse_rupees(key: &'static str) -> Result<Option<Money>, ConfigError> {
    let Some(amount) = parse_var::<i64>(key)? else {
        return Ok(None);
    };
    if amount < 0 {
        return Err(ConfigError::OutOfRange {
            key,
            value: amount.to_string(),
        });
    }
    Money::try_rupees(amount)
        .map(Some)
        .ok_or_else(|| ConfigError::InvalidNumber {
            key,
            value: amount.to_string(),
        })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    OutOfRange { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be numeric (found '{value}')")
            }
            ConfigError::OutOfRange { key, value } => {
                write!(f, "{key} must be finite and non-negative (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::OutOfRange { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
