//! Environment-driven settings. A `.env` file is honoured when present.

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SITE_URL: &str = "https://apprenticewatch.com";
const DEFAULT_STAT_DEADLINE_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&read_or("APP_ENV", "development"));
        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            telemetry: TelemetryConfig::from_env(environment),
            site: SiteConfig::from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: read_or("APP_HOST", DEFAULT_HOST),
            port: parse_or("APP_PORT", DEFAULT_PORT).map_err(|_| ConfigError::InvalidPort)?,
        })
    }

    /// `localhost` is accepted as an alias for the IPv4 loopback.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost { source })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Coloured output; only wanted on a developer terminal.
    pub ansi: bool,
}

impl TelemetryConfig {
    fn from_env(environment: AppEnvironment) -> Self {
        Self {
            log_level: read_or("APP_LOG_LEVEL", DEFAULT_LOG_LEVEL),
            ansi: environment.is_development(),
        }
    }
}

/// Content sources and third-party keys used while rendering pages.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Canonical origin, without a trailing slash.
    pub site_url: String,
    pub logo_dev_key: String,
    /// JSON listing export; the bundled sample is used when unset.
    pub listings_path: Option<PathBuf>,
    /// Company directory CSV; the compiled-in directory is used when unset.
    pub companies_path: Option<PathBuf>,
    /// Upper bound on how long the landing page waits for the vacancy count.
    pub stat_deadline: Duration,
}

impl SiteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let deadline_ms = parse_or("APP_STAT_DEADLINE_MS", DEFAULT_STAT_DEADLINE_MS)
            .map_err(|_| ConfigError::InvalidStatDeadline)?;

        Ok(Self {
            site_url: read_or("APP_SITE_URL", DEFAULT_SITE_URL)
                .trim_end_matches('/')
                .to_string(),
            logo_dev_key: env::var("LOGODEV_KEY").unwrap_or_default(),
            listings_path: read_path("APP_LISTINGS_PATH"),
            companies_path: read_path("APP_COMPANIES_PATH"),
            stat_deadline: Duration::from_millis(deadline_ms),
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            logo_dev_key: String::new(),
            listings_path: None,
            companies_path: None,
            stat_deadline: Duration::from_millis(DEFAULT_STAT_DEADLINE_MS),
        }
    }
}

fn read_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: FromStr>(key: &str, default: T) -> Result<T, T::Err> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse(),
        Err(_) => Ok(default),
    }
}

/// Blank values count as unset.
fn read_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidStatDeadline,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must be `localhost` or an IPv4/IPv6 address")
            }
            ConfigError::InvalidStatDeadline => {
                write!(f, "APP_STAT_DEADLINE_MS must be a whole number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::InvalidStatDeadline => None,
        }
    }
}
