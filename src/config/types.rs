//! Configuration types.
//!
//! `Config` is built once at process start, either from the real environment
//! (`Config::from_env`) or from any key lookup (`Config::from_lookup`), and then
//! passed by reference into pool initialization and the handler.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::config::constants::*;
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err("expected one of error, warn, info, debug, trace".to_string()),
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line, for Cloud Logging ingestion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            _ => Err("expected plain or json".to_string()),
        }
    }
}

/// Connection pool limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Connections kept available under normal load
    pub pool_size: u32,
    /// Extra connections allowed beyond `pool_size`
    pub max_overflow: u32,
    /// Maximum wait for a connection checkout
    pub acquire_timeout: Duration,
    /// Maximum age of a connection before it is replaced
    pub recycle: Duration,
}

impl PoolSettings {
    /// Hard cap on open connections: `pool_size + max_overflow`.
    pub fn max_connections(&self) -> u32 {
        self.pool_size.saturating_add(self.max_overflow)
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            pool_size: POOL_SIZE,
            max_overflow: POOL_MAX_OVERFLOW,
            acquire_timeout: POOL_ACQUIRE_TIMEOUT,
            recycle: POOL_RECYCLE,
        }
    }
}

/// Handler configuration, read once at cold start.
#[derive(Clone)]
pub struct Config {
    /// Cloud SQL instance identifier (`project:region:instance`)
    pub instance_connection_name: String,

    /// Database user
    pub db_user: String,

    /// Database (schema) name
    pub db_name: String,

    /// Database password
    pub db_password: String,

    /// Directory holding the instance's Unix socket
    pub socket_dir: PathBuf,

    /// HTTP port the invocation server listens on
    pub port: u16,

    /// Check for the target table and create it when missing
    pub ensure_schema: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Connection pool limits
    pub pool: PoolSettings,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("instance_connection_name", &self.instance_connection_name)
            .field("db_user", &self.db_user)
            .field("db_name", &self.db_name)
            .field("db_password", &"<redacted>")
            .field("socket_dir", &self.socket_dir)
            .field("port", &self.port)
            .field("ensure_schema", &self.ensure_schema)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("pool", &self.pool)
            .finish()
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a required variable is missing or empty, or if
    /// any provided value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Required: `INSTANCE_CONNECTION_NAME`, `DB_USER`, `DB_NAME`, `DB_PASSWORD`.
    /// Optional: `CLOUDSQL_SOCKET_DIR`, `PORT`, `ENSURE_SCHEMA`, `LOG_LEVEL`, `LOG_FORMAT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };
        let optional = |key: &'static str| -> Option<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let instance_connection_name = required(ENV_INSTANCE_CONNECTION_NAME)?;
        validate_instance_connection_name(&instance_connection_name)?;
        let db_user = required(ENV_DB_USER)?;
        let db_name = required(ENV_DB_NAME)?;
        // Passwords are taken verbatim; only absence is an error.
        let db_password = lookup(ENV_DB_PASSWORD)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(ENV_DB_PASSWORD))?;

        let socket_dir = optional(ENV_SOCKET_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_DIR));

        let port = match optional(ENV_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: ENV_PORT,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let ensure_schema = match optional(ENV_ENSURE_SCHEMA) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_ENSURE_SCHEMA,
                value: raw.clone(),
                reason: "expected true or false".to_string(),
            })?,
            None => false,
        };

        let log_level = match optional(ENV_LOG_LEVEL) {
            Some(raw) => raw
                .parse::<LogLevel>()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: ENV_LOG_LEVEL,
                    value: raw.clone(),
                    reason,
                })?,
            None => LogLevel::Info,
        };

        let log_format = match optional(ENV_LOG_FORMAT) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: ENV_LOG_FORMAT,
                    value: raw.clone(),
                    reason,
                })?,
            None => LogFormat::Plain,
        };

        Ok(Self {
            instance_connection_name,
            db_user,
            db_name,
            db_password,
            socket_dir,
            port,
            ensure_schema,
            log_level,
            log_format,
            pool: PoolSettings::default(),
        })
    }

    /// Path of the Unix socket the Cloud SQL proxy serves this instance on.
    pub fn socket_path(&self) -> PathBuf {
        self.socket_dir.join(&self.instance_connection_name)
    }
}

fn validate_instance_connection_name(value: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() == 3 && parts.iter().all(|p| !p.is_empty()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidInstanceConnectionName(value.to_string()))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (ENV_INSTANCE_CONNECTION_NAME, "my-project:us-central1:inventory".to_string()),
            (ENV_DB_USER, "app".to_string()),
            (ENV_DB_NAME, "inventory".to_string()),
            (ENV_DB_PASSWORD, "s3cret".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = load(&base_env()).expect("base env should load");
        assert_eq!(config.instance_connection_name, "my-project:us-central1:inventory");
        assert_eq!(config.db_user, "app");
        assert_eq!(config.db_name, "inventory");
        assert_eq!(config.db_password, "s3cret");
        assert_eq!(config.socket_dir, PathBuf::from("/cloudsql"));
        assert_eq!(config.port, 8080);
        assert!(!config.ensure_schema);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_format, LogFormat::Plain);
        assert_eq!(config.pool, PoolSettings::default());
    }

    #[test]
    fn test_socket_path_uses_instance_name() {
        let config = load(&base_env()).unwrap();
        assert_eq!(
            config.socket_path(),
            PathBuf::from("/cloudsql/my-project:us-central1:inventory")
        );
    }

    #[test]
    fn test_socket_dir_override() {
        let mut env = base_env();
        env.insert(ENV_SOCKET_DIR, "/tmp/proxy".to_string());
        let config = load(&env).unwrap();
        assert_eq!(
            config.socket_path(),
            PathBuf::from("/tmp/proxy/my-project:us-central1:inventory")
        );
    }

    #[test]
    fn test_each_required_var_is_reported() {
        for key in [
            ENV_INSTANCE_CONNECTION_NAME,
            ENV_DB_USER,
            ENV_DB_NAME,
            ENV_DB_PASSWORD,
        ] {
            let mut env = base_env();
            env.remove(key);
            match load(&env) {
                Err(ConfigError::MissingVar(missing)) => assert_eq!(missing, key),
                other => panic!("expected MissingVar({key}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_blank_required_var_is_missing() {
        let mut env = base_env();
        env.insert(ENV_DB_USER, "   ".to_string());
        assert!(matches!(load(&env), Err(ConfigError::MissingVar(ENV_DB_USER))));
    }

    #[test]
    fn test_invalid_instance_connection_name() {
        for bad in ["inventory", "project:instance", "a::c", "a:b:c:d"] {
            let mut env = base_env();
            env.insert(ENV_INSTANCE_CONNECTION_NAME, bad.to_string());
            assert!(
                matches!(load(&env), Err(ConfigError::InvalidInstanceConnectionName(ref v)) if v == bad),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_optional_values_parse() {
        let mut env = base_env();
        env.insert(ENV_PORT, "9090".to_string());
        env.insert(ENV_ENSURE_SCHEMA, "TRUE".to_string());
        env.insert(ENV_LOG_LEVEL, "debug".to_string());
        env.insert(ENV_LOG_FORMAT, "json".to_string());
        let config = load(&env).unwrap();
        assert_eq!(config.port, 9090);
        assert!(config.ensure_schema);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut env = base_env();
        env.insert(ENV_PORT, "eighty".to_string());
        match load(&env) {
            Err(ConfigError::InvalidValue { key, value, .. }) => {
                assert_eq!(key, ENV_PORT);
                assert_eq!(value, "eighty");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_ensure_schema_is_rejected() {
        let mut env = base_env();
        env.insert(ENV_ENSURE_SCHEMA, "maybe".to_string());
        assert!(matches!(
            load(&env),
            Err(ConfigError::InvalidValue { key: ENV_ENSURE_SCHEMA, .. })
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = load(&base_env()).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_pool_settings_max_connections() {
        let settings = PoolSettings::default();
        assert_eq!(settings.pool_size, 5);
        assert_eq!(settings.max_overflow, 2);
        assert_eq!(settings.max_connections(), 7);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(30));
        assert_eq!(settings.recycle, Duration::from_secs(1800));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
