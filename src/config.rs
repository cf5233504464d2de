//! Process configuration.
//!
//! Settings are read from the environment once at startup. A `.env` file in
//! the working directory is loaded first when present; variables already set
//! in the process environment take precedence over it.
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY` — credential for the Gemini API (absent → demo mode)
//! - `GEMINI_MODEL` — model name (default: `gemini-1.5-pro-latest`)
//! - `GEMINI_API_BASE` — API base URL (default: public v1beta endpoint)
//! - `GEMINI_TIMEOUT_SECS` — request timeout in seconds (default: none)
//! - `DEMO_ON_FAILURE` — switch to demo mode after a failed call (default: `true`)
//! - `SESSION_SECRET` — session secret (default: placeholder, logged as a warning)
//! - `HOST` / `PORT` — bind address (default: `0.0.0.0:5000`)
//! - `STATIC_DIR` — directory served under `/static` (default: `static`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::llms::providers::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Placeholder used when `SESSION_SECRET` is not set.
pub const DEFAULT_SESSION_SECRET: &str = "a-default-secret-key-if-not-set";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors raised while reading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the server.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub request_timeout: Option<Duration>,
    pub downgrade_on_failure: bool,
    pub session_secret: String,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// `.env` file that was loaded, if any. Reading settings logs nothing, so
    /// the caller reports this once its subscriber is installed.
    pub env_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: None,
            downgrade_on_failure: true,
            session_secret: DEFAULT_SESSION_SECRET.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            env_file: None,
        }
    }
}

impl Settings {
    /// Load settings from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_file = dotenv::dotenv().ok();
        let mut settings = Self::from_lookup(|key| std::env::var(key).ok())?;
        settings.env_file = env_file;
        Ok(settings)
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let request_timeout = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse_value(
                "GEMINI_TIMEOUT_SECS",
                &raw,
                |v| v.parse::<u64>().map_err(|e| e.to_string()),
            )?)),
            None => None,
        };

        let downgrade_on_failure = match get("DEMO_ON_FAILURE") {
            Some(raw) => parse_value("DEMO_ON_FAILURE", &raw, parse_bool)?,
            None => defaults.downgrade_on_failure,
        };

        let port = match get("PORT") {
            Some(raw) => parse_value("PORT", &raw, |v| {
                v.parse::<u16>().map_err(|e| e.to_string())
            })?,
            None => defaults.port,
        };

        Ok(Self {
            api_key: get("GEMINI_API_KEY"),
            model: get("GEMINI_MODEL").unwrap_or(defaults.model),
            api_base: get("GEMINI_API_BASE").unwrap_or(defaults.api_base),
            request_timeout,
            downgrade_on_failure,
            session_secret: get("SESSION_SECRET").unwrap_or(defaults.session_secret),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            env_file: None,
        })
    }

    /// `host:port` string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_default_session_secret(&self) -> bool {
        self.session_secret == DEFAULT_SESSION_SECRET
    }
}

fn parse_value<T>(
    key: &'static str,
    raw: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    parse(raw).map_err(|reason| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
        reason,
    })
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected true or false".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let s = settings(&[]).unwrap();
        assert!(s.api_key.is_none());
        assert_eq!(s.model, "gemini-1.5-pro-latest");
        assert_eq!(s.api_base, DEFAULT_API_BASE);
        assert!(s.request_timeout.is_none());
        assert!(s.downgrade_on_failure);
        assert!(s.uses_default_session_secret());
        assert_eq!(s.bind_addr(), "0.0.0.0:5000");
        assert_eq!(s.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let s = settings(&[("GEMINI_API_KEY", "   ")]).unwrap();
        assert!(s.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let s = settings(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_MODEL", "gemini-1.5-flash-latest"),
            ("GEMINI_TIMEOUT_SECS", "30"),
            ("DEMO_ON_FAILURE", "false"),
            ("SESSION_SECRET", "s3cret"),
            ("PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(s.api_key.as_deref(), Some("abc"));
        assert_eq!(s.model, "gemini-1.5-flash-latest");
        assert_eq!(s.request_timeout, Some(Duration::from_secs(30)));
        assert!(!s.downgrade_on_failure);
        assert!(!s.uses_default_session_secret());
        assert_eq!(s.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = settings(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let err = settings(&[("DEMO_ON_FAILURE", "maybe")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "DEMO_ON_FAILURE", .. }
        ));
    }

    #[test]
    fn test_from_env_reports_env_file_instead_of_logging() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();

        let s = tracing::subscriber::with_default(subscriber, Settings::from_env).unwrap();
        assert!(logs.0.lock().unwrap().is_empty());
        assert_eq!(s.env_file, dotenv::dotenv().ok());
    }

    #[test]
    fn test_lookup_has_no_env_file() {
        assert!(settings(&[]).unwrap().env_file.is_none());
    }
}
