use once_cell::sync::Lazy;
use secrecy::SecretString;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::error::{AppError, AppResult};

/// Configuration for the Mini App client
/// Base URL of the backend API, including the `/api` prefix
/// Read from MINIAPP_API_URL environment variable
/// Default: http://localhost:8000/api
pub static API_URL: Lazy<String> =
    Lazy::new(|| env::var("MINIAPP_API_URL").unwrap_or_else(|_| "http://localhost:8000/api".to_string()));

/// Shared WebApp token sent with every file request
/// Read from WEBAPP_TOKEN environment variable
/// Empty when not set; the backend will answer 403 in that case
pub static WEBAPP_TOKEN: Lazy<String> = Lazy::new(|| env::var("WEBAPP_TOKEN").unwrap_or_default());

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: miniapp.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "miniapp.log".to_string()));

/// User identity configuration
///
/// The fallback id (used when the host does not provide one) can be
/// overridden with MINIAPP_FALLBACK_USER_ID.
pub mod user {
    /// Variable overriding [`DEFAULT_FALLBACK_ID`]
    pub const FALLBACK_ID_VAR: &str = "MINIAPP_FALLBACK_USER_ID";

    /// Placeholder Telegram id used in browser/test mode
    pub const DEFAULT_FALLBACK_ID: i64 = 8164957125;
}

/// Notification element configuration
pub mod notification {
    use super::Duration;

    /// How long a notification stays visible (in milliseconds)
    pub const AUTO_HIDE_MS: u64 = 3000;

    /// Background for error notifications
    pub const ERROR_BACKGROUND: &str = "#ff4444";

    /// Background for regular notifications
    pub const DEFAULT_BACKGROUND: &str = "rgba(0,0,0,0.8)";

    /// Auto-hide delay duration
    pub fn auto_hide() -> Duration {
        Duration::from_millis(AUTO_HIDE_MS)
    }
}

/// HTTP client configuration
pub mod http {
    /// Default request timeout (in seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

    /// Header carrying the signed Telegram init data
    pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

    /// Variable overriding [`DEFAULT_TIMEOUT_SECS`]
    pub const TIMEOUT_VAR: &str = "MINIAPP_HTTP_TIMEOUT_SECS";
}

/// Parses an optional setting. An unset variable is `Ok(None)`; a value
/// that does not parse is a configuration error naming the variable.
pub fn parse_setting<T>(name: &str, raw: Option<&str>) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}={:?} is invalid: {}", name, value, e))),
    }
}

fn env_setting<T>(name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_setting(name, env::var(name).ok().as_deref())
}

/// Snapshot of the settings the client needs, passed explicitly into the
/// API client and view controller instead of reading the statics there.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub webapp_token: SecretString,
    pub fallback_user_id: i64,
    pub http_timeout: Duration,
    pub notification_timeout: Duration,
}

impl ClientConfig {
    /// Builds the config from environment variables (see the statics above).
    ///
    /// Numeric overrides that are set but unparseable are rejected instead
    /// of silently falling back to the defaults.
    pub fn from_env() -> AppResult<Self> {
        let fallback_user_id = env_setting(user::FALLBACK_ID_VAR)?.unwrap_or(user::DEFAULT_FALLBACK_ID);
        let timeout_secs = env_setting(http::TIMEOUT_VAR)?.unwrap_or(http::DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(AppError::Config(format!("{} must be greater than zero", http::TIMEOUT_VAR)));
        }

        Ok(Self {
            api_url: API_URL.clone(),
            webapp_token: SecretString::from(WEBAPP_TOKEN.clone()),
            fallback_user_id,
            http_timeout: Duration::from_secs(timeout_secs),
            notification_timeout: notification::auto_hide(),
        })
    }

    /// Config pointing at an arbitrary base URL, with defaults for the rest.
    /// Mostly useful in tests against a mock server.
    pub fn with_api_url(api_url: impl Into<String>, webapp_token: &str) -> Self {
        Self {
            api_url: api_url.into(),
            webapp_token: SecretString::from(webapp_token.to_string()),
            fallback_user_id: user::DEFAULT_FALLBACK_ID,
            http_timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECS),
            notification_timeout: notification::auto_hide(),
        }
    }
}
