//! Relay configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SLACK_BOT_TOKEN` - Slack bot token (xoxb-...)
//! - `SLACK_SIGNING_SECRET` - Slack app signing secret (Events API verification)
//! - `SLACK_SUPERVISOR_CHANNEL_ID` - Channel receiving acknowledgement notices
//!   (falls back to `CHANNEL_ID`)
//!
//! ## Optional
//! - `RELAY_HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 3000)
//! - `SLACK_API_BASE` - Slack Web API base URL (default: <https://slack.com/api>)
//! - `SLACK_HTTP_TIMEOUT_SECS` - Timeout for Slack API calls (default: 30)
//! - `RELAY_LOCALE` - Language of all messages: es, pt, en (default: es)
//! - `RELAY_SIGN_OFF` - Signature at the end of each notification
//! - `RELAY_UPLOAD_DIR` - Scratch directory for uploaded files (default: uploads)
//! - `RELAY_MAX_UPLOAD_BYTES` - Upload size limit (default: 10 MiB)
//! - `ACK_REACTION` - Reaction name that acknowledges a notification
//!   (default: `white_check_mark`)
//! - `ACK_CONSUME_ON_CONFIRM` - Forget a notification after its first
//!   confirmation (default: false)
//! - `TRACKER_TTL_HOURS` - How long sent notifications stay trackable, at most
//!   87600 (default: 720)
//! - `TRACKER_MAX_ENTRIES` - Upper bound on tracked notifications (default: 100000)
//! - `COLUMN_RECIPIENT`, `COLUMN_SALARY`, `COLUMN_NAME`, `COLUMN_ABSENCES`,
//!   `COLUMN_HOLIDAYS_WORKED` - Spreadsheet column names
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT`, `SENTRY_SAMPLE_RATE`, `SENTRY_TRACES_SAMPLE_RATE`
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use payroll_relay_core::{ColumnMap, Locale};
use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";
const DEFAULT_ACK_REACTION: &str = "white_check_mark";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Ten years. The tracker cache refuses expiries near a thousand years.
const MAX_TRACKER_TTL_HOURS: u64 = 10 * 365 * 24;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Relay application configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Slack credentials and channels
    pub slack: SlackConfig,
    /// Language of notifications, confirmations and HTTP responses
    pub locale: Locale,
    /// Signature override for notifications
    pub sign_off: Option<String>,
    /// Spreadsheet column names
    pub columns: ColumnMap,
    /// Scratch directory for uploaded and downloaded spreadsheets
    pub upload_dir: PathBuf,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
    /// Acknowledgement tracking settings
    pub ack: AckConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
    /// Emit logs as JSON
    pub json_logs: bool,
}

/// Slack configuration.
///
/// Implements `Debug` manually to redact secrets.
#[derive(Clone)]
pub struct SlackConfig {
    /// Slack bot token (xoxb-...).
    pub bot_token: SecretString,
    /// Slack app signing secret for Events API verification.
    pub signing_secret: SecretString,
    /// Channel that receives acknowledgement confirmations.
    pub supervisor_channel_id: String,
    /// Web API base URL.
    pub api_base: String,
    /// Timeout for each Web API call.
    pub timeout: Duration,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("bot_token", &"[REDACTED]")
            .field("signing_secret", &"[REDACTED]")
            .field("supervisor_channel_id", &self.supervisor_channel_id)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Acknowledgement tracking configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckConfig {
    /// Reaction name (without colons) that acknowledges a notification.
    pub reaction: String,
    /// Remove a tracked notification once it has been confirmed.
    pub consume_on_confirm: bool,
    /// How long a sent notification stays trackable.
    pub ttl: Duration,
    /// Maximum number of tracked notifications.
    pub max_entries: u64,
}

impl Default for AckConfig {
    fn default() -> Self {
        Self {
            reaction: DEFAULT_ACK_REACTION.to_string(),
            consume_on_confirm: false,
            ttl: Duration::from_secs(720 * 3600),
            max_entries: 100_000,
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets look like placeholders.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`RelayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let host = env.parsed_or("RELAY_HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = env.parsed_or("PORT", 3000_u16)?;
        let slack = SlackConfig::from_env(&env)?;
        let locale = env.parsed_or("RELAY_LOCALE", Locale::default())?;
        let sign_off = env.optional("RELAY_SIGN_OFF");
        let columns = columns_from_env(&env);
        let upload_dir = PathBuf::from(env.or_default("RELAY_UPLOAD_DIR", "uploads"));
        let max_upload_bytes = env.parsed_or("RELAY_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;
        let ack = AckConfig::from_env(&env)?;
        let sentry_dsn = env.optional("SENTRY_DSN");
        let sentry_environment = env.optional("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = env
            .optional("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = env
            .optional("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let json_logs = env
            .optional("LOG_FORMAT")
            .is_some_and(|f| f.eq_ignore_ascii_case("json"));

        Ok(Self {
            host,
            port,
            slack,
            locale,
            sign_off,
            columns,
            upload_dir,
            max_upload_bytes,
            ack,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
            json_logs,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SlackConfig {
    fn from_env<F>(env: &Env<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = env.required("SLACK_BOT_TOKEN")?;
        validate_not_placeholder(&bot_token, "SLACK_BOT_TOKEN")?;
        if !bot_token.starts_with("xoxb-") {
            tracing::warn!("SLACK_BOT_TOKEN does not look like a bot token (expected xoxb-...)");
        }

        let signing_secret = env.required("SLACK_SIGNING_SECRET")?;
        validate_not_placeholder(&signing_secret, "SLACK_SIGNING_SECRET")?;

        let supervisor_channel_id = env
            .optional("SLACK_SUPERVISOR_CHANNEL_ID")
            .or_else(|| env.optional("CHANNEL_ID"))
            .ok_or_else(|| ConfigError::MissingEnvVar("SLACK_SUPERVISOR_CHANNEL_ID".to_string()))?;

        let api_base = env
            .or_default("SLACK_API_BASE", DEFAULT_SLACK_API_BASE)
            .trim_end_matches('/')
            .to_string();
        let timeout = Duration::from_secs(env.parsed_or("SLACK_HTTP_TIMEOUT_SECS", 30_u64)?);

        Ok(Self {
            bot_token: SecretString::from(bot_token),
            signing_secret: SecretString::from(signing_secret),
            supervisor_channel_id,
            api_base,
            timeout,
        })
    }
}

impl AckConfig {
    fn from_env<F>(env: &Env<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let reaction = env
            .optional("ACK_REACTION")
            .map(|r| r.trim_matches(':').to_string())
            .unwrap_or(defaults.reaction);
        let consume_on_confirm = env.flag("ACK_CONSUME_ON_CONFIRM")?;
        let ttl_hours: u64 = env.parsed_or("TRACKER_TTL_HOURS", 720)?;
        let max_entries = env.parsed_or("TRACKER_MAX_ENTRIES", defaults.max_entries)?;

        if ttl_hours == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "TRACKER_TTL_HOURS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        if ttl_hours > MAX_TRACKER_TTL_HOURS {
            return Err(ConfigError::InvalidEnvVar(
                "TRACKER_TTL_HOURS".to_string(),
                format!("must be at most {MAX_TRACKER_TTL_HOURS}"),
            ));
        }

        Ok(Self {
            reaction,
            consume_on_confirm,
            ttl: Duration::from_secs(ttl_hours * 3600),
            max_entries,
        })
    }
}

/// Load only the spreadsheet column names from the environment.
///
/// For tooling that reads spreadsheets without talking to Slack.
#[must_use]
pub fn column_map_from_env() -> ColumnMap {
    let _ = dotenvy::dotenv();
    columns_from_env(&Env(|key: &str| std::env::var(key).ok()))
}

fn columns_from_env<F>(env: &Env<F>) -> ColumnMap
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ColumnMap::default();
    ColumnMap {
        recipient: env.optional("COLUMN_RECIPIENT").unwrap_or(defaults.recipient),
        salary: env.optional("COLUMN_SALARY").unwrap_or(defaults.salary),
        name: env.optional("COLUMN_NAME").unwrap_or(defaults.name),
        absences: env.optional("COLUMN_ABSENCES").unwrap_or(defaults.absences),
        holidays_worked: env
            .optional("COLUMN_HOLIDAYS_WORKED")
            .unwrap_or(defaults.holidays_worked),
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable source wrapper with typed accessors.
struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable; blank values count as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Get a required variable.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parsed_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key).map_or(Ok(default), |raw| {
            raw.trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }

    /// Parse a boolean flag (`true`/`false`/`1`/`0`/`yes`/`no`), default false.
    fn flag(&self, key: &str) -> Result<bool, ConfigError> {
        match self.optional(key).map(|v| v.trim().to_ascii_lowercase()) {
            None => Ok(false),
            Some(v) => match v.as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidEnvVar(
                    key.to_string(),
                    format!("expected a boolean, got '{v}'"),
                )),
            },
        }
    }
}

/// Reject secrets that are obviously copied from a template.
fn validate_not_placeholder(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}
