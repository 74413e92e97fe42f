//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SUPABASE_URL` - Hosted project URL (e.g., <https://abc.supabase.co>)
//! - `SUPABASE_ANON_KEY` - Public (anon) API key for the hosted tables
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `SUPABASE_TIMEOUT_SECS` - Per-request timeout for the hosted store (default: 10)
//! - `CONTACT_PHONE` - Phone number shown on every page (default: +91 9358303029)
//! - `CONTACT_EMAIL` - Contact address (default: pureangan@gmail.com)
//! - `WHATSAPP_NUMBER` - Digits used in `wa.me` links (default: 919358303029)
//! - `INQUIRY_CONFIRMATION_SECS` - Overrides the per-form confirmation delay
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

const DEFAULT_CONTACT_PHONE: &str = "+91 9358303029";
const DEFAULT_CONTACT_EMAIL: &str = "pureangan@gmail.com";
const DEFAULT_WHATSAPP_NUMBER: &str = "919358303029";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
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

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Hosted table API
    pub supabase: SupabaseConfig,
    /// Phone, email and chat details rendered into links
    pub contact: ContactConfig,
    /// Fixed confirmation delay for every inquiry form, if set
    pub confirmation_override: Option<Duration>,
    /// Error tracking
    pub sentry: SentryConfig,
}

/// Hosted table API configuration.
///
/// Implements `Debug` manually to redact the key.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL; the REST API lives under `rest/v1/`
    pub url: Url,
    /// Anon key sent as `apikey` and bearer token
    pub anon_key: SecretString,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Public contact details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    /// Display form, e.g. `+91 9358303029`
    pub phone: String,
    pub email: String,
    /// International number without `+` or spaces
    pub whatsapp_number: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: DEFAULT_CONTACT_PHONE.to_string(),
            email: DEFAULT_CONTACT_EMAIL.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }
}

/// Sentry client options.
#[derive(Debug, Clone, PartialEq)]
pub struct SentryConfig {
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            sample_rate: 1.0,
            traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the API key fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or("STOREFRONT_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = parse_env_or("STOREFRONT_PORT", 3000_u16)?;
        let base_url = get_required_env("STOREFRONT_BASE_URL")?;

        let confirmation_override =
            parse_optional_env::<u64>("INQUIRY_CONFIRMATION_SECS")?.map(Duration::from_secs);

        Ok(Self {
            host,
            port,
            base_url,
            supabase: SupabaseConfig::from_env()?,
            contact: ContactConfig::from_env(),
            confirmation_override,
            sentry: SentryConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SupabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_url = get_required_env("SUPABASE_URL")?;
        let url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("SUPABASE_URL".to_string(), e.to_string()))?;

        Ok(Self {
            url,
            anon_key: get_validated_secret("SUPABASE_ANON_KEY")?,
            timeout: Duration::from_secs(parse_env_or("SUPABASE_TIMEOUT_SECS", 10_u64)?),
        })
    }
}

impl ContactConfig {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            phone: get_optional_env("CONTACT_PHONE").unwrap_or(defaults.phone),
            email: get_optional_env("CONTACT_EMAIL").unwrap_or(defaults.email),
            whatsapp_number: get_optional_env("WHATSAPP_NUMBER")
                .unwrap_or(defaults.whatsapp_number),
        }
    }
}

impl SentryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            dsn: get_optional_env("SENTRY_DSN"),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sample_rate: parse_env_or("SENTRY_SAMPLE_RATE", defaults.sample_rate)?,
            traces_sample_rate: parse_env_or(
                "SENTRY_TRACES_SAMPLE_RATE",
                defaults.traces_sample_rate,
            )?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable; blank counts as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional environment variable.
fn parse_optional_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_optional_env(key)?.unwrap_or(default))
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Reject placeholder values and low-entropy keys.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{pattern}')"),
        ));
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Copy the key from the project settings."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // A syntactically realistic anon key (JWT header + payload fragment).
    const ANON_KEY: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJyb2xlIjoiYW5vbiJ9.Qm9wZ3JhZ";

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_anon_key_passes_validation() {
        assert!(validate_secret_strength(ANON_KEY, "SUPABASE_ANON_KEY").is_ok());
    }

    #[test]
    fn test_placeholder_key_rejected() {
        let result = validate_secret_strength("your-anon-key", "SUPABASE_ANON_KEY");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_low_entropy_key_rejected() {
        let result = validate_secret_strength("abababababababab", "SUPABASE_ANON_KEY");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            supabase: SupabaseConfig {
                url: Url::parse("https://abc.supabase.co").unwrap(),
                anon_key: SecretString::from(ANON_KEY),
                timeout: Duration::from_secs(10),
            },
            contact: ContactConfig::default(),
            confirmation_override: None,
            sentry: SentryConfig::default(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_supabase_config_debug_redacts_key() {
        let config = SupabaseConfig {
            url: Url::parse("https://abc.supabase.co").unwrap(),
            anon_key: SecretString::from(ANON_KEY),
            timeout: Duration::from_secs(10),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("abc.supabase.co"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains(ANON_KEY));
    }

    #[test]
    fn test_contact_defaults() {
        let contact = ContactConfig::default();
        assert_eq!(contact.phone, "+91 9358303029");
        assert_eq!(contact.email, "pureangan@gmail.com");
        assert_eq!(contact.whatsapp_number, "919358303029");
    }
}
