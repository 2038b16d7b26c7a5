//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export RESEND_API_KEY="re_..."
//! export CONTACT_TO="hello@freebieterrorist.com"
//! export PUBLIC_DIR="public"
//! ```
//!
//! ## Required Variables
//!
//! - `RESEND_API_KEY` - Email provider API key
//! - `CONTACT_TO` - Address contact form submissions are delivered to
//!
//! ## Optional Variables
//!
//! - `CONTACT_FROM` - Sender address (default: `Freebie Terrorist <onboarding@resend.dev>`)
//! - `EMAIL_API_URL` - Provider base URL (default: `https://api.resend.com`)
//! - `PUBLIC_DIR` - Public assets root; logos are written to `<PUBLIC_DIR>/logos` (default: `public`)
//! - `UPSTREAM_TIMEOUT_SECS` - Timeout for outbound HTTP calls (default: 15, max: 300)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_CONTACT_FROM: &str = "Freebie Terrorist <onboarding@resend.dev>";
pub const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com";

/// Email relay settings handed to the contact service at startup.
#[derive(Clone)]
pub struct ContactConfig {
    pub api_key: String,
    pub from_address: String,
    pub to_address: String,
    pub api_url: String,
}

impl std::fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("from_address", &self.from_address)
            .field("to_address", &self.to_address)
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Root of the statically served assets. Logos live in its `logos/` subdirectory.
    pub public_dir: PathBuf,
    /// Timeout applied to every outbound request (logo hosts and the email API).
    pub upstream_timeout_secs: u64,
    pub contact: ContactConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let contact = Self::load_contact().context("Failed to load contact relay configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            public_dir,
            upstream_timeout_secs,
            contact,
        })
    }

    fn load_contact() -> Result<ContactConfig> {
        let api_key = env::var("RESEND_API_KEY").context("RESEND_API_KEY must be set")?;
        let to_address = env::var("CONTACT_TO").context("CONTACT_TO must be set")?;
        let from_address =
            env::var("CONTACT_FROM").unwrap_or_else(|_| DEFAULT_CONTACT_FROM.to_string());
        let api_url =
            env::var("EMAIL_API_URL").unwrap_or_else(|_| DEFAULT_EMAIL_API_URL.to_string());

        Ok(ContactConfig {
            api_key,
            from_address,
            to_address,
            api_url,
        })
    }

    /// Directory persisted logos are written to and served from.
    pub fn logos_dir(&self) -> PathBuf {
        self.public_dir.join("logos")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `upstream_timeout_secs` is outside 1..=300
    /// - any contact relay field is empty or the API URL is not HTTP(S)
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.upstream_timeout_secs == 0 || self.upstream_timeout_secs > 300 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.upstream_timeout_secs
            );
        }

        if self.public_dir.as_os_str().is_empty() {
            anyhow::bail!("PUBLIC_DIR must not be empty");
        }

        if self.contact.api_key.trim().is_empty() {
            anyhow::bail!("RESEND_API_KEY must not be empty");
        }
        if self.contact.to_address.trim().is_empty() {
            anyhow::bail!("CONTACT_TO must not be empty");
        }
        if self.contact.from_address.trim().is_empty() {
            anyhow::bail!("CONTACT_FROM must not be empty");
        }

        if !self.contact.api_url.starts_with("http://")
            && !self.contact.api_url.starts_with("https://")
        {
            anyhow::bail!(
                "EMAIL_API_URL must start with 'http://' or 'https://', got '{}'",
                self.contact.api_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Logos directory: {}", self.logos_dir().display());
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!("  Email API: {}", self.contact.api_url);
        tracing::info!("  Email API key: {}", mask_secret(&self.contact.api_key));
        tracing::info!(
            "  Contact relay: {} -> {}",
            self.contact.from_address,
            self.contact.to_address
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks an API key for logging, keeping a short prefix for identification.
///
/// - `re_123456789` → `re_1***`
/// - keys of 8 characters or fewer are fully masked
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            public_dir: PathBuf::from("public"),
            upstream_timeout_secs: 15,
            contact: ContactConfig {
                api_key: "re_test_key_123".to_string(),
                from_address: DEFAULT_CONTACT_FROM.to_string(),
                to_address: "team@example.com".to_string(),
                api_url: DEFAULT_EMAIL_API_URL.to_string(),
            },
        }
    }

    const ENV_KEYS: [&str; 8] = [
        "RESEND_API_KEY",
        "CONTACT_TO",
        "CONTACT_FROM",
        "EMAIL_API_URL",
        "PUBLIC_DIR",
        "UPSTREAM_TIMEOUT_SECS",
        "LISTEN",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for key in ENV_KEYS {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("re_123456789"), "re_1***");
        assert_eq!(mask_secret("short"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_contact_config_debug_masks_key() {
        let config = valid_config();
        let debug = format!("{:?}", config.contact);
        assert!(!debug.contains("re_test_key_123"));
        assert!(debug.contains("team@example.com"));
    }

    #[test]
    fn test_logos_dir() {
        let config = valid_config();
        assert_eq!(config.logos_dir(), PathBuf::from("public/logos"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.upstream_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.upstream_timeout_secs = 301;
        assert!(config.validate().is_err());
        config.upstream_timeout_secs = 30;

        config.contact.api_url = "ftp://mail".to_string();
        assert!(config.validate().is_err());
        config.contact.api_url = DEFAULT_EMAIL_API_URL.to_string();

        config.contact.to_address = "  ".to_string();
        assert!(config.validate().is_err());
        config.contact.to_address = "team@example.com".to_string();

        config.contact.api_key = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CONTACT_TO", "team@example.com");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("RESEND_API_KEY", "re_abcdefghij");
            env::set_var("CONTACT_TO", "team@example.com");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.upstream_timeout_secs, 15);
        assert_eq!(config.contact.from_address, DEFAULT_CONTACT_FROM);
        assert_eq!(config.contact.api_url, DEFAULT_EMAIL_API_URL);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("RESEND_API_KEY", "re_abcdefghij");
            env::set_var("CONTACT_TO", "team@example.com");
            env::set_var("CONTACT_FROM", "Site <site@example.com>");
            env::set_var("PUBLIC_DIR", "/srv/www");
            env::set_var("UPSTREAM_TIMEOUT_SECS", "5");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.contact.from_address, "Site <site@example.com>");
        assert_eq!(config.logos_dir(), PathBuf::from("/srv/www/logos"));
        assert_eq!(config.upstream_timeout_secs, 5);

        clear_env();
    }
}
