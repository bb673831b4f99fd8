//! Generator configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TRUSTLOOP_CDN_BASE_URL` - Base URL of the widget runtime (default: <https://cdn.trustloop.com>)
//! - `TRUSTLOOP_RUNTIME_VERSION` - Runtime version pinned in asset URLs (default: 1.0.0)
//! - `TRUSTLOOP_ESCAPE_VALUES` - Escape interpolated values (default: false)

use thiserror::Error;
use url::Url;

use crate::escaping::Escaping;

/// CDN the runtime script and stylesheet are served from.
pub const DEFAULT_CDN_BASE_URL: &str = "https://cdn.trustloop.com";
/// Runtime version snippets pin by default.
pub const DEFAULT_RUNTIME_VERSION: &str = "1.0.0";

const SCRIPT_ASSET: &str = "widget.js";
const STYLESHEET_ASSET: &str = "widget.css";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid CDN base URL {0}: {1}")]
    InvalidCdnUrl(String, String),
}

/// Generator configuration.
///
/// Asset URLs are resolved once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedConfig {
    script_url: String,
    stylesheet_url: String,
    /// Escaping applied to interpolated values
    pub escaping: Escaping,
}

impl Default for EmbedConfig {
    /// The production CDN, runtime `1.0.0`, values interpolated verbatim.
    fn default() -> Self {
        Self {
            script_url: format!(
                "{DEFAULT_CDN_BASE_URL}/{SCRIPT_ASSET}?v={DEFAULT_RUNTIME_VERSION}"
            ),
            stylesheet_url: format!(
                "{DEFAULT_CDN_BASE_URL}/{STYLESHEET_ASSET}?v={DEFAULT_RUNTIME_VERSION}"
            ),
            escaping: Escaping::Verbatim,
        }
    }
}

impl EmbedConfig {
    /// Build a configuration for a CDN base URL and runtime version.
    ///
    /// The base may carry a path prefix; a trailing `/` is optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCdnUrl` if the base is not an absolute
    /// `http`/`https` URL or carries a query or fragment.
    pub fn new(cdn_base_url: &str, runtime_version: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| {
            ConfigError::InvalidCdnUrl(cdn_base_url.to_string(), reason.to_string())
        };

        let mut base = Url::parse(cdn_base_url).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(invalid("must not have a query or fragment"));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            script_url: asset_url(&base, SCRIPT_ASSET, runtime_version)
                .map_err(|e| invalid(&e.to_string()))?,
            stylesheet_url: asset_url(&base, STYLESHEET_ASSET, runtime_version)
                .map_err(|e| invalid(&e.to_string()))?,
            escaping: Escaping::Verbatim,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let cdn_base_url = get_env_or_default("TRUSTLOOP_CDN_BASE_URL", DEFAULT_CDN_BASE_URL);
        let runtime_version =
            get_env_or_default("TRUSTLOOP_RUNTIME_VERSION", DEFAULT_RUNTIME_VERSION);
        let escape = get_env_or_default("TRUSTLOOP_ESCAPE_VALUES", "false")
            .parse::<bool>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TRUSTLOOP_ESCAPE_VALUES".to_string(), e.to_string())
            })?;

        Ok(Self::new(&cdn_base_url, &runtime_version)?.with_escaping(Escaping::from_flag(escape)))
    }

    /// Replace the escaping mode.
    #[must_use]
    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// URL of the runtime script, version query included.
    #[must_use]
    pub fn script_url(&self) -> &str {
        &self.script_url
    }

    /// URL of the runtime stylesheet, version query included.
    #[must_use]
    pub fn stylesheet_url(&self) -> &str {
        &self.stylesheet_url
    }
}

/// Resolve an asset against the base and pin the runtime version.
fn asset_url(base: &Url, asset: &str, version: &str) -> Result<String, url::ParseError> {
    let mut url = base.join(asset)?;
    url.query_pairs_mut().append_pair("v", version);
    Ok(url.into())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
