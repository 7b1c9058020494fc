//! Runtime configuration for the cart client.
//!
//! Defaults target a local development server. `from_env` layers
//! `STOREFRONT_*` environment variables on top; binaries then apply their
//! command-line flags.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{StorefrontError, StorefrontResult};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_API_PREFIX: &str = "/tienda/api/cart";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

/// Connection and presentation settings shared by the binaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Scheme and authority of the storefront, without a trailing slash
    pub base_url: String,
    /// Path under which the cart endpoints live
    pub api_prefix: String,
    /// Raw `Cookie` header forwarded with every request (session + CSRF)
    pub session_cookie: Option<String>,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    pub request_timeout: Duration,
    /// How long a toast stays on screen
    pub notification_duration: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            session_cookie: None,
            csrf_cookie_name: DEFAULT_CSRF_COOKIE.to_string(),
            csrf_header_name: DEFAULT_CSRF_HEADER.to_string(),
            request_timeout: Duration::from_secs(15),
            notification_duration: Duration::from_millis(3000),
        }
    }
}

impl StorefrontConfig {
    /// Load defaults overridden by `STOREFRONT_*` variables.
    ///
    /// Unparsable values are logged and replaced by the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: try_load("STOREFRONT_BASE_URL", defaults.base_url),
            api_prefix: try_load("STOREFRONT_API_PREFIX", defaults.api_prefix),
            session_cookie: var("STOREFRONT_COOKIE"),
            csrf_cookie_name: try_load("STOREFRONT_CSRF_COOKIE", defaults.csrf_cookie_name),
            csrf_header_name: try_load("STOREFRONT_CSRF_HEADER", defaults.csrf_header_name),
            request_timeout: Duration::from_secs(try_load(
                "STOREFRONT_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )),
            notification_duration: Duration::from_millis(try_load(
                "STOREFRONT_TOAST_MS",
                defaults.notification_duration.as_millis() as u64,
            )),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Check the URL parts and normalize slashes
    pub fn validated(mut self) -> StorefrontResult<Self> {
        let base = self.base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(StorefrontError::Config(format!(
                "base url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        self.base_url = base.to_string();

        let prefix = self.api_prefix.trim().trim_matches('/');
        self.api_prefix = if prefix.is_empty() {
            String::new()
        } else {
            format!("/{}", prefix)
        };

        if self.csrf_header_name.trim().is_empty() {
            return Err(StorefrontError::Config("csrf header name is empty".into()));
        }
        Ok(self)
    }

    /// Absolute URL for a path below the cart prefix, e.g. `add/42/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_url, self.api_prefix, path)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match var(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
