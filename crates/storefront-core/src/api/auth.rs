//! Request authorization for mutating calls.
//!
//! The storefront protects POST endpoints with an anti-forgery token that the
//! page receives as a cookie and echoes back in a header.

use crate::config::StorefrontConfig;

/// A single header to attach to a mutating request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub name: String,
    pub value: String,
}

/// Supplies whatever credential the hosting page uses for POST requests
pub trait RequestAuthorizer: Send + Sync {
    fn authorize(&self) -> Option<AuthHeader>;
}

/// Sends no credential
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthorizer;

impl RequestAuthorizer for NoAuthorizer {
    fn authorize(&self) -> Option<AuthHeader> {
        None
    }
}

/// Echoes a CSRF cookie back as a header.
///
/// The token is read once, when the authorizer is built.
#[derive(Debug, Clone)]
pub struct CsrfCookieAuthorizer {
    header_name: String,
    token: Option<String>,
}

impl CsrfCookieAuthorizer {
    pub fn from_cookie_header(cookies: &str, cookie_name: &str, header_name: &str) -> Self {
        let token = read_cookie(cookies, cookie_name);
        if token.is_none() {
            tracing::debug!(cookie = cookie_name, "CSRF cookie not present");
        }
        Self {
            header_name: header_name.to_string(),
            token,
        }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::from_cookie_header(
            config.session_cookie.as_deref().unwrap_or(""),
            &config.csrf_cookie_name,
            &config.csrf_header_name,
        )
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl RequestAuthorizer for CsrfCookieAuthorizer {
    fn authorize(&self) -> Option<AuthHeader> {
        self.token.as_ref().map(|token| AuthHeader {
            name: self.header_name.clone(),
            value: token.clone(),
        })
    }
}

/// Find `name` in a `a=1; b=2` cookie string and percent-decode its value
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw.to_string(),
        })
}
