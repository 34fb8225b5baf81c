//! Client configuration.

use std::env;

use common::HttpClientConfig;

/// Marketplace client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend connection settings
    pub http: HttpClientConfig,
    /// Session marker cleared after a successful registration
    pub session_cookie_name: String,
    /// Where navigation continues after signup
    pub post_signup_path: String,
    /// Where navigation goes when no user is signed in
    pub login_path: String,
    /// Make email/password format failures block submission
    pub strict_validation: bool,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = HttpClientConfig::default();
        Self {
            http: HttpClientConfig {
                base_url: env::var("API_BASE_URL").unwrap_or(defaults.base_url),
                connect_timeout_ms: env::var("CONNECT_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.connect_timeout_ms),
                request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.request_timeout_ms),
            },
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "userSession".to_string()),
            post_signup_path: env::var("POST_SIGNUP_PATH")
                .unwrap_or_else(|_| "/tour".to_string()),
            login_path: env::var("LOGIN_PATH").unwrap_or_else(|_| "/ingresar".to_string()),
            strict_validation: env::var("STRICT_FORM_VALIDATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http: HttpClientConfig::default(),
            session_cookie_name: "userSession".to_string(),
            post_signup_path: "/tour".to_string(),
            login_path: "/ingresar".to_string(),
            strict_validation: false,
        }
    }
}
