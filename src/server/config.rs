use crate::server::error::config::ConfigError;

pub static DEFAULT_OAUTH_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub static DEFAULT_OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub static DEFAULT_OAUTH_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_callback_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,
    /// Lowercased, trimmed e-mails granted the editor role
    pub editor_emails: Vec<String>,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_callback_url: required("OAUTH_CALLBACK_URL")?,
            oauth_auth_url: optional("OAUTH_AUTH_URL", DEFAULT_OAUTH_AUTH_URL),
            oauth_token_url: optional("OAUTH_TOKEN_URL", DEFAULT_OAUTH_TOKEN_URL),
            oauth_userinfo_url: optional("OAUTH_USERINFO_URL", DEFAULT_OAUTH_USERINFO_URL),
            editor_emails: parse_editor_emails(&optional("EDITOR_EMAILS", "")),
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

/// Split a comma separated allow-list, dropping blanks.
pub fn parse_editor_emails(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !email.is_empty())
        .collect()
}
