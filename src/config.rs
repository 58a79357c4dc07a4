//! Server configuration.
//!
//! The bot token can be configured once at startup. Hosts that inject the
//! token per request may leave it unset and pass `SLACK_BOT_TOKEN` in the
//! tool arguments instead; the configured token always wins.

use std::fmt;

use secrecy::SecretString;

use crate::model::JsonObject;
use crate::options::ClientOptions;

/// Environment variable and argument key carrying the bot token.
pub const TOKEN_VAR: &str = "SLACK_BOT_TOKEN";

/// Environment variable overriding the Web API base URL.
pub const BASE_URL_VAR: &str = "SLACK_API_BASE_URL";

#[derive(Clone, Default)]
pub struct Config {
    bot_token: Option<SecretString>,
    pub client: ClientOptions,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .field("client", &self.client)
            .finish()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `SLACK_BOT_TOKEN` and `SLACK_API_BASE_URL`. Empty values count as unset.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(token) = std::env::var(TOKEN_VAR) {
            config = config.with_bot_token(token);
        }
        if let Ok(url) = std::env::var(BASE_URL_VAR) {
            if !url.trim().is_empty() {
                config.client = config.client.with_base_url(url);
            }
        }
        config
    }

    /// Set the static bot token. An empty token leaves it unset.
    pub fn with_bot_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.bot_token = if token.trim().is_empty() {
            None
        } else {
            Some(SecretString::from(token))
        };
        self
    }

    pub fn with_client_options(mut self, options: ClientOptions) -> Self {
        self.client = options;
        self
    }

    pub fn has_bot_token(&self) -> bool {
        self.bot_token.is_some()
    }

    /// Pick the credential for one call: the configured token first, then
    /// a non-empty `SLACK_BOT_TOKEN` string in the arguments.
    pub fn resolve_token(&self, args: &JsonObject) -> Option<SecretString> {
        if let Some(token) = &self.bot_token {
            return Some(token.clone());
        }
        args.get(TOKEN_VAR)
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(|s| SecretString::from(s.to_string()))
    }
}
