//! Credential-keyed API sessions.
//!
//! The cache holds at most one live session. A call bearing a different
//! credential replaces it; calls already holding the previous `Arc` finish
//! against the session they started with.

use std::sync::{Arc, Mutex};

use secrecy::SecretString;
use tracing::info;

use crate::client::{ClientError, SlackClient};
use crate::options::ClientOptions;

#[derive(Debug)]
pub struct SessionCache {
    options: ClientOptions,
    slot: Mutex<Option<Arc<SlackClient>>>,
}

impl SessionCache {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            options,
            slot: Mutex::new(None),
        }
    }

    /// Session for `token`, creating it (and evicting any other) if needed.
    pub fn client_for(&self, token: &SecretString) -> Result<Arc<SlackClient>, ClientError> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(client) = slot.as_ref().filter(|c| c.uses_token(token)) {
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(SlackClient::new(token.clone(), self.options.clone())?);
        if slot.replace(Arc::clone(&client)).is_some() {
            info!("bot token changed, replaced Slack session");
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_same_token_reuses_session() {
        let cache = SessionCache::new(ClientOptions::new());
        let a = cache.client_for(&secret("xoxb-1")).unwrap();
        let b = cache.client_for(&secret("xoxb-1")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_new_token_replaces_session() {
        let cache = SessionCache::new(ClientOptions::new());
        let a = cache.client_for(&secret("xoxb-1")).unwrap();
        let b = cache.client_for(&secret("xoxb-2")).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(b.uses_token(&secret("xoxb-2")));
        // The replaced session stays usable by whoever still holds it.
        assert!(a.uses_token(&secret("xoxb-1")));
    }

    #[test]
    fn test_empty_token_fails_without_session() {
        let cache = SessionCache::new(ClientOptions::new());
        assert!(cache.client_for(&secret("")).is_err());
        assert!(cache.slot.lock().unwrap().is_none());
    }
}
