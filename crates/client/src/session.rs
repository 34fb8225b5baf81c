//! Client-side session marker store.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Key-value store for client-side session markers (cookies in a browser).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, name: &str) -> Option<String>;

    async fn set(&self, name: &str, value: String);

    /// Remove a marker. Clearing a missing marker is a no-op.
    async fn clear(&self, name: &str);
}

/// Contents of the login session marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub username: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

impl SessionInfo {
    /// Read and decode the marker. Missing or unreadable markers mean no session.
    pub async fn load<S: SessionStore + ?Sized>(store: &S, name: &str) -> Option<Self> {
        let raw = store.get(name).await?;
        match serde_json::from_str(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Ignoring unreadable session marker '{}': {}", name, e);
                None
            }
        }
    }
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, name: &str) -> Option<String> {
        self.entries.read().await.get(name).cloned()
    }

    async fn set(&self, name: &str, value: String) {
        debug!("Session marker '{}' set", name);
        self.entries.write().await.insert(name.to_string(), value);
    }

    async fn clear(&self, name: &str) {
        if self.entries.write().await.remove(name).is_some() {
            debug!("Session marker '{}' cleared", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_clear() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get("userSession").await, None);

        store.set("userSession", "token".to_string()).await;
        assert_eq!(store.get("userSession").await.as_deref(), Some("token"));

        store.clear("userSession").await;
        assert_eq!(store.get("userSession").await, None);

        // Clearing twice is fine
        store.clear("userSession").await;
    }

    #[tokio::test]
    async fn test_session_info_decoding() {
        let store = InMemorySessionStore::new();
        assert_eq!(SessionInfo::load(&store, "userSession").await, None);

        store
            .set(
                "userSession",
                r#"{"username": "ana01", "accessToken": "abc"}"#.to_string(),
            )
            .await;
        let info = SessionInfo::load(&store, "userSession").await.unwrap();
        assert_eq!(info.username, "ana01");
        assert_eq!(info.access_token, "abc");

        store.set("userSession", "not json".to_string()).await;
        assert_eq!(SessionInfo::load(&store, "userSession").await, None);
    }
}
