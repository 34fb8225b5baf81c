//! Navigation hand-off after a completed workflow.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use domain::AccountDraft;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Destination path plus the context handed to the next screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub path: String,
    pub account: Option<AccountDraft>,
}

impl Handoff {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            account: None,
        }
    }

    pub fn with_account(mut self, account: AccountDraft) -> Self {
        self.account = Some(account);
        self
    }
}

/// Receives navigation requests from forms and views.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, handoff: Handoff);
}

/// Navigator that logs and remembers every hand-off.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Handoff>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every hand-off received so far, oldest first.
    pub async fn history(&self) -> Vec<Handoff> {
        self.visited.lock().await.clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, handoff: Handoff) {
        info!("Navigating to {}", handoff.path);
        self.visited.lock().await.push(handoff);
    }
}
