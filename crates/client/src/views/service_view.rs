//! Service detail page.

use std::sync::Arc;

use tracing::{info, warn};

use common::AppError;
use domain::ServiceDetail;

use crate::clients::MarketplaceApi;
use crate::config::ClientConfig;
use crate::navigation::{Handoff, Navigator};
use crate::session::{SessionInfo, SessionStore};

const MSG_SERVICE_NOT_FOUND: &str = "service not found";

/// What the service page renders after loading.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceViewState {
    Loaded(ServiceDetail),
    /// The backend has no such service, or refused to show it
    NotFound(String),
    /// The backend could not be reached
    Unavailable(String),
    /// No signed-in user; navigation went to the login page
    RedirectedToLogin,
}

/// Loads one service for display. Requires a signed-in user.
pub struct ServiceDetailView<A, S, N>
where
    A: MarketplaceApi,
    S: SessionStore,
    N: Navigator,
{
    api: Arc<A>,
    session: Arc<S>,
    navigator: Arc<N>,
    config: ClientConfig,
}

impl<A, S, N> ServiceDetailView<A, S, N>
where
    A: MarketplaceApi,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(api: Arc<A>, session: Arc<S>, navigator: Arc<N>, config: ClientConfig) -> Self {
        Self {
            api,
            session,
            navigator,
            config,
        }
    }

    /// Load service `id`. A detail handed over by the previous screen is
    /// shown as-is without hitting the backend.
    pub async fn load(&self, id: i64, prefetched: Option<ServiceDetail>) -> ServiceViewState {
        let Some(session) =
            SessionInfo::load(self.session.as_ref(), &self.config.session_cookie_name).await
        else {
            return self.redirect_to_login().await;
        };

        if let Some(detail) = prefetched {
            return ServiceViewState::Loaded(detail);
        }

        match self
            .api
            .fetch_service(id, Some(session.access_token))
            .await
        {
            Ok(detail) => {
                info!("Loaded service {} for '{}'", id, session.username);
                ServiceViewState::Loaded(detail)
            }
            Err(AppError::Unauthorized) => {
                warn!("Session for '{}' was refused", session.username);
                self.session.clear(&self.config.session_cookie_name).await;
                self.redirect_to_login().await
            }
            Err(AppError::NotFound) => ServiceViewState::NotFound(MSG_SERVICE_NOT_FOUND.into()),
            Err(AppError::Rejected { status, body }) => {
                warn!("Service {} rejected with status {}", id, status);
                let message = body
                    .as_ref()
                    .and_then(|b| {
                        b.get("defaultMessage")
                            .or_else(|| b.get("message"))
                            .and_then(|m| m.as_str())
                    })
                    .unwrap_or(MSG_SERVICE_NOT_FOUND);
                ServiceViewState::NotFound(message.to_string())
            }
            Err(err) => ServiceViewState::Unavailable(err.user_message()),
        }
    }

    async fn redirect_to_login(&self) -> ServiceViewState {
        self.navigator
            .navigate(Handoff::to(&self.config.login_path))
            .await;
        ServiceViewState::RedirectedToLogin
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::*;
    use serde_json::json;

    use super::*;
    use crate::clients::MockMarketplaceApi;
    use crate::navigation::MockNavigator;
    use crate::session::MockSessionStore;

    fn detail(id: i64) -> ServiceDetail {
        serde_json::from_value(json!({
            "id": id,
            "titulo": "Arreglo de canillas",
            "descripcion": "Cambio de cueritos",
            "usuarioPrestador": "plomero1",
            "valoracionPromedio": 3.6
        }))
        .unwrap()
    }

    fn signed_in() -> MockSessionStore {
        let mut session = MockSessionStore::new();
        session
            .expect_get()
            .with(eq("userSession"))
            .returning(|_| Some(r#"{"username":"ana01","accessToken":"tok"}"#.to_string()));
        session
    }

    #[tokio::test]
    async fn test_missing_session_redirects_to_login() {
        let mut session = MockSessionStore::new();
        session.expect_get().returning(|_| None);

        let mut api = MockMarketplaceApi::new();
        api.expect_fetch_service().never();

        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|h| h.path == "/ingresar" && h.account.is_none())
            .times(1)
            .returning(|_| ());

        let view = ServiceDetailView::new(
            Arc::new(api),
            Arc::new(session),
            Arc::new(navigator),
            ClientConfig::default(),
        );
        assert_eq!(view.load(7, None).await, ServiceViewState::RedirectedToLogin);
    }

    #[tokio::test]
    async fn test_prefetched_detail_skips_backend() {
        let mut api = MockMarketplaceApi::new();
        api.expect_fetch_service().never();

        let view = ServiceDetailView::new(
            Arc::new(api),
            Arc::new(signed_in()),
            Arc::new(MockNavigator::new()),
            ClientConfig::default(),
        );
        assert_eq!(
            view.load(7, Some(detail(7))).await,
            ServiceViewState::Loaded(detail(7))
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_bearer_token() {
        let mut api = MockMarketplaceApi::new();
        api.expect_fetch_service()
            .with(eq(7), eq(Some("tok".to_string())))
            .times(1)
            .returning(|id, _| Ok(detail(id)));

        let view = ServiceDetailView::new(
            Arc::new(api),
            Arc::new(signed_in()),
            Arc::new(MockNavigator::new()),
            ClientConfig::default(),
        );
        match view.load(7, None).await {
            ServiceViewState::Loaded(d) => assert_eq!(d.stars(), 4),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejection_message_is_shown() {
        let mut api = MockMarketplaceApi::new();
        api.expect_fetch_service().returning(|_, _| {
            Err(AppError::Rejected {
                status: 404,
                body: Some(json!({"defaultMessage": "El servicio no existe"})),
            })
        });

        let view = ServiceDetailView::new(
            Arc::new(api),
            Arc::new(signed_in()),
            Arc::new(MockNavigator::new()),
            ClientConfig::default(),
        );
        assert_eq!(
            view.load(99, None).await,
            ServiceViewState::NotFound("El servicio no existe".into())
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_unavailable() {
        let mut api = MockMarketplaceApi::new();
        api.expect_fetch_service()
            .returning(|_, _| Err(AppError::Timeout));

        let view = ServiceDetailView::new(
            Arc::new(api),
            Arc::new(signed_in()),
            Arc::new(MockNavigator::new()),
            ClientConfig::default(),
        );
        assert_eq!(
            view.load(7, None).await,
            ServiceViewState::Unavailable("the server took too long to respond".into())
        );
    }

    #[tokio::test]
    async fn test_refused_session_is_cleared() {
        let mut session = signed_in();
        session
            .expect_clear()
            .with(eq("userSession"))
            .times(1)
            .returning(|_| ());

        let mut api = MockMarketplaceApi::new();
        api.expect_fetch_service()
            .returning(|_, _| Err(AppError::Unauthorized));

        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().times(1).returning(|_| ());

        let view = ServiceDetailView::new(
            Arc::new(api),
            Arc::new(session),
            Arc::new(navigator),
            ClientConfig::default(),
        );
        assert_eq!(view.load(7, None).await, ServiceViewState::RedirectedToLogin);
    }
}
