//! REST client for the marketplace backend.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use common::{AppError, AppResult, HttpClientConfig};
use domain::{City, CityId, CityNeighborhoods, Neighborhood, ServiceDetail, SignupRequest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Backend operations used by the registration form and the views.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// List every city for the city selector
    async fn fetch_cities(&self) -> AppResult<Vec<City>>;

    /// List the neighborhoods of one city
    async fn fetch_neighborhoods(&self, city: CityId) -> AppResult<Vec<Neighborhood>>;

    /// Register a new account
    async fn sign_up(&self, request: &SignupRequest) -> AppResult<()>;

    /// Get a service by id, optionally with a bearer token
    async fn fetch_service(&self, id: i64, access_token: Option<String>) -> AppResult<ServiceDetail>;
}

/// `reqwest`-backed implementation of [`MarketplaceApi`].
pub struct HttpMarketplaceClient {
    client: Client,
    base_url: String,
}

impl HttpMarketplaceClient {
    /// Build a client with explicit connect and request timeouts.
    pub fn new(config: &HttpClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::internal(format!("HTTP client build failed: {}", e)))?;

        debug!("Marketplace client targeting {}", config.base_url);
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: Option<&str>,
    ) -> AppResult<T> {
        debug!("GET {}", path);
        let mut request = self.client.get(self.url(path));
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        let response = check_status(request.send().await?).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::decode(e.to_string()))
    }
}

#[async_trait]
impl MarketplaceApi for HttpMarketplaceClient {
    async fn fetch_cities(&self) -> AppResult<Vec<City>> {
        self.get_json("/cities", None).await
    }

    async fn fetch_neighborhoods(&self, city: CityId) -> AppResult<Vec<Neighborhood>> {
        let body: CityNeighborhoods = self.get_json(&format!("/cities/{}", city), None).await?;
        Ok(body.neighborhoods)
    }

    async fn sign_up(&self, request: &SignupRequest) -> AppResult<()> {
        debug!("POST /auth/signup for '{}'", request.id);
        let response = self
            .client
            .post(self.url("/auth/signup"))
            .json(request)
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    async fn fetch_service(&self, id: i64, access_token: Option<String>) -> AppResult<ServiceDetail> {
        self.get_json(&format!("/services/{}", id), access_token.as_deref())
            .await
    }
}

/// Pass successful responses through; turn every other status into an error
/// carrying the parsed body, if any.
async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(AppError::Unauthorized);
    }

    let bytes = response.bytes().await?;
    let body = serde_json::from_slice(&bytes).ok();
    if body.is_none() && !bytes.is_empty() {
        warn!("Non-JSON error body with status {}", status);
    }
    if status == StatusCode::NOT_FOUND && body.is_none() {
        return Err(AppError::NotFound);
    }

    Err(AppError::Rejected {
        status: status.as_u16(),
        body,
    })
}
