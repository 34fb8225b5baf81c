//! Marketplace Client Library
//!
//! Registration form controller, neighborhood lookup and the supporting
//! screens of the marketplace front end, driven against the backend REST API.

pub mod clients;
pub mod config;
pub mod form;
pub mod navigation;
pub mod session;
pub mod views;

use std::sync::Arc;

use tracing::info;

use common::AppResult;
use domain::AccountKind;

use crate::clients::HttpMarketplaceClient;
use crate::config::ClientConfig;
use crate::form::RegistrationForm;
use crate::navigation::RecordingNavigator;
use crate::session::InMemorySessionStore;

/// Registration form wired to the HTTP backend, a process-local session
/// store and a logging navigator.
pub type HttpRegistrationForm =
    RegistrationForm<HttpMarketplaceClient, InMemorySessionStore, RecordingNavigator>;

/// Mount a registration form against the configured backend and load the
/// city catalog.
pub async fn mount_registration_form(
    kind: AccountKind,
    config: ClientConfig,
) -> AppResult<HttpRegistrationForm> {
    let api = Arc::new(HttpMarketplaceClient::new(&config.http)?);
    info!("Mounting {} registration form against {}", kind, config.http.base_url);

    let form = RegistrationForm::new(
        kind,
        api,
        Arc::new(InMemorySessionStore::new()),
        Arc::new(RecordingNavigator::new()),
        config,
    );
    form.load_cities().await?;
    Ok(form)
}
