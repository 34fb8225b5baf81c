//! Registration form controller.
//!
//! Owns the form state and talks to the collaborators: the marketplace API,
//! the session store, the navigator and the error translator. State sits
//! behind a mutex that is never held across a network call, so lookups and
//! submissions can overlap with further edits.

use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use common::{AppError, AppResult, ErrorTranslator, FieldErrorTranslator};
use domain::{AccountField, AccountKind, AddressField, NeighborhoodId};

use super::lookup::LookupTicket;
use super::state::FormState;
use super::submission::{failure_errors, SubmissionPhase, SubmitOutcome};
use super::validation::ValidationGate;
use crate::clients::MarketplaceApi;
use crate::config::ClientConfig;
use crate::navigation::{Handoff, Navigator};
use crate::session::SessionStore;

/// Parse multi-select option values into neighborhood ids.
pub fn parse_selected_options<I, S>(values: I) -> AppResult<BTreeSet<NeighborhoodId>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| {
            v.as_ref().trim().parse().map_err(|_| {
                AppError::validation(format!("invalid neighborhood id '{}'", v.as_ref()))
            })
        })
        .collect()
}

/// Controller for one mounted registration form.
pub struct RegistrationForm<A, S, N>
where
    A: MarketplaceApi,
    S: SessionStore,
    N: Navigator,
{
    api: Arc<A>,
    session: Arc<S>,
    navigator: Arc<N>,
    translator: Arc<dyn ErrorTranslator>,
    config: ClientConfig,
    gate: ValidationGate,
    state: Mutex<FormState>,
    shutdown: watch::Sender<bool>,
}

impl<A, S, N> RegistrationForm<A, S, N>
where
    A: MarketplaceApi,
    S: SessionStore,
    N: Navigator,
{
    /// Mount a form with empty drafts.
    pub fn new(
        kind: AccountKind,
        api: Arc<A>,
        session: Arc<S>,
        navigator: Arc<N>,
        config: ClientConfig,
    ) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            api,
            session,
            navigator,
            translator: Arc::new(FieldErrorTranslator),
            gate: ValidationGate::new(config.strict_validation),
            config,
            state: Mutex::new(FormState::new(kind)),
            shutdown,
        }
    }

    /// Replace the server error translator.
    pub fn with_translator(mut self, translator: Arc<dyn ErrorTranslator>) -> Self {
        self.translator = translator;
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Fetch the city catalog for the city selector.
    pub async fn load_cities(&self) -> AppResult<usize> {
        let cities = self.cancellable(self.api.fetch_cities()).await.map_err(|e| {
            warn!("Failed to load cities: {}", e);
            e
        })?;

        let count = cities.len();
        self.state.lock().await.set_cities(cities);
        debug!("Loaded {} cities", count);
        Ok(count)
    }

    /// Unmount the form. In-flight requests are cancelled and their results
    /// discarded.
    pub async fn close(&self) {
        self.shutdown.send_replace(true);
        let mut state = self.state.lock().await;
        state.cancel_lookups();
        state.phase_mut().abandon();
        info!("Registration form closed");
    }

    pub fn is_closed(&self) -> bool {
        *self.shutdown.borrow()
    }

    // =========================================================================
    // Field updates
    // =========================================================================

    /// Merge one account field. A city change on a provider form runs the
    /// neighborhood lookup before returning.
    pub async fn update_account_field(&self, field: AccountField) -> AppResult<()> {
        self.ensure_open()?;
        let ticket = self.state.lock().await.apply_account_field(field);

        if let Some(ticket) = ticket {
            self.run_lookup(ticket).await;
        }
        Ok(())
    }

    /// Update a field by input name, as bound from a generic UI handler.
    pub async fn update_input(&self, name: &str, value: &str) -> AppResult<()> {
        let field = AccountField::from_input(name, value)?;
        self.update_account_field(field).await
    }

    /// Replace the neighborhood selection with the selected option ids.
    pub async fn update_neighborhood_selection<I>(&self, ids: I) -> AppResult<()>
    where
        I: IntoIterator<Item = NeighborhoodId>,
    {
        self.ensure_open()?;
        self.state
            .lock()
            .await
            .set_neighborhood_selection(ids.into_iter().collect())
    }

    pub async fn update_address_field(&self, field: AddressField) -> AppResult<()> {
        self.ensure_open()?;
        self.state.lock().await.apply_address_field(field);
        Ok(())
    }

    pub async fn set_membership_from_slider(&self, position: u8) {
        self.state.lock().await.set_membership_from_slider(position);
    }

    pub async fn clear_inputs(&self) {
        self.state.lock().await.clear_inputs();
    }

    pub async fn clear_neighborhoods(&self) {
        self.state.lock().await.clear_neighborhoods();
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Validate and submit the drafts.
    ///
    /// Returns `Err` only when submitting is not allowed right now (in
    /// flight, already succeeded, or closed). Validation and server failures
    /// are reported through [`SubmitOutcome`] and the form's error list.
    pub async fn submit(&self) -> AppResult<SubmitOutcome> {
        self.ensure_open()?;

        let payload = {
            let mut state = self.state.lock().await;
            match state.phase() {
                SubmissionPhase::Submitting => return Err(AppError::SubmissionInFlight),
                SubmissionPhase::Succeeded => return Err(AppError::AlreadySubmitted),
                SubmissionPhase::Idle | SubmissionPhase::Failed => {}
            }

            if let Err(errors) = self.gate.check_submission(state.account()) {
                info!("Submission blocked by {} local error(s)", errors.len());
                state.set_errors(errors.clone());
                return Ok(SubmitOutcome::Blocked(errors));
            }

            state.phase_mut().begin()?;
            state.set_errors(Vec::new());
            state.signup_request()
        };

        info!("Submitting signup for '{}'", payload.id);
        let result = self.cancellable(self.api.sign_up(&payload)).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(()) => {
                state.phase_mut().succeed();
                let account = state.account().clone();
                drop(state);

                // Drop any prior login before handing off
                self.session.clear(&self.config.session_cookie_name).await;
                self.navigator
                    .navigate(Handoff::to(&self.config.post_signup_path).with_account(account))
                    .await;
                Ok(SubmitOutcome::Succeeded)
            }
            Err(AppError::Cancelled) => {
                state.phase_mut().abandon();
                Err(AppError::Cancelled)
            }
            Err(err) => {
                warn!("Signup failed: {} ({})", err, err.code());
                let errors = failure_errors(&err, self.translator.as_ref());
                state.set_errors(errors.clone());
                state.phase_mut().fail();
                Ok(SubmitOutcome::Failed(errors))
            }
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Copy of the current form state for rendering.
    pub async fn snapshot(&self) -> FormState {
        self.state.lock().await.clone()
    }

    pub async fn info_message(&self) -> &'static str {
        self.state.lock().await.info_message()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_open(&self) -> AppResult<()> {
        if self.is_closed() {
            Err(AppError::Cancelled)
        } else {
            Ok(())
        }
    }

    async fn run_lookup(&self, ticket: LookupTicket) {
        let result = self
            .cancellable(self.api.fetch_neighborhoods(ticket.city))
            .await;
        if let Err(e) = &result {
            warn!("Neighborhood lookup for city {} failed: {}", ticket.city, e);
        }
        self.state.lock().await.apply_lookup(ticket, result);
    }

    /// Race a request against the form's shutdown signal.
    async fn cancellable<T, F>(&self, request: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        let mut closed = self.shutdown.subscribe();
        if *closed.borrow_and_update() {
            return Err(AppError::Cancelled);
        }

        tokio::select! {
            result = request => result,
            _ = closed.changed() => Err(AppError::Cancelled),
        }
    }
}
