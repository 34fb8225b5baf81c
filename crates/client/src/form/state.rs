//! Registration form state and field-level updates.

use std::collections::BTreeSet;

use tracing::debug;

use common::{AppError, AppResult, FormError};
use domain::{
    AccountDraft, AccountField, AccountKind, AddressDraft, AddressField, City, DomainError,
    FieldStatus, MembershipTier, Neighborhood, NeighborhoodId, SignupRequest, ValidationState,
    INFO_REQUIRED_DATA,
};

use super::lookup::{LookupStatus, LookupTicket, NeighborhoodLookup};
use super::submission::SubmissionPhase;
use super::validation::ValidationGate;

/// Everything the registration form shows and edits.
#[derive(Debug, Clone)]
pub struct FormState {
    kind: AccountKind,
    account: AccountDraft,
    address: AddressDraft,
    validation: ValidationState,
    cities: Vec<City>,
    lookup: NeighborhoodLookup,
    errors: Vec<FormError>,
    phase: SubmissionPhase,
}

impl FormState {
    /// Empty drafts for a freshly mounted form.
    pub fn new(kind: AccountKind) -> Self {
        Self {
            kind,
            account: AccountDraft::default(),
            address: AddressDraft::default(),
            validation: ValidationState::default(),
            cities: Vec::new(),
            lookup: NeighborhoodLookup::default(),
            errors: Vec::new(),
            phase: SubmissionPhase::default(),
        }
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Merge one account field.
    ///
    /// Returns a ticket when the change requires a neighborhood lookup, i.e.
    /// the city changed on a provider form. Selections from the previous city
    /// are dropped right away.
    pub fn apply_account_field(&mut self, field: AccountField) -> Option<LookupTicket> {
        match &field {
            AccountField::Email(email) => {
                self.validation.email = ValidationGate::check_email(email);
            }
            AccountField::Password(password) => {
                self.validation.password = ValidationGate::check_password(password);
            }
            _ => {}
        }

        let city = match field {
            AccountField::City(id) => Some(id),
            _ => None,
        };
        self.account.apply(field);

        match city {
            Some(id) if self.kind.is_provider() => {
                self.account.neighborhoods = None;
                Some(self.lookup.begin(id))
            }
            _ => None,
        }
    }

    /// Replace the neighborhood selection wholesale.
    pub fn set_neighborhood_selection(&mut self, ids: BTreeSet<NeighborhoodId>) -> AppResult<()> {
        if !self.kind.is_provider() {
            return Err(DomainError::WrongAccountKind(self.kind.to_string()).into());
        }
        self.account.neighborhoods = Some(ids);
        Ok(())
    }

    pub fn apply_address_field(&mut self, field: AddressField) {
        self.address.apply(field);
    }

    /// Move the membership slider. Unknown positions are ignored.
    pub fn set_membership_from_slider(&mut self, position: u8) {
        if let Some(tier) = MembershipTier::from_slider(position) {
            self.account.membership = tier;
        }
    }

    /// Reset the free-text inputs of both drafts.
    pub fn clear_inputs(&mut self) {
        self.account.clear_text_inputs();
        self.address.clear();
    }

    /// Deselect every neighborhood, keeping the loaded list.
    pub fn clear_neighborhoods(&mut self) {
        if let Some(selection) = self.account.neighborhoods.as_mut() {
            selection.clear();
        }
    }

    pub fn set_cities(&mut self, cities: Vec<City>) {
        self.cities = cities;
    }

    /// Apply a lookup result if it belongs to the latest lookup.
    ///
    /// Returns whether the result was applied.
    pub fn apply_lookup(
        &mut self,
        ticket: LookupTicket,
        result: AppResult<Vec<Neighborhood>>,
    ) -> bool {
        if !self.lookup.is_current(&ticket) {
            debug!(
                "Discarding stale neighborhood lookup #{} for city {}",
                ticket.generation, ticket.city
            );
            return false;
        }

        match result {
            Ok(neighborhoods) => {
                self.account.neighborhoods = neighborhoods
                    .first()
                    .map(|first| BTreeSet::from([first.id]));
                self.lookup.complete(neighborhoods);
            }
            Err(AppError::Cancelled) => {
                self.lookup.cancel_all();
                self.account.neighborhoods = None;
            }
            Err(err) => {
                self.account.neighborhoods = None;
                self.lookup.fail(err.user_message());
            }
        }
        true
    }

    pub(crate) fn cancel_lookups(&mut self) {
        self.lookup.cancel_all();
    }

    pub(crate) fn phase_mut(&mut self) -> &mut SubmissionPhase {
        &mut self.phase
    }

    /// Replace the displayed error list.
    pub(crate) fn set_errors(&mut self, errors: Vec<FormError>) {
        self.errors = errors;
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Compose the signup payload from the current drafts.
    pub fn signup_request(&self) -> SignupRequest {
        SignupRequest::compose(
            self.kind,
            &self.account,
            &self.address,
            self.lookup.neighborhoods(),
        )
    }

    /// Advisory shown until the email field has been validated once.
    pub fn info_message(&self) -> &'static str {
        if self.validation.email == FieldStatus::Unvalidated {
            INFO_REQUIRED_DATA
        } else {
            ""
        }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn account(&self) -> &AccountDraft {
        &self.account
    }

    pub fn address(&self) -> &AddressDraft {
        &self.address
    }

    pub fn validation(&self) -> ValidationState {
        self.validation
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn neighborhoods(&self) -> &[Neighborhood] {
        self.lookup.neighborhoods()
    }

    pub fn lookup_status(&self) -> &LookupStatus {
        self.lookup.status()
    }

    pub fn neighborhood_selector_enabled(&self) -> bool {
        self.kind.is_provider() && self.lookup.selector_enabled()
    }

    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hood(id: i64) -> Neighborhood {
        Neighborhood {
            id,
            description: format!("Barrio {}", id),
            postal_code: String::new(),
        }
    }

    #[test]
    fn test_city_change_on_individual_form_needs_no_lookup() {
        let mut state = FormState::new(AccountKind::Individual);
        assert!(state.apply_account_field(AccountField::City(1)).is_none());
        assert_eq!(state.account().city, Some(1));
    }

    #[test]
    fn test_lookup_defaults_selection_to_first() {
        let mut state = FormState::new(AccountKind::Provider);
        let ticket = state.apply_account_field(AccountField::City(1)).unwrap();

        assert!(state.apply_lookup(ticket, Ok(vec![hood(10), hood(11)])));
        assert!(state.neighborhood_selector_enabled());
        assert_eq!(state.account().neighborhoods, Some(BTreeSet::from([10])));
    }

    #[test]
    fn test_empty_lookup_disables_selector() {
        let mut state = FormState::new(AccountKind::Provider);
        let ticket = state.apply_account_field(AccountField::City(5)).unwrap();

        state.apply_lookup(ticket, Ok(vec![]));
        assert!(!state.neighborhood_selector_enabled());
        assert_eq!(state.account().neighborhoods, None);
        assert_eq!(state.lookup_status(), &LookupStatus::Empty);
    }

    #[test]
    fn test_failed_lookup_is_distinct_from_empty() {
        let mut state = FormState::new(AccountKind::Provider);
        let ticket = state.apply_account_field(AccountField::City(5)).unwrap();

        state.apply_lookup(ticket, Err(AppError::Timeout));
        assert!(matches!(state.lookup_status(), LookupStatus::Failed(_)));
        assert!(!state.neighborhood_selector_enabled());
    }

    #[test]
    fn test_stale_lookup_is_discarded() {
        let mut state = FormState::new(AccountKind::Provider);
        let first = state.apply_account_field(AccountField::City(1)).unwrap();
        let second = state.apply_account_field(AccountField::City(2)).unwrap();

        assert!(state.apply_lookup(second, Ok(vec![hood(20)])));
        assert!(!state.apply_lookup(first, Ok(vec![hood(10)])));
        assert_eq!(state.account().neighborhoods, Some(BTreeSet::from([20])));
        assert_eq!(state.neighborhoods(), &[hood(20)]);
    }

    #[test]
    fn test_city_change_drops_previous_selection() {
        let mut state = FormState::new(AccountKind::Provider);
        let ticket = state.apply_account_field(AccountField::City(1)).unwrap();
        state.apply_lookup(ticket, Ok(vec![hood(10), hood(11)]));
        state
            .set_neighborhood_selection(BTreeSet::from([10, 11]))
            .unwrap();

        state.apply_account_field(AccountField::City(2));
        assert_eq!(state.account().neighborhoods, None);
        assert!(state.neighborhoods().is_empty());
    }

    #[test]
    fn test_selection_rejected_for_individuals() {
        let mut state = FormState::new(AccountKind::Individual);
        assert!(state.set_neighborhood_selection(BTreeSet::from([1])).is_err());
    }

    #[test]
    fn test_validation_state_and_info_message() {
        let mut state = FormState::new(AccountKind::Individual);
        assert_eq!(state.info_message(), INFO_REQUIRED_DATA);

        state.apply_account_field(AccountField::Email("joe".into()));
        assert_eq!(state.validation().email, FieldStatus::Danger);
        assert_eq!(state.info_message(), "");

        state.apply_account_field(AccountField::Email("joe@x.com".into()));
        assert_eq!(state.validation().email, FieldStatus::Success);

        state.apply_account_field(AccountField::Password("Abcd1234".into()));
        assert_eq!(state.validation().password, FieldStatus::Success);
    }

    #[test]
    fn test_membership_slider() {
        let mut state = FormState::new(AccountKind::Provider);
        state.set_membership_from_slider(2);
        assert_eq!(state.account().membership, MembershipTier::Silver);

        state.set_membership_from_slider(7);
        assert_eq!(state.account().membership, MembershipTier::Silver);
    }

    #[test]
    fn test_clear_inputs_and_neighborhoods() {
        let mut state = FormState::new(AccountKind::Provider);
        state.apply_account_field(AccountField::Id("joe123".into()));
        state.apply_account_field(AccountField::Email("joe@x.com".into()));
        state.apply_address_field(AddressField::StreetNumber(12));
        let ticket = state.apply_account_field(AccountField::City(1)).unwrap();
        state.apply_lookup(ticket, Ok(vec![hood(10)]));

        state.clear_inputs();
        state.clear_neighborhoods();

        assert_eq!(state.account().id, "");
        assert_eq!(state.account().email, "joe@x.com");
        assert_eq!(state.address().street_number, 0);
        assert_eq!(state.account().neighborhoods, Some(BTreeSet::new()));
        assert_eq!(state.neighborhoods().len(), 1);
    }
}
