//! Registration form: state, neighborhood lookup, validation gate and
//! submission workflow.

mod controller;
mod lookup;
mod state;
mod submission;
mod validation;

pub use controller::{parse_selected_options, RegistrationForm};
pub use lookup::{LookupStatus, LookupTicket, NeighborhoodLookup};
pub use state::FormState;
pub use submission::{failure_errors, SubmissionPhase, SubmitOutcome};
pub use validation::ValidationGate;
