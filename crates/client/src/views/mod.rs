//! Screens outside the registration form.

pub mod profile_view;
pub mod service_view;

pub use profile_view::{ProfileMode, ProfileView};
pub use service_view::{ServiceDetailView, ServiceViewState};
