//! Neighborhood lookup bookkeeping with request-generation tagging.
//!
//! Every lookup gets a monotonically increasing generation. Only the response
//! carrying the latest generation may be applied; anything older is stale.

use tracing::debug;

use domain::{CityId, Neighborhood};

/// Status of the neighborhood selector's data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LookupStatus {
    /// No city picked yet, or the last lookup was cancelled
    #[default]
    Idle,
    Loading,
    /// Neighborhoods loaded; the selector is enabled
    Loaded,
    /// The city has no neighborhoods; the selector is disabled
    Empty,
    /// The lookup failed; holds a user-facing message
    Failed(String),
}

/// Identifies one issued lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub city: CityId,
}

/// Neighborhoods loaded for the selected city.
#[derive(Debug, Clone, Default)]
pub struct NeighborhoodLookup {
    generation: u64,
    neighborhoods: Vec<Neighborhood>,
    status: LookupStatus,
}

impl NeighborhoodLookup {
    /// Issue a new lookup. Previously loaded neighborhoods are dropped.
    pub fn begin(&mut self, city: CityId) -> LookupTicket {
        self.generation += 1;
        self.neighborhoods.clear();
        self.status = LookupStatus::Loading;
        debug!("Neighborhood lookup #{} for city {}", self.generation, city);
        LookupTicket {
            generation: self.generation,
            city,
        }
    }

    /// Whether `ticket` is the latest issued lookup.
    pub fn is_current(&self, ticket: &LookupTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Store a lookup result. Callers check [`is_current`](Self::is_current) first.
    pub fn complete(&mut self, neighborhoods: Vec<Neighborhood>) {
        self.status = if neighborhoods.is_empty() {
            LookupStatus::Empty
        } else {
            LookupStatus::Loaded
        };
        self.neighborhoods = neighborhoods;
    }

    pub fn fail(&mut self, message: String) {
        self.neighborhoods.clear();
        self.status = LookupStatus::Failed(message);
    }

    /// Invalidate every outstanding lookup.
    pub fn cancel_all(&mut self) {
        self.generation += 1;
        if self.status == LookupStatus::Loading {
            self.status = LookupStatus::Idle;
        }
    }

    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    pub fn status(&self) -> &LookupStatus {
        &self.status
    }

    pub fn selector_enabled(&self) -> bool {
        self.status == LookupStatus::Loaded
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
