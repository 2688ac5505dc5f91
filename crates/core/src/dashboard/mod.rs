//! Dashboard snapshot state
//!
//! Holds the latest complete pets/selection/filter snapshot the chart
//! pipeline reads from. Network fetches feeding this state may complete out
//! of order; every refresh takes a [`FetchTicket`] and only the response for
//! the most recently issued ticket is installed. A stale, later-arriving
//! response is discarded, and installing a response replaces the pet cache
//! wholesale — never merges with an older one.

use std::collections::HashMap;

use pawtrack_domain::{Page, Pet, PetId, TimeFilter};
use tracing::{debug, warn};

use crate::charts::ChartSelection;

/// Ticket identifying one logical fetch. Monotonically increasing; only the
/// newest ticket's response may be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// The dashboard's input snapshot for chart building.
#[derive(Debug, Default)]
pub struct DashboardState {
    pets: HashMap<PetId, Pet>,
    selected: Vec<PetId>,
    filter: TimeFilter,
    latest_ticket: u64,
}

impl DashboardState {
    /// Fresh, empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a pet refresh; the returned ticket must accompany the response.
    /// Issuing a new ticket invalidates every outstanding one.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        FetchTicket(self.latest_ticket)
    }

    /// Install a fetched pet page if `ticket` is still the newest.
    ///
    /// On install the cache is replaced, every fetched pet becomes selected
    /// (page order), and the filter resets to `All` — mirroring a fresh
    /// dashboard load. Returns `false` when the response was stale and
    /// discarded.
    pub fn apply_pets(&mut self, ticket: FetchTicket, page: Page<Pet>) -> bool {
        if ticket.0 != self.latest_ticket {
            warn!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding stale pet fetch response"
            );
            return false;
        }

        debug!(pets = page.results.len(), "installing pet snapshot");
        self.selected = page.results.iter().map(|pet| pet.id).collect();
        self.pets = page.results.into_iter().map(|pet| (pet.id, pet)).collect();
        self.filter = TimeFilter::All;
        true
    }

    /// Replace the selected-pets set, preserving the given order.
    pub fn set_selected(&mut self, selected: Vec<PetId>) {
        self.selected = selected;
    }

    /// Replace the time filter.
    pub fn set_filter(&mut self, filter: TimeFilter) {
        self.filter = filter;
    }

    /// Borrow the current snapshot as chart input.
    #[must_use]
    pub fn selection(&self) -> ChartSelection<'_> {
        ChartSelection::new(&self.selected, &self.pets, self.filter)
    }

    /// Selected pet ids in selection order.
    #[must_use]
    pub fn selected(&self) -> &[PetId] {
        &self.selected
    }

    /// Current time filter.
    #[must_use]
    pub fn filter(&self) -> TimeFilter {
        self.filter
    }

    /// Pet cache keyed by id.
    #[must_use]
    pub fn pets(&self) -> &HashMap<PetId, Pet> {
        &self.pets
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the dashboard snapshot state.
    use super::*;

    fn pet(id: PetId, name: &str) -> Pet {
        Pet {
            id,
            name: name.to_string(),
            species: "Cat".to_string(),
            date_of_birth: None,
            gender: None,
            color: None,
            medical_conditions: None,
            microchip_number: None,
            avatar: None,
            health_attributes: Vec::new(),
        }
    }

    fn page(pets: Vec<Pet>) -> Page<Pet> {
        let count = pets.len() as u64;
        Page { results: pets, count }
    }

    /// Validates the happy path: installing a fresh response.
    ///
    /// Assertions:
    /// - Confirms selection defaults to all fetched ids in page order.
    /// - Confirms the filter resets to `All`.
    #[test]
    fn test_apply_installs_snapshot() {
        let mut state = DashboardState::new();
        state.set_filter(TimeFilter::Last7);

        let ticket = state.begin_refresh();
        assert!(state.apply_pets(ticket, page(vec![pet(2, "Butter"), pet(1, "Milk")])));

        assert_eq!(state.selected(), &[2, 1]);
        assert_eq!(state.filter(), TimeFilter::All);
        assert_eq!(state.pets().len(), 2);
    }

    /// Validates that a stale response is discarded.
    ///
    /// Assertions:
    /// - Ensures the older ticket's response returns `false`.
    /// - Ensures the newer snapshot survives, with no merging.
    #[test]
    fn test_stale_response_discarded() {
        let mut state = DashboardState::new();

        let old_ticket = state.begin_refresh();
        let new_ticket = state.begin_refresh();

        // Newer request's response arrives first.
        assert!(state.apply_pets(new_ticket, page(vec![pet(1, "Milk")])));
        // Older response straggles in afterwards and must be dropped.
        assert!(!state.apply_pets(old_ticket, page(vec![pet(9, "Ghost")])));

        assert_eq!(state.selected(), &[1]);
        assert!(state.pets().contains_key(&1));
        assert!(!state.pets().contains_key(&9));
    }

    /// Validates that installing replaces rather than merges.
    ///
    /// Assertions:
    /// - Ensures pets from the previous snapshot are gone after a refresh.
    #[test]
    fn test_install_replaces_previous_snapshot() {
        let mut state = DashboardState::new();

        let first = state.begin_refresh();
        assert!(state.apply_pets(first, page(vec![pet(1, "Milk"), pet(2, "Butter")])));

        let second = state.begin_refresh();
        assert!(state.apply_pets(second, page(vec![pet(3, "Clover")])));

        assert_eq!(state.selected(), &[3]);
        assert_eq!(state.pets().len(), 1);
    }

    /// Validates that a reused ticket cannot be applied twice after a newer
    /// refresh began.
    ///
    /// Assertions:
    /// - Ensures the ticket from before `begin_refresh` is rejected.
    #[test]
    fn test_ticket_invalidated_by_new_refresh() {
        let mut state = DashboardState::new();

        let ticket = state.begin_refresh();
        let _newer = state.begin_refresh();
        assert!(!state.apply_pets(ticket, page(vec![pet(1, "Milk")])));
        assert!(state.pets().is_empty());
    }
}
