//! Chart input snapshot
//!
//! The three inputs every chart build takes: the ordered set of selected pet
//! ids, the pet cache, and the time filter. Selection order is the ordering
//! contract for series datasets.

use std::collections::HashMap;

use pawtrack_domain::{Pet, PetId, TimeFilter};

/// Borrowed snapshot of chart inputs.
#[derive(Debug, Clone, Copy)]
pub struct ChartSelection<'a> {
    pub selected: &'a [PetId],
    pub pets: &'a HashMap<PetId, Pet>,
    pub filter: TimeFilter,
}

impl<'a> ChartSelection<'a> {
    /// Create a selection snapshot.
    #[must_use]
    pub fn new(selected: &'a [PetId], pets: &'a HashMap<PetId, Pet>, filter: TimeFilter) -> Self {
        Self { selected, pets, filter }
    }

    /// Selected pets in selection order, with their selection index.
    ///
    /// Ids missing from the pet cache are skipped silently; their index is
    /// still consumed so dataset colors stay stable while data loads.
    pub fn iter_selected(&self) -> impl Iterator<Item = (usize, &'a Pet)> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(index, id)| self.pets.get(id).map(|pet| (index, pet)))
    }
}
