//! Common data types used throughout the application

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::health::HealthRecord;

/// Backend pet identifier (integer primary key).
pub type PetId = i64;

/// A registered pet with its nested health records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub color: Option<String>,
    pub medical_conditions: Option<String>,
    pub microchip_number: Option<String>,
    pub avatar: Option<String>,
    pub health_attributes: Vec<HealthRecord>,
}

/// One entry in a pet's vaccination schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccination {
    pub id: i64,
    pub pet: PetId,
    pub vaccination_name: String,
    pub vaccination_status: Option<String>,
    pub schedule_at: Option<DateTime<Utc>>,
    pub vaccinated_at: Option<DateTime<Utc>>,
    pub vaccination_notes: Option<String>,
}

/// Paginated response envelope (`{results, count}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
}

impl<T> Page<T> {
    /// An empty page.
    #[must_use]
    pub fn empty() -> Self {
        Self { results: Vec::new(), count: 0 }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
