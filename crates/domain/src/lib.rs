//! # PawTrack Domain
//!
//! Business domain types and models for PawTrack.
//!
//! This crate contains:
//! - Domain data types (Pet, HealthRecord, Vaccination, pagination)
//! - Health-attribute taxonomy and chart output types
//! - Domain error types and Result definitions
//! - Domain constants (storage keys, routes, chart palette)
//!
//! ## Architecture
//! - No dependencies on other PawTrack crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod charts;
pub mod constants;
pub mod errors;
pub mod health;
pub mod types;

// Re-export commonly used items
pub use charts::{CategoryChart, PetSeries, SeriesPoint, TimeFilter, TimeSeriesChart};
pub use errors::{PawTrackError, Result};
pub use health::{AttributeKind, HealthRecord, Measurement};
pub use types::{Page, Pet, PetId, Vaccination};
