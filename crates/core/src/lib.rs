//! # PawTrack Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The session/auth lifecycle (token decode, state machine, route policy)
//! - The health-data chart pipeline (time filter, series, histograms)
//! - Dashboard snapshot state with fetch-ordering guarantees
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `pawtrack-domain`
//! - No HTTP or filesystem code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod charts;
pub mod dashboard;
pub mod session;

// Re-export specific items to avoid ambiguity
pub use charts::{
    activity_level_tier, build_category_histogram, build_time_series, coat_condition_category,
    filter_by_time, mood_category, ChartSelection,
};
pub use dashboard::{DashboardState, FetchTicket};
pub use session::ports::{SessionFlag, TokenStore};
pub use session::token::{decode_claims, Claims, TokenDecodeError};
pub use session::{SessionManager, SessionState, TokenPair};
