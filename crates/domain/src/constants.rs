//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Persisted client state keys
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const APP_LOADED_FLAG: &str = "app_loaded";

// Route paths
pub const ROOT_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

// Chart palette, indexed by pet-selection order (modulo length)
pub const PET_PALETTE: [&str; 5] = ["#FA7F72", "#3D7EA6", "#FFF0D1", "#795757", "#664343"];

// Pagination defaults
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const VACCINATION_PAGE_SIZE: u32 = 5;

// HTTP defaults
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Palette color for the pet at the given selection index.
#[must_use]
pub fn pet_color(index: usize) -> &'static str {
    PET_PALETTE[index % PET_PALETTE.len()]
}
