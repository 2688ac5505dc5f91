//! Health-data chart pipeline
//!
//! Folds per-pet health records into chart-ready datasets: time series for
//! numeric attributes, frequency counts for categorical ones. Everything here
//! is pure and synchronous; evaluation time is an explicit argument, so a
//! given input snapshot always produces bit-identical output. Ordering is
//! always explicit — pet-selection order for series, first-seen order for
//! histogram categories — never a map's iteration order.

pub mod filter;
pub mod histogram;
pub mod selection;
pub mod series;

pub use filter::filter_by_time;
pub use histogram::{
    activity_level_tier, build_category_histogram, coat_condition_category, mood_category,
};
pub use selection::ChartSelection;
pub use series::build_time_series;
