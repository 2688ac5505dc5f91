//! Chart-facing types
//!
//! Derived, never persisted: the time-window filter applied to health
//! records before charting, and the dataset shapes the chart layer renders
//! directly.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Rolling time window applied to health records before charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    Last7,
    Last30,
    All,
}

impl TimeFilter {
    /// Start of the window relative to `now`, or `None` for the unbounded
    /// filter. A record qualifies when `measured_at >= start` (inclusive).
    #[must_use]
    pub fn window_start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Last7 => Some(now - Duration::days(7)),
            Self::Last30 => Some(now - Duration::days(30)),
            Self::All => None,
        }
    }

    /// Whether a record measured at `measured_at` falls inside this window.
    #[must_use]
    pub fn contains(&self, measured_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.window_start(now) {
            Some(start) => measured_at >= start,
            None => true,
        }
    }
}

impl Default for TimeFilter {
    fn default() -> Self {
        Self::All
    }
}

/// One point of a numeric time series. `x` is the ISO-formatted date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
}

/// One pet's dataset within a time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
    pub color: String,
}

/// Chart-ready time series for a numeric attribute.
///
/// `labels` is the ascending, deduplicated union of all point dates across
/// datasets; `datasets` follow pet-selection order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeriesChart {
    pub labels: Vec<String>,
    pub datasets: Vec<PetSeries>,
}

/// Chart-ready frequency counts for a categorical attribute.
///
/// `labels` are category names in first-seen order; `values` are the
/// parallel counts across all selected pets combined.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryChart {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub colors: Vec<String>,
}
