//! Time-window filtering of health records

use chrono::{DateTime, Utc};
use pawtrack_domain::{HealthRecord, TimeFilter};

/// Keep the subsequence of `records` inside the window implied by `filter`,
/// evaluated at `now`. The window is inclusive at its start
/// (`measured_at >= now - window`); `TimeFilter::All` keeps everything.
#[must_use]
pub fn filter_by_time<'a>(
    records: &'a [HealthRecord],
    filter: TimeFilter,
    now: DateTime<Utc>,
) -> Vec<&'a HealthRecord> {
    records.iter().filter(|record| filter.contains(record.measured_at, now)).collect()
}
