//! Time-series construction for numeric attributes

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use pawtrack_domain::constants::pet_color;
use pawtrack_domain::{AttributeKind, PetSeries, SeriesPoint, TimeSeriesChart};
use tracing::debug;

use super::selection::ChartSelection;

/// Date format shared by point `x` values and the label axis. ISO dates keep
/// the axis unambiguous; ordering is done on the underlying `NaiveDate`
/// before formatting, never on the string.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the chart-ready time series for one numeric attribute.
///
/// Per selected pet (selection order): keep records of `attribute` that
/// carry a numeric value and fall inside the window, sort ascending by
/// `measured_at`, and map to dated points. The label axis is the
/// chronologically sorted, deduplicated union of point dates across all
/// pets. Pets with zero qualifying records contribute no dataset.
#[must_use]
pub fn build_time_series(
    selection: ChartSelection<'_>,
    attribute: AttributeKind,
    now: DateTime<Utc>,
) -> TimeSeriesChart {
    let mut label_dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut datasets = Vec::new();

    for (index, pet) in selection.iter_selected() {
        let mut records: Vec<_> = pet
            .health_attributes
            .iter()
            .filter(|record| record.attribute == attribute)
            .filter(|record| selection.filter.contains(record.measured_at, now))
            .filter_map(|record| record.measurement.value().map(|value| (record.measured_at, value)))
            .collect();

        if records.is_empty() {
            debug!(pet = %pet.name, %attribute, "no qualifying records, dropping dataset");
            continue;
        }

        records.sort_by_key(|(measured_at, _)| *measured_at);

        let points = records
            .into_iter()
            .map(|(measured_at, value)| {
                let date = measured_at.date_naive();
                label_dates.insert(date);
                SeriesPoint { x: date.format(DATE_FORMAT).to_string(), y: value }
            })
            .collect();

        datasets.push(PetSeries {
            label: pet.name.clone(),
            points,
            color: pet_color(index).to_string(),
        });
    }

    TimeSeriesChart {
        labels: label_dates.into_iter().map(|date| date.format(DATE_FORMAT).to_string()).collect(),
        datasets,
    }
}
