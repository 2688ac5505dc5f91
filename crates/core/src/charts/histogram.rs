//! Frequency-count construction for categorical attributes

use chrono::{DateTime, Utc};
use pawtrack_domain::constants::PET_PALETTE;
use pawtrack_domain::{AttributeKind, CategoryChart, HealthRecord, Measurement};

use super::selection::ChartSelection;

/// Category extractor applied to each qualifying record.
///
/// Returning `None` skips the record (e.g. the wrong measurement variant
/// slipped through, or a numeric value has no tier).
pub type CategorySelector = fn(&HealthRecord) -> Option<String>;

/// Selector for mood records.
#[must_use]
pub fn mood_category(record: &HealthRecord) -> Option<String> {
    match &record.measurement {
        Measurement::Mood(mood) => Some(mood.clone()),
        _ => None,
    }
}

/// Selector for coat-condition records.
#[must_use]
pub fn coat_condition_category(record: &HealthRecord) -> Option<String> {
    match &record.measurement {
        Measurement::CoatCondition(condition) => Some(condition.clone()),
        _ => None,
    }
}

/// Selector bucketing numeric activity levels into tiers.
///
/// Below 3 is `Low`, 3 through 6 inclusive is `Moderate`, above 6 is `High`.
#[must_use]
pub fn activity_level_tier(record: &HealthRecord) -> Option<String> {
    let value = record.measurement.value()?;
    let tier = if value < 3.0 {
        "Low"
    } else if value <= 6.0 {
        "Moderate"
    } else {
        "High"
    };
    Some(tier.to_string())
}

/// Build a frequency histogram for one categorical attribute.
///
/// Counts are keyed by the category the selector extracts and accumulated
/// across *all* selected pets combined. Labels appear in first-seen order —
/// pets in selection order, each pet's records in payload order — held in an
/// explicit vector, never a map's iteration order.
#[must_use]
pub fn build_category_histogram(
    selection: ChartSelection<'_>,
    attribute: AttributeKind,
    selector: CategorySelector,
    now: DateTime<Utc>,
) -> CategoryChart {
    let mut counts: Vec<(String, u64)> = Vec::new();

    for (_, pet) in selection.iter_selected() {
        for record in &pet.health_attributes {
            if record.attribute != attribute {
                continue;
            }
            if !selection.filter.contains(record.measured_at, now) {
                continue;
            }
            let Some(category) = selector(record) else {
                continue;
            };

            match counts.iter_mut().find(|(label, _)| *label == category) {
                Some((_, count)) => *count += 1,
                None => counts.push((category, 1)),
            }
        }
    }

    // Palette prefix: one color per label, capped at the palette length.
    let colors = PET_PALETTE.iter().take(counts.len()).map(|color| color.to_string()).collect();
    let (labels, values) = counts.into_iter().unzip();
    CategoryChart { labels, values, colors }
}

#[cfg(test)]
mod tests {
    //! Unit tests for charts::histogram.
    use std::collections::HashMap;

    use chrono::Duration;
    use pawtrack_domain::{Pet, PetId, TimeFilter};

    use super::*;

    fn pet(id: PetId, name: &str, records: Vec<HealthRecord>) -> Pet {
        Pet {
            id,
            name: name.to_string(),
            species: "Dog".to_string(),
            date_of_birth: None,
            gender: None,
            color: None,
            medical_conditions: None,
            microchip_number: None,
            avatar: None,
            health_attributes: records,
        }
    }

    fn mood(measured_at: DateTime<Utc>, mood: &str) -> HealthRecord {
        HealthRecord {
            attribute: AttributeKind::Mood,
            measurement: Measurement::Mood(mood.to_string()),
            measured_at,
        }
    }

    fn activity(measured_at: DateTime<Utc>, value: f64) -> HealthRecord {
        HealthRecord {
            attribute: AttributeKind::ActivityLevel,
            measurement: Measurement::Numeric { value, unit: None },
            measured_at,
        }
    }

    fn cache(pets: Vec<Pet>) -> HashMap<PetId, Pet> {
        pets.into_iter().map(|pet| (pet.id, pet)).collect()
    }

    /// Validates that moods across two pets combine into one count set in
    /// first-seen order.
    ///
    /// Assertions:
    /// - Confirms `labels == ["Normal", "Lethargic"]`.
    /// - Confirms `values == [3, 1]` (counts sum to qualifying records).
    #[test]
    fn test_mood_counts_combined_first_seen_order() {
        let now = Utc::now();
        let day = |days: i64| now - Duration::days(days);
        let pets = cache(vec![
            pet(1, "Milk", vec![mood(day(1), "Normal"), mood(day(2), "Normal")]),
            pet(2, "Butter", vec![mood(day(1), "Lethargic"), mood(day(3), "Normal")]),
        ]);
        let selected = vec![1, 2];

        let chart = build_category_histogram(
            ChartSelection::new(&selected, &pets, TimeFilter::Last7),
            AttributeKind::Mood,
            mood_category,
            now,
        );

        assert_eq!(chart.labels, vec!["Normal".to_string(), "Lethargic".to_string()]);
        assert_eq!(chart.values, vec![3, 1]);
        assert_eq!(chart.values.iter().sum::<u64>(), 4);
        assert_eq!(chart.colors.len(), 2);
    }

    /// Validates that first-seen order follows selection order, not id order.
    ///
    /// Assertions:
    /// - Confirms the first label comes from the first *selected* pet.
    #[test]
    fn test_first_seen_follows_selection_order() {
        let now = Utc::now();
        let pets = cache(vec![
            pet(1, "Milk", vec![mood(now, "Playful")]),
            pet(2, "Butter", vec![mood(now, "Calm")]),
        ]);
        let selected = vec![2, 1];

        let chart = build_category_histogram(
            ChartSelection::new(&selected, &pets, TimeFilter::All),
            AttributeKind::Mood,
            mood_category,
            now,
        );

        assert_eq!(chart.labels, vec!["Calm".to_string(), "Playful".to_string()]);
    }

    /// Validates the time window is applied before counting.
    ///
    /// Assertions:
    /// - Ensures an out-of-window mood does not reach the counts.
    #[test]
    fn test_window_applied_before_counting() {
        let now = Utc::now();
        let pets = cache(vec![pet(
            1,
            "Milk",
            vec![mood(now - Duration::days(1), "Normal"), mood(now - Duration::days(20), "Anxious")],
        )]);
        let selected = vec![1];

        let chart = build_category_histogram(
            ChartSelection::new(&selected, &pets, TimeFilter::Last7),
            AttributeKind::Mood,
            mood_category,
            now,
        );

        assert_eq!(chart.labels, vec!["Normal".to_string()]);
        assert_eq!(chart.values, vec![1]);
    }

    /// Validates the activity-level tier bucketing.
    ///
    /// Assertions:
    /// - Confirms values below 3 are `Low`, 3..=6 `Moderate`, above 6 `High`.
    /// - Confirms boundary values land in `Moderate`.
    #[test]
    fn test_activity_tiers() {
        let now = Utc::now();
        let pets = cache(vec![pet(
            1,
            "Milk",
            vec![
                activity(now, 1.0),
                activity(now, 3.0),
                activity(now, 6.0),
                activity(now, 8.5),
            ],
        )]);
        let selected = vec![1];

        let chart = build_category_histogram(
            ChartSelection::new(&selected, &pets, TimeFilter::All),
            AttributeKind::ActivityLevel,
            activity_level_tier,
            now,
        );

        assert_eq!(
            chart.labels,
            vec!["Low".to_string(), "Moderate".to_string(), "High".to_string()]
        );
        assert_eq!(chart.values, vec![1, 2, 1]);
    }

    /// Validates the empty-selection edge case.
    ///
    /// Assertions:
    /// - Confirms empty labels, values, and colors.
    #[test]
    fn test_empty_selection() {
        let now = Utc::now();
        let pets = cache(vec![pet(1, "Milk", vec![mood(now, "Normal")])]);
        let selected: Vec<PetId> = vec![];

        let chart = build_category_histogram(
            ChartSelection::new(&selected, &pets, TimeFilter::All),
            AttributeKind::Mood,
            mood_category,
            now,
        );

        assert!(chart.labels.is_empty());
        assert!(chart.values.is_empty());
        assert!(chart.colors.is_empty());
    }

    /// Validates that colors are a prefix of the palette, capped at its
    /// length when categories outnumber it.
    ///
    /// Assertions:
    /// - Confirms six distinct moods yield six labels but five colors.
    /// - Confirms the colors are the palette in order.
    #[test]
    fn test_colors_capped_at_palette_length() {
        let now = Utc::now();
        let moods = ["Normal", "Playful", "Calm", "Anxious", "Lethargic", "Aggressive"];
        let records = moods.iter().map(|name| mood(now, name)).collect();
        let pets = cache(vec![pet(1, "Milk", records)]);
        let selected = vec![1];

        let chart = build_category_histogram(
            ChartSelection::new(&selected, &pets, TimeFilter::All),
            AttributeKind::Mood,
            mood_category,
            now,
        );

        assert_eq!(chart.labels.len(), 6);
        assert_eq!(chart.colors.len(), PET_PALETTE.len());
        assert_eq!(chart.colors[0], PET_PALETTE[0]);
        assert_eq!(chart.colors[4], PET_PALETTE[4]);
    }

    /// Validates that a mismatched selector skips records instead of
    /// miscounting them.
    ///
    /// Assertions:
    /// - Ensures numeric records yield nothing under the mood selector.
    #[test]
    fn test_selector_mismatch_skips() {
        let now = Utc::now();
        let pets = cache(vec![pet(1, "Milk", vec![activity(now, 5.0)])]);
        let selected = vec![1];

        let chart = build_category_histogram(
            ChartSelection::new(&selected, &pets, TimeFilter::All),
            AttributeKind::ActivityLevel,
            mood_category,
            now,
        );

        assert!(chart.labels.is_empty());
    }
}
