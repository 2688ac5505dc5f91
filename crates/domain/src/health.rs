//! Health-attribute taxonomy
//!
//! The backend stores every health data point in one flat record shape where
//! `attribute_name` decides which sibling field carries the payload. Inside
//! the client that duck typing is closed off into [`AttributeKind`] plus the
//! tagged [`Measurement`] sum type, so the aggregation boundary can match
//! exhaustively.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Closed set of health attributes tracked by the backend.
///
/// Serde names are the exact wire strings used by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Weight,
    Length,
    #[serde(rename = "Water Intake")]
    WaterIntake,
    #[serde(rename = "Activity Level")]
    ActivityLevel,
    Mood,
    #[serde(rename = "Bowel Movements")]
    BowelMovements,
    #[serde(rename = "Urination Frequency")]
    UrinationFrequency,
    #[serde(rename = "Coat Condition")]
    CoatCondition,
}

impl AttributeKind {
    /// Wire name as sent by the backend.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Length => "Length",
            Self::WaterIntake => "Water Intake",
            Self::ActivityLevel => "Activity Level",
            Self::Mood => "Mood",
            Self::BowelMovements => "Bowel Movements",
            Self::UrinationFrequency => "Urination Frequency",
            Self::CoatCondition => "Coat Condition",
        }
    }

    /// Whether this attribute carries a numeric `value`.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Mood | Self::CoatCondition)
    }

    /// Whether this attribute carries a categorical string payload.
    #[must_use]
    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::Mood | Self::CoatCondition)
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Payload of one health record, tagged by the attribute it belongs to.
///
/// Exactly one variant is meaningful per record; which one is decided by
/// [`AttributeKind`] at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    Numeric { value: f64, unit: Option<String> },
    Mood(String),
    CoatCondition(String),
}

impl Measurement {
    /// Numeric value, if this is a numeric measurement.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Numeric { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// One measured or observed pet-health data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub attribute: AttributeKind,
    pub measurement: Measurement,
    pub measured_at: DateTime<Utc>,
}

impl HealthRecord {
    /// Assemble a record from the flat wire shape.
    ///
    /// `attribute` selects which of the sibling fields is meaningful; the
    /// others are ignored. Returns `None` (with a warning) when the selected
    /// field is absent — a malformed record is dropped, never an error.
    #[must_use]
    pub fn from_parts(
        attribute: AttributeKind,
        value: Option<f64>,
        unit: Option<String>,
        mood: Option<String>,
        coat_condition: Option<String>,
        measured_at: DateTime<Utc>,
    ) -> Option<Self> {
        let measurement = match attribute {
            AttributeKind::Mood => mood.map(Measurement::Mood),
            AttributeKind::CoatCondition => coat_condition.map(Measurement::CoatCondition),
            _ => value.map(|value| Measurement::Numeric { value, unit }),
        };

        match measurement {
            Some(measurement) => Some(Self { attribute, measurement, measured_at }),
            None => {
                warn!(attribute = %attribute, %measured_at, "dropping health record with missing payload");
                None
            }
        }
    }
}
