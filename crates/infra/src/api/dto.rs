//! Wire DTOs for the backend REST contract
//!
//! The backend speaks a flat record shape for health data and a DRF-style
//! error body for validation failures. Conversions into domain types happen
//! here, at the edge, so everything inward deals only in the tagged types.

use chrono::{DateTime, NaiveDate, Utc};
use pawtrack_domain::{AttributeKind, HealthRecord, Pet, PetId};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Flat health record as the backend serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecordDto {
    pub attribute_name: AttributeKind,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub coat_condition: Option<String>,
    #[serde(default)]
    pub measured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl HealthRecordDto {
    /// Convert into a tagged domain record.
    ///
    /// `measured_at` falls back to `created_at`. Records with no timestamp
    /// or a missing payload are dropped with a warning, never an error.
    #[must_use]
    pub fn into_record(self) -> Option<HealthRecord> {
        let Some(measured_at) = self.measured_at.or(self.created_at) else {
            warn!(attribute = %self.attribute_name, "dropping health record without timestamp");
            return None;
        };

        HealthRecord::from_parts(
            self.attribute_name,
            self.value,
            self.unit,
            self.mood,
            self.coat_condition,
            measured_at,
        )
    }
}

/// Pet as the backend serializes it, with nested health records.
#[derive(Debug, Clone, Deserialize)]
pub struct PetDto {
    pub id: PetId,
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub medical_conditions: Option<String>,
    #[serde(default)]
    pub microchip_number: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// A missing field means zero records, not an error.
    #[serde(default)]
    pub health_attributes: Option<Vec<HealthRecordDto>>,
}

impl PetDto {
    /// Convert into the domain pet, dropping malformed nested records.
    #[must_use]
    pub fn into_pet(self) -> Pet {
        let health_attributes = self
            .health_attributes
            .unwrap_or_default()
            .into_iter()
            .filter_map(HealthRecordDto::into_record)
            .collect();

        Pet {
            id: self.id,
            name: self.name,
            species: self.species,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            color: self.color,
            medical_conditions: self.medical_conditions,
            microchip_number: self.microchip_number,
            avatar: self.avatar,
            health_attributes,
        }
    }
}

/// Create/update payload for a pet. `None` fields are omitted, so the same
/// shape serves POST and PATCH.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PetPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microchip_number: Option<String>,
}

/// Create/update payload for a health record.
#[derive(Debug, Clone, Serialize)]
pub struct HealthRecordPayload {
    pub pet: PetId,
    pub attribute_name: AttributeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coat_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_at: Option<DateTime<Utc>>,
}

/// Create/update payload for a vaccination entry.
#[derive(Debug, Clone, Serialize)]
pub struct VaccinationPayload {
    pub pet: PetId,
    pub vaccination_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccination_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccinated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccination_notes: Option<String>,
}

/// Registration request (`POST /api/register/`).
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token issuance response (`POST /api/token/`).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

/// Token refresh response (`POST /api/token/refresh/`).
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Google sign-in response (`POST /api/auth/google/`).
///
/// The backend has shipped both field spellings over time; aliases accept
/// either.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleAuthResponse {
    #[serde(alias = "access")]
    pub access_token: String,
    #[serde(alias = "refresh")]
    pub refresh_token: String,
    #[serde(alias = "email")]
    pub user: String,
}

/// DRF-style validation error body: a map of field name to messages, or a
/// `detail` string for non-field errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationErrors(pub serde_json::Map<String, serde_json::Value>);

impl ValidationErrors {
    /// First offending field and its first message.
    #[must_use]
    pub fn first_field(&self) -> Option<(String, String)> {
        for (field, messages) in &self.0 {
            let message = match messages {
                serde_json::Value::Array(items) => {
                    items.first().and_then(|item| item.as_str()).map(str::to_string)
                }
                serde_json::Value::String(message) => Some(message.clone()),
                _ => None,
            };
            if let Some(message) = message {
                return Some((field.clone(), message));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the wire DTOs.
    use super::*;

    /// Validates the flat-to-tagged health record conversion.
    ///
    /// Assertions:
    /// - Confirms `measured_at` falls back to `created_at`.
    /// - Ensures a record with neither timestamp is dropped.
    #[test]
    fn test_health_record_timestamp_fallback() {
        let dto: HealthRecordDto = serde_json::from_value(serde_json::json!({
            "attribute_name": "Weight",
            "value": 4.2,
            "unit": "kg",
            "created_at": "2024-06-01T10:00:00Z"
        }))
        .unwrap();
        let record = dto.into_record().unwrap();
        assert_eq!(record.measured_at.to_rfc3339(), "2024-06-01T10:00:00+00:00");

        let dto: HealthRecordDto = serde_json::from_value(serde_json::json!({
            "attribute_name": "Weight",
            "value": 4.2
        }))
        .unwrap();
        assert!(dto.into_record().is_none());
    }

    /// Validates pet conversion with missing and malformed nested records.
    ///
    /// Assertions:
    /// - Ensures a pet without `health_attributes` has zero records.
    /// - Ensures malformed nested records are dropped, valid ones kept.
    #[test]
    fn test_pet_conversion_tolerates_bad_records() {
        let dto: PetDto = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Milk", "species": "Cat"
        }))
        .unwrap();
        assert!(dto.into_pet().health_attributes.is_empty());

        let dto: PetDto = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Milk", "species": "Cat",
            "health_attributes": [
                {"attribute_name": "Mood", "measured_at": "2024-06-01T10:00:00Z"},
                {"attribute_name": "Mood", "mood": "Normal", "measured_at": "2024-06-01T10:00:00Z"}
            ]
        }))
        .unwrap();
        let pet = dto.into_pet();
        assert_eq!(pet.health_attributes.len(), 1);
    }

    /// Validates both Google response spellings.
    ///
    /// Assertions:
    /// - Confirms `access_token`/`refresh_token`/`user` deserializes.
    /// - Confirms `access`/`refresh`/`email` deserializes to the same shape.
    #[test]
    fn test_google_response_field_aliases() {
        let canonical: GoogleAuthResponse = serde_json::from_value(serde_json::json!({
            "access_token": "a", "refresh_token": "r", "user": "ada"
        }))
        .unwrap();
        assert_eq!(canonical.user, "ada");

        let aliased: GoogleAuthResponse = serde_json::from_value(serde_json::json!({
            "access": "a", "refresh": "r", "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(aliased.access_token, "a");
        assert_eq!(aliased.user, "ada@example.com");
    }

    /// Validates first-offending-field extraction from DRF bodies.
    ///
    /// Assertions:
    /// - Confirms array-style messages yield the first entry.
    /// - Confirms a `detail` string body also resolves.
    #[test]
    fn test_validation_first_field() {
        let errors: ValidationErrors = serde_json::from_value(serde_json::json!({
            "name": ["This field is required.", "Too short."],
            "species": ["This field is required."]
        }))
        .unwrap();
        let (field, message) = errors.first_field().unwrap();
        assert_eq!(field, "name");
        assert_eq!(message, "This field is required.");

        let errors: ValidationErrors =
            serde_json::from_value(serde_json::json!({"detail": "Not found."})).unwrap();
        assert_eq!(errors.first_field().unwrap().0, "detail");
    }

    /// Validates that PATCH payloads omit unset fields.
    ///
    /// Assertions:
    /// - Confirms a sparse `PetPayload` serializes only set fields.
    #[test]
    fn test_pet_payload_sparse_serialization() {
        let payload = PetPayload { name: Some("Butter".to_string()), ..Default::default() };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Butter"}));
    }
}
