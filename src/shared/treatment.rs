/**
 * Treatment Data Structures
 *
 * This module defines the treatment record owned by a user, the shape a
 * client submits when creating or updating one, and the validated forms the
 * backend works with after input has been checked.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// A stored treatment record
///
/// `owner` is the id of the user who created the record. It is fixed at
/// creation time and never taken from client input afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Treatment {
    pub id: Uuid,
    pub name: String,
    /// Tooth identifier, e.g. "14" or "UL6"
    pub tooth: String,
    /// Reference to the radiograph(s) taken for this treatment
    pub radiographs: String,
    pub date: String,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Treatment {
    /// Merge a patch into this record and bump `updated_at`
    ///
    /// Only fields present in the patch are overwritten. The owner is not
    /// part of a patch and therefore can never change here.
    pub fn apply(&mut self, patch: TreatmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(tooth) = patch.tooth {
            self.tooth = tooth;
        }
        if let Some(radiographs) = patch.radiographs {
            self.radiographs = radiographs;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        self.updated_at = Utc::now();
    }
}

/// Treatment payload as submitted by a client
///
/// Every field is optional at the wire level so that missing fields surface
/// as validation errors instead of JSON rejections. A client-supplied
/// `owner` is accepted in any JSON shape and always discarded.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TreatmentInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tooth: Option<String>,
    #[serde(default)]
    pub radiographs: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<serde_json::Value>,
}

/// Validated fields of a new treatment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatmentFields {
    pub name: String,
    pub tooth: String,
    pub radiographs: String,
    pub date: String,
}

/// Partial update of a treatment with blank fields already removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreatmentPatch {
    pub name: Option<String>,
    pub tooth: Option<String>,
    pub radiographs: Option<String>,
    pub date: Option<String>,
}

fn required(field: &str, value: Option<String>) -> Result<String, SharedError> {
    match value {
        None => Err(SharedError::missing(field)),
        Some(v) if v.trim().is_empty() => Err(SharedError::blank(field)),
        Some(v) => Ok(v),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TreatmentInput {
    /// Check that every required field is present and non-blank
    ///
    /// The owner, if any, is dropped: the caller assigns ownership.
    pub fn validate(self) -> Result<TreatmentFields, SharedError> {
        Ok(TreatmentFields {
            name: required("name", self.name)?,
            tooth: required("tooth", self.tooth)?,
            radiographs: required("radiographs", self.radiographs)?,
            date: required("date", self.date)?,
        })
    }

    /// Turn the payload into a patch, stripping the owner and blank fields
    pub fn into_patch(self) -> TreatmentPatch {
        TreatmentPatch {
            name: non_blank(self.name),
            tooth: non_blank(self.tooth),
            radiographs: non_blank(self.radiographs),
            date: non_blank(self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn full_input() -> TreatmentInput {
        TreatmentInput {
            name: Some("Root canal".to_string()),
            tooth: Some("36".to_string()),
            radiographs: Some("pa-36-2024-01.png".to_string()),
            date: Some("2024-01-15".to_string()),
            owner: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        let fields = full_input().validate().unwrap();
        assert_eq!(fields.name, "Root canal");
        assert_eq!(fields.tooth, "36");
    }

    #[test]
    fn test_validate_rejects_missing_field() {
        let mut input = full_input();
        input.tooth = None;
        assert_matches!(
            input.validate(),
            Err(SharedError::MissingField { field }) if field == "tooth"
        );
    }

    #[test]
    fn test_validate_rejects_blank_field() {
        let mut input = full_input();
        input.date = Some("   ".to_string());
        assert_matches!(
            input.validate(),
            Err(SharedError::BlankField { field }) if field == "date"
        );
    }

    #[test]
    fn test_into_patch_strips_owner_and_blanks() {
        let input: TreatmentInput = serde_json::from_value(serde_json::json!({
            "name": "Crown",
            "tooth": "",
            "owner": "someone-else"
        }))
        .unwrap();

        let patch = input.into_patch();
        assert_eq!(patch.name.as_deref(), Some("Crown"));
        assert!(patch.tooth.is_none());
        assert!(patch.radiographs.is_none());
    }

    #[test]
    fn test_apply_only_touches_patched_fields() {
        let now = Utc::now();
        let owner = Uuid::new_v4();
        let mut treatment = Treatment {
            id: Uuid::new_v4(),
            name: "Filling".to_string(),
            tooth: "11".to_string(),
            radiographs: "bw-1".to_string(),
            date: "2024-02-01".to_string(),
            owner,
            created_at: now,
            updated_at: now,
        };

        treatment.apply(TreatmentPatch {
            name: Some("Composite filling".to_string()),
            ..Default::default()
        });

        assert_eq!(treatment.name, "Composite filling");
        assert_eq!(treatment.tooth, "11");
        assert_eq!(treatment.owner, owner);
        assert!(treatment.updated_at >= now);
    }

    #[test]
    fn test_owner_accepts_any_json_shape() {
        let input: TreatmentInput = serde_json::from_value(serde_json::json!({
            "name": "Scale",
            "owner": { "id": 7 }
        }))
        .unwrap();
        assert!(input.owner.is_some());
    }
}
