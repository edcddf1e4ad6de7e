//! Student registry schema.

use crate::error::StoreError;
use crate::model::{eq_ignore_case, normalize_query, nullable};
use crate::store::Entity;
use crate::validation::{validate_student, INVALID_AGE, NEGATIVE_CREDIT_POINTS};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub age: i64,
    pub credit_points: i64,
    pub campus: String,
}

/// Create payload. Any `id` in the body is ignored; `creditPoints` defaults to 0.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentDraft {
    pub name: Option<String>,
    #[serde(deserialize_with = "integer_age")]
    pub age: Option<i64>,
    pub credit_points: Option<i64>,
    pub campus: Option<String>,
}

/// Merge payload: only supplied keys overwrite. `Some(None)` is an explicit `null`.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentPatch {
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(deserialize_with = "nullable_age")]
    #[schema(value_type = Option<i64>)]
    pub age: Option<Option<i64>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<i64>)]
    pub credit_points: Option<Option<i64>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub campus: Option<Option<String>>,
}

/// Anything but a JSON integer (or null) is rejected with the validator's age message.
fn integer_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(v) => v.as_i64().map(Some).ok_or_else(|| D::Error::custom(INVALID_AGE)),
    }
}

fn nullable_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Option<i64>>, D::Error> {
    integer_age(deserializer).map(Some)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub campus: Option<String>,
    pub name: Option<String>,
    pub credit_points_min: Option<i64>,
}

impl StudentFilter {
    /// Recognizes `campus`, `name` and `creditPointsMin` (camelCase or snake_case).
    /// Unparseable thresholds are treated as absent.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let params = normalize_query(params);
        Self {
            campus: params.get("campus").map(|s| s.to_string()),
            name: params.get("name").map(|s| s.to_string()),
            credit_points_min: params.get("credit_points_min").and_then(|s| s.trim().parse().ok()),
        }
    }
}

impl Entity for Student {
    const KIND: &'static str = "Student";

    type Draft = StudentDraft;
    type Patch = StudentPatch;
    type Filter = StudentFilter;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: StudentDraft) -> Result<Self, StoreError> {
        let age = draft
            .age
            .ok_or_else(|| StoreError::Validation(INVALID_AGE.into()))?;
        Ok(Student {
            id,
            name: draft.name.unwrap_or_default(),
            age,
            credit_points: draft.credit_points.unwrap_or(0),
            campus: draft.campus.unwrap_or_default(),
        })
    }

    /// A null age or credit-point count cannot be stored and fails here; a null name or campus
    /// becomes empty and is left to `validate`.
    fn merge(&self, patch: StudentPatch) -> Result<Self, StoreError> {
        let age = match patch.age {
            None => self.age,
            Some(Some(age)) => age,
            Some(None) => return Err(StoreError::Validation(INVALID_AGE.into())),
        };
        let credit_points = match patch.credit_points {
            None => self.credit_points,
            Some(Some(points)) => points,
            Some(None) => return Err(StoreError::Validation(NEGATIVE_CREDIT_POINTS.into())),
        };
        Ok(Student {
            id: self.id,
            name: patch.name.map_or_else(|| self.name.clone(), Option::unwrap_or_default),
            age,
            credit_points,
            campus: patch.campus.map_or_else(|| self.campus.clone(), Option::unwrap_or_default),
        })
    }

    fn matches(&self, filter: &StudentFilter) -> bool {
        filter.campus.as_deref().map_or(true, |c| eq_ignore_case(&self.campus, c))
            && filter.name.as_deref().map_or(true, |n| eq_ignore_case(&self.name, n))
            && filter.credit_points_min.map_or(true, |min| self.credit_points >= min)
    }

    fn validate(&self) -> Result<(), StoreError> {
        validate_student(self)
    }
}

pub fn seed() -> Vec<Student> {
    [
        (1, "Tony", 24, 100, "Kauppi"),
        (2, "Kalle", 20, 30, "Hervanta"),
        (3, "Maija", 21, 120, "Center"),
    ]
    .into_iter()
    .map(|(id, name, age, credit_points, campus)| Student {
        id,
        name: name.into(),
        age,
        credit_points,
        campus: campus.into(),
    })
    .collect()
}
