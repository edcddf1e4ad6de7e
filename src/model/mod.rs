//! Record schemas kept by the stores: students and movies.

pub mod movie;
pub mod student;

pub use movie::{Movie, MovieDraft, MovieFilter, MoviePatch};
pub use student::{Student, StudentDraft, StudentFilter, StudentPatch};

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// For patch fields: an explicit `null` becomes `Some(None)`; an absent key stays `None` via `#[serde(default)]`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query parameters with keys normalized to snake_case, empty values dropped.
pub(crate) fn normalize_query(params: &HashMap<String, String>) -> HashMap<String, &str> {
    params
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| (crate::case::to_snake_case(k), v.as_str()))
        .collect()
}

/// Case-insensitive equality used by string filters.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
