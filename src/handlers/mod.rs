//! HTTP handlers mapping routes onto store operations.

pub mod movies;
pub mod students;

use crate::error::{AppError, StoreError};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<u64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// Body must be a JSON object; fields of the wrong type are a validation failure carrying the serde message.
fn parse_body<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if !value.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| StoreError::Validation(e.to_string()).into())
}
