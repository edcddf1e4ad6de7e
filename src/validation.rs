//! Schema validators run by the store before any record is committed.

use crate::error::StoreError;
use crate::model::movie::Movie;
use crate::model::student::Student;

pub const INVALID_AGE: &str = "Invalid age";
pub const NEGATIVE_CREDIT_POINTS: &str = "Credit points must be >=0";
pub const NAME_REQUIRED: &str = "Name is required";
pub const MISSING_MOVIE_FIELDS: &str = "Missing required fields";

/// Age and credit points must be non-negative; name must be non-empty. Checked in that order.
pub fn validate_student(student: &Student) -> Result<(), StoreError> {
    if student.age < 0 {
        return Err(StoreError::Validation(INVALID_AGE.into()));
    }
    if student.credit_points < 0 {
        return Err(StoreError::Validation(NEGATIVE_CREDIT_POINTS.into()));
    }
    if student.name.is_empty() {
        return Err(StoreError::Validation(NAME_REQUIRED.into()));
    }
    Ok(())
}

/// Title, director and year must all be present and non-empty; a year of 0 counts as missing.
pub fn validate_movie(movie: &Movie) -> Result<(), StoreError> {
    if movie.title.is_empty() || movie.director.is_empty() || movie.year == 0 {
        return Err(StoreError::Validation(MISSING_MOVIE_FIELDS.into()));
    }
    Ok(())
}
