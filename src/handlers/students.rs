//! Student registry handlers: list/filter, read, create, merge-update, delete, HTML index.

use crate::error::{AppError, ErrorBody};
use crate::handlers::{parse_body, parse_id};
use crate::model::{Student, StudentDraft, StudentFilter, StudentPatch};
use crate::response::{created, html_list, ok};
use crate::state::StudentState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

/// Every student as an HTML list.
#[utoipa::path(get, path = "/", tag = "students", responses((status = 200, description = "HTML listing", content_type = "text/html", body = String)))]
pub async fn index(State(state): State<StudentState>) -> Html<String> {
    let items = state.students.snapshot().into_iter().map(|s| {
        format!(
            "Name: {}, Age: {}, Credit points: {}, Campus: {}",
            s.name, s.age, s.credit_points, s.campus
        )
    });
    html_list("<b>Student management app (in-memory)</b>", items)
}

#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    params(
        ("campus" = Option<String>, Query, description = "Campus, case-insensitive"),
        ("name" = Option<String>, Query, description = "Name, case-insensitive"),
        ("creditPointsMin" = Option<i64>, Query, description = "Minimum credit points (inclusive)"),
    ),
    responses((status = 200, description = "Matching students in insertion order", body = [Student]))
)]
pub async fn list(
    State(state): State<StudentState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = StudentFilter::from_query(&params);
    Ok(ok(state.students.list(&filter)))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = u64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 404, description = "No student with that id", body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<StudentState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    Ok(ok(state.students.get(id)?))
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = StudentDraft,
    responses(
        (status = 201, description = "Student created with a generated id", body = Student),
        (status = 400, description = "Invalid student data", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<StudentState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let draft: StudentDraft = parse_body(body)?;
    Ok(created(state.students.create(draft)?))
}

/// Serves both PATCH and PUT: supplied fields are merged into the stored student.
#[utoipa::path(
    patch,
    path = "/students/{id}",
    tag = "students",
    params(("id" = u64, Path, description = "Student id")),
    request_body = StudentPatch,
    responses(
        (status = 200, description = "Updated student", body = Student),
        (status = 400, description = "Merged student is invalid", body = ErrorBody),
        (status = 404, description = "No student with that id", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<StudentState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let patch: StudentPatch = parse_body(body)?;
    Ok(ok(state.students.update(id, patch)?))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(("id" = u64, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "No student with that id", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<StudentState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.students.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
