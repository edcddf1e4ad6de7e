//! Movie collection handlers: list/filter, read, create, full-replace, delete, HTML index.

use crate::error::{AppError, ErrorBody};
use crate::handlers::{parse_body, parse_id};
use crate::model::{Movie, MovieDraft, MovieFilter};
use crate::response::{created, html_list, message, ok, MessageBody};
use crate::state::MovieState;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

#[utoipa::path(get, path = "/", tag = "movies", responses((status = 200, description = "HTML listing", content_type = "text/html", body = String)))]
pub async fn index(State(state): State<MovieState>) -> Html<String> {
    let items = state
        .movies
        .snapshot()
        .into_iter()
        .map(|m| format!("{} by {} ({})", m.title, m.director, m.year));
    html_list("<h2>Movies</h2>", items)
}

#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    params(
        ("title" = Option<String>, Query, description = "Title, case-insensitive"),
        ("director" = Option<String>, Query, description = "Director, case-insensitive"),
        ("year" = Option<i64>, Query, description = "Release year, exact"),
    ),
    responses((status = 200, description = "Matching movies in insertion order", body = [Movie]))
)]
pub async fn list(
    State(state): State<MovieState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = MovieFilter::from_query(&params);
    Ok(ok(state.movies.list(&filter)))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = u64, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 404, description = "Movie not found", body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<MovieState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    Ok(ok(state.movies.get(id)?))
}

#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body = MovieDraft,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Invalid input or movie already exists", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<MovieState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let draft: MovieDraft = parse_body(body)?;
    Ok(created(state.movies.create(draft)?))
}

/// Full replace: title, director and year are all taken from the body.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = u64, Path, description = "Movie id")),
    request_body = MovieDraft,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Invalid data", body = ErrorBody),
        (status = 404, description = "Movie not found", body = ErrorBody),
    )
)]
pub async fn replace(
    State(state): State<MovieState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let draft: MovieDraft = parse_body(body)?;
    Ok(ok(state.movies.replace(id, draft)?))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = u64, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie deleted", body = MessageBody),
        (status = 404, description = "Movie not found", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<MovieState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.movies.delete(id)?;
    Ok(message("Movie deleted"))
}
