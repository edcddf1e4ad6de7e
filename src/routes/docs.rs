//! OpenAPI documents served at `/api-docs/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{movies, students};
use crate::model::{Movie, MovieDraft, Student, StudentDraft, StudentPatch};
use crate::response::MessageBody;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Registry API", version = "1.0.0"),
    paths(
        students::index,
        students::list,
        students::read,
        students::create,
        students::update,
        students::delete,
    ),
    components(schemas(Student, StudentDraft, StudentPatch, ErrorBody, ErrorDetail))
)]
pub struct StudentApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Movie Collection API", version = "1.0.0"),
    paths(
        movies::index,
        movies::list,
        movies::read,
        movies::create,
        movies::replace,
        movies::delete,
    ),
    components(schemas(Movie, MovieDraft, MessageBody, ErrorBody, ErrorDetail))
)]
pub struct MovieApiDoc;

async fn openapi<A: OpenApi>() -> Json<utoipa::openapi::OpenApi> {
    Json(A::openapi())
}

pub fn docs_routes<A: OpenApi + 'static>() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi::<A>))
}
