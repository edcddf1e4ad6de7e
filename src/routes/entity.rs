//! Entity CRUD routes. `GET /` lists every record as HTML.

use crate::handlers::{movies, students};
use crate::state::{MovieState, StudentState};
use axum::{routing::get, Router};

/// PATCH and PUT both merge into the stored student.
pub fn student_routes(state: StudentState) -> Router {
    Router::new()
        .route("/", get(students::index))
        .route("/students", get(students::list).post(students::create))
        .route(
            "/students/:id",
            get(students::read)
                .patch(students::update)
                .put(students::update)
                .delete(students::delete),
        )
        .with_state(state)
}

pub fn movie_routes(state: MovieState) -> Router {
    Router::new()
        .route("/", get(movies::index))
        .route("/movies", get(movies::list).post(movies::create))
        .route(
            "/movies/:id",
            get(movies::read).put(movies::replace).delete(movies::delete),
        )
        .with_state(state)
}
