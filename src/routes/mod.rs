//! Routers for the two services, common endpoints and OpenAPI docs.

pub mod common;
pub mod docs;
pub mod entity;

pub use common::common_routes_with_ready;
pub use docs::{docs_routes, MovieApiDoc, StudentApiDoc};
pub use entity::{movie_routes, student_routes};
