//! In-memory CRUD demo services: a student registry and a movie collection.

pub mod case;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{load_from_env, ServerConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Movie, Student};
pub use server::{init_tracing, movies_app, serve, students_app};
pub use state::{MovieState, StudentState};
pub use store::{Entity, EntityStore, SharedStore};
