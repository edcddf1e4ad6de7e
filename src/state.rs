//! Shared application state: one lock-guarded store per entity kind.

use crate::model::{movie, student, Movie, Student};
use crate::store::SharedStore;

#[derive(Clone)]
pub struct StudentState {
    pub students: SharedStore<Student>,
}

#[derive(Clone)]
pub struct MovieState {
    pub movies: SharedStore<Movie>,
}

impl StudentState {
    /// Fresh registry holding the seed records. Nothing survives a restart.
    pub fn seeded() -> Self {
        Self {
            students: SharedStore::seeded(student::seed()),
        }
    }
}

impl MovieState {
    pub fn seeded() -> Self {
        Self {
            movies: SharedStore::seeded(movie::seed()),
        }
    }
}
