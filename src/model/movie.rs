//! Movie collection schema. Titles are unique (case-sensitive).

use crate::error::StoreError;
use crate::model::{eq_ignore_case, normalize_query, nullable};
use crate::store::Entity;
use crate::validation::validate_movie;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub director: String,
    pub year: i64,
}

/// Create and full-replace payload. Missing fields become empty and fail validation.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct MovieDraft {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i64>,
}

/// Merge payload for movies. `Some(None)` is an explicit `null` and clears the field.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct MoviePatch {
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub director: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<i64>)]
    pub year: Option<Option<i64>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i64>,
}

impl MovieFilter {
    /// `title` and `director` match case-insensitively, `year` exactly. A year of 0 or garbage is ignored.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let params = normalize_query(params);
        Self {
            title: params.get("title").map(|s| s.to_string()),
            director: params.get("director").map(|s| s.to_string()),
            year: params
                .get("year")
                .and_then(|s| s.trim().parse().ok())
                .filter(|&y: &i64| y != 0),
        }
    }
}

impl Entity for Movie {
    const KIND: &'static str = "Movie";

    type Draft = MovieDraft;
    type Patch = MoviePatch;
    type Filter = MovieFilter;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: MovieDraft) -> Result<Self, StoreError> {
        Ok(Movie {
            id,
            title: draft.title.unwrap_or_default(),
            director: draft.director.unwrap_or_default(),
            year: draft.year.unwrap_or(0),
        })
    }

    fn merge(&self, patch: MoviePatch) -> Result<Self, StoreError> {
        Ok(Movie {
            id: self.id,
            title: patch.title.map_or_else(|| self.title.clone(), Option::unwrap_or_default),
            director: patch.director.map_or_else(|| self.director.clone(), Option::unwrap_or_default),
            year: patch.year.map_or(self.year, Option::unwrap_or_default),
        })
    }

    fn matches(&self, filter: &MovieFilter) -> bool {
        filter.title.as_deref().map_or(true, |t| eq_ignore_case(&self.title, t))
            && filter.director.as_deref().map_or(true, |d| eq_ignore_case(&self.director, d))
            && filter.year.map_or(true, |y| self.year == y)
    }

    fn validate(&self) -> Result<(), StoreError> {
        validate_movie(self)
    }

    fn conflicts_with(&self, other: &Self) -> Option<StoreError> {
        (self.title == other.title).then(|| StoreError::Duplicate("Movie already exists".into()))
    }
}

pub fn seed() -> Vec<Movie> {
    [
        (1, "Inception", "Christopher Nolan", 2010),
        (2, "The Matrix", "The Wachowskis", 1999),
        (3, "Parasite", "Bong Joon-ho", 2019),
    ]
    .into_iter()
    .map(|(id, title, director, year)| Movie {
        id,
        title: title.into(),
        director: director.into(),
        year,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn year_zero_and_garbage_are_no_filter() {
        assert_eq!(MovieFilter::from_query(&query(&[("year", "0")])), MovieFilter::default());
        assert_eq!(MovieFilter::from_query(&query(&[("year", "nineteen")])), MovieFilter::default());
        assert_eq!(MovieFilter::from_query(&query(&[("year", "2019")])).year, Some(2019));
    }

    #[test]
    fn director_matches_whole_name_case_insensitively() {
        let matrix = &seed()[1];
        assert!(matrix.matches(&MovieFilter::from_query(&query(&[("director", "the wachowskis")]))));
        assert!(!matrix.matches(&MovieFilter::from_query(&query(&[("director", "wachowski")]))));
    }

    #[test]
    fn title_conflict_is_case_sensitive() {
        let movies = seed();
        let copy = Movie { id: 9, ..movies[0].clone() };
        assert!(copy.conflicts_with(&movies[0]).is_some());
        let lower = Movie { title: "inception".into(), ..copy };
        assert!(lower.conflicts_with(&movies[0]).is_none());
    }

    #[test]
    fn merge_keeps_unsupplied_fields() {
        let parasite = &seed()[2];
        let merged = parasite
            .merge(MoviePatch { year: Some(Some(2020)), ..Default::default() })
            .unwrap();
        assert_eq!(merged.title, "Parasite");
        assert_eq!(merged.year, 2020);

        let cleared: MoviePatch = serde_json::from_str(r#"{"director": null}"#).unwrap();
        let merged = parasite.merge(cleared).unwrap();
        assert_eq!(merged.director, "");
        assert!(merged.validate().is_err());
    }
}
