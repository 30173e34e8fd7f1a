//! Sparse partial updates.
//!
//! A [`MoviePatch`] carries an independent optional value per mutable field.
//! [`merge`] overlays it onto an existing movie field by field:
//!
//! | field | overwritten when |
//! |---|---|
//! | `title`, `directors` | present and not blank |
//! | `actors` | present and not empty |
//! | `releaseDate` | present |
//! | `genre` | present, not blank, and names a [`Genre`] |
//! | `runtime` | present, not blank, and parses as `HH:MM:SS` |
//! | `plot`, `imageUrl` | present (empty clears) |
//! | `rating` | present |
//!
//! A genre or runtime that is supplied but does not parse leaves the existing
//! value in place and is reported in [`MergeOutcome::ignored`].
//!
//! The merge does not enforce the entity invariants; callers re-check the
//! result with [`Movie::check`] before persisting it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::genre::Genre;
use crate::movie::{iso_date, Movie};
use crate::runtime::Runtime;
use crate::validate::optional_text;

/// Requested field changes. Identity is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MoviePatch {
    pub title: Option<String>,
    pub directors: Option<String>,
    pub actors: Option<String>,
    #[serde(with = "iso_date::option")]
    pub release_date: Option<Date>,
    pub genre: Option<String>,
    pub runtime: Option<String>,
    pub plot: Option<String>,
    pub rating: Option<Decimal>,
    pub image_url: Option<String>,
}

impl MoviePatch {
    /// True when no field is supplied at all.
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }
}

/// A supplied value the merge could not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredField {
    pub field: &'static str,
    pub value: String,
}

/// The merged movie plus whatever the merge skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub movie: Movie,
    pub ignored: Vec<IgnoredField>,
}

/// Overlay `patch` onto `existing`. The identity is carried over unchanged.
pub fn merge(existing: Movie, patch: MoviePatch) -> MergeOutcome {
    let mut movie = existing;
    let mut ignored = Vec::new();

    if let Some(title) = patch.title.filter(|t| !t.trim().is_empty()) {
        movie.title = title;
    }
    if let Some(directors) = patch.directors.filter(|d| !d.trim().is_empty()) {
        movie.directors = directors;
    }
    if let Some(actors) = patch.actors.filter(|a| !a.is_empty()) {
        movie.actors = actors;
    }
    if let Some(release_date) = patch.release_date {
        movie.release_date = release_date;
    }
    if let Some(text) = patch.genre.filter(|g| !g.trim().is_empty()) {
        match Genre::parse(&text) {
            Ok(genre) => movie.genre = genre,
            Err(_) => ignored.push(IgnoredField {
                field: "genre",
                value: text,
            }),
        }
    }
    if let Some(text) = patch.runtime.filter(|r| !r.trim().is_empty()) {
        match Runtime::parse(&text) {
            Ok(runtime) => movie.runtime = runtime,
            Err(_) => ignored.push(IgnoredField {
                field: "runtime",
                value: text,
            }),
        }
    }
    if patch.plot.is_some() {
        movie.plot = optional_text(patch.plot);
    }
    if patch.rating.is_some() {
        movie.rating = patch.rating;
    }
    if patch.image_url.is_some() {
        movie.image_url = optional_text(patch.image_url);
    }

    MergeOutcome { movie, ignored }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::{MovieId, NewMovie};
    use time::macros::date;

    fn existing() -> Movie {
        NewMovie {
            title: "Old Title".to_string(),
            directors: "Old Director".to_string(),
            actors: "Actor One, Actor Two".to_string(),
            release_date: date!(2010 - 05 - 01),
            genre: Genre::Drama,
            runtime: Runtime::from_hms(1, 45, 0),
            plot: Some("A plot.".to_string()),
            rating: Some(Decimal::new(75, 1)),
            image_url: Some("https://img.example/poster.jpg".to_string()),
        }
        .with_id(MovieId(9))
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let out = merge(existing(), MoviePatch::default());
        assert_eq!(out.movie, existing());
        assert!(out.ignored.is_empty());
        assert!(MoviePatch::default().is_empty());
    }

    #[test]
    fn title_only_changes_only_title() {
        let patch = MoviePatch {
            title: Some("New Title".to_string()),
            ..Default::default()
        };
        let out = merge(existing(), patch);
        let expected = Movie {
            title: "New Title".to_string(),
            ..existing()
        };
        assert_eq!(out.movie, expected);
    }

    #[test]
    fn blank_title_and_directors_are_absent() {
        let patch = MoviePatch {
            title: Some("  ".to_string()),
            directors: Some(String::new()),
            actors: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(merge(existing(), patch).movie, existing());
    }

    #[test]
    fn whitespace_actors_still_overwrite() {
        // only the empty string counts as absent for actors
        let patch = MoviePatch {
            actors: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(merge(existing(), patch).movie.actors, " ");
    }

    #[test]
    fn unknown_genre_is_ignored_and_reported() {
        let patch = MoviePatch {
            genre: Some("NotAGenre".to_string()),
            ..Default::default()
        };
        let out = merge(existing(), patch);
        assert_eq!(out.movie.genre, Genre::Drama);
        assert_eq!(
            out.ignored,
            vec![IgnoredField {
                field: "genre",
                value: "NotAGenre".to_string()
            }]
        );
    }

    #[test]
    fn genre_parses_case_insensitively() {
        let patch = MoviePatch {
            genre: Some("horror".to_string()),
            ..Default::default()
        };
        assert_eq!(merge(existing(), patch).movie.genre, Genre::Horror);
    }

    #[test]
    fn malformed_runtime_is_ignored() {
        let patch = MoviePatch {
            runtime: Some("ninety minutes".to_string()),
            ..Default::default()
        };
        let out = merge(existing(), patch);
        assert_eq!(out.movie.runtime, Runtime::from_hms(1, 45, 0));
        assert_eq!(out.ignored.len(), 1);
        assert_eq!(out.ignored[0].field, "runtime");

        let patch = MoviePatch {
            runtime: Some("02:05:30".to_string()),
            ..Default::default()
        };
        assert_eq!(
            merge(existing(), patch).movie.runtime,
            Runtime::from_hms(2, 5, 30)
        );
    }

    #[test]
    fn empty_plot_and_image_url_clear() {
        let patch = MoviePatch {
            plot: Some(String::new()),
            image_url: Some(String::new()),
            ..Default::default()
        };
        let out = merge(existing(), patch);
        assert_eq!(out.movie.plot, None);
        assert_eq!(out.movie.image_url, None);
    }

    #[test]
    fn rating_and_date_overwrite_when_present() {
        let patch = MoviePatch {
            rating: Some(Decimal::new(10, 0)),
            release_date: Some(date!(2010 - 05 - 01)),
            ..Default::default()
        };
        let out = merge(existing(), patch);
        assert_eq!(out.movie.rating, Some(Decimal::new(10, 0)));
        assert_eq!(out.movie.release_date, date!(2010 - 05 - 01));
    }

    #[test]
    fn merge_does_not_bound_check_rating() {
        let patch = MoviePatch {
            rating: Some(Decimal::new(11, 0)),
            ..Default::default()
        };
        let out = merge(existing(), patch);
        assert_eq!(out.movie.rating, Some(Decimal::new(11, 0)));
        assert!(out.movie.check(date!(2026 - 10 - 16)).is_err());
    }

    #[test]
    fn patch_json_absent_fields_are_none() {
        let patch: MoviePatch =
            serde_json::from_value(serde_json::json!({"title": "T", "releaseDate": "1999-03-31"}))
                .unwrap();
        assert_eq!(patch.title.as_deref(), Some("T"));
        assert_eq!(patch.release_date, Some(date!(1999 - 03 - 31)));
        assert_eq!(patch.genre, None);
        assert_eq!(patch.rating, None);
    }
}
