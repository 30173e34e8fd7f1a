//! Create-payload validation and the field rules shared with re-validation.
//!
//! [`MovieDraft`] is what a client sends to create a movie: required text,
//! genre and runtime still as raw strings. [`MovieDraft::validate`] checks
//! every field, reports all failures together, and yields a typed
//! [`NewMovie`]. The `check_*` helpers are the same rules applied to an
//! already-typed movie (see [`crate::Movie::check`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::macros::date;
use time::{Date, Month, OffsetDateTime};

use crate::error::{FieldError, ValidationError};
use crate::genre::Genre;
use crate::movie::{iso_date, NewMovie};
use crate::runtime::Runtime;

pub const TITLE_MAX_CHARS: usize = 200;
pub const DIRECTORS_MAX_CHARS: usize = 100;
pub const EARLIEST_RELEASE: Date = date!(1900 - 01 - 01);
/// How far past today a release date may lie.
pub const RELEASE_WINDOW_YEARS: i32 = 10;

/// Today's date (UTC).
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// The latest acceptable release date for `today`: same day ten years on,
/// Feb 28 when today is Feb 29.
pub fn latest_release(today: Date) -> Date {
    let year = today.year() + RELEASE_WINDOW_YEARS;
    today
        .replace_year(year)
        .or_else(|_| Date::from_calendar_date(year, Month::February, 28))
        .unwrap_or(Date::MAX)
}

pub fn rating_in_bounds(rating: Decimal) -> bool {
    rating >= Decimal::ZERO && rating <= Decimal::from(10)
}

/// Raw create payload.
///
/// Missing JSON fields deserialize to empty values so that validation, not
/// deserialization, reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    pub directors: String,
    pub actors: String,
    #[serde(with = "iso_date::option")]
    pub release_date: Option<Date>,
    pub genre: String,
    pub runtime: String,
    pub plot: Option<String>,
    pub rating: Option<Decimal>,
    pub image_url: Option<String>,
}

impl MovieDraft {
    /// Validate every field against `today` and build the typed movie.
    pub fn validate(self, today: Date) -> Result<NewMovie, ValidationError> {
        let mut errors = Vec::new();

        check_title(&self.title, &mut errors);
        check_directors(&self.directors, &mut errors);
        check_actors(&self.actors, &mut errors);

        match self.release_date {
            Some(d) => check_release_date(d, today, &mut errors),
            None => errors.push(FieldError::new("releaseDate", "Release date is required")),
        }

        let runtime = if self.runtime.trim().is_empty() {
            errors.push(FieldError::new("runtime", "Runtime is required"));
            None
        } else {
            match Runtime::parse(&self.runtime) {
                Ok(r) => {
                    check_runtime(r, &mut errors);
                    Some(r)
                }
                Err(_) => {
                    errors.push(FieldError::new("runtime", "Runtime must be in HH:mm:ss format"));
                    None
                }
            }
        };

        let genre = if self.genre.trim().is_empty() {
            errors.push(FieldError::new("genre", "Genre is required"));
            None
        } else {
            match Genre::parse(&self.genre) {
                Ok(g) => Some(g),
                Err(_) => {
                    errors.push(FieldError::new("genre", "Invalid genre"));
                    None
                }
            }
        };

        check_rating(self.rating, &mut errors);

        match (self.release_date, genre, runtime) {
            (Some(release_date), Some(genre), Some(runtime)) if errors.is_empty() => Ok(NewMovie {
                title: self.title,
                directors: self.directors,
                actors: self.actors,
                release_date,
                genre,
                runtime,
                plot: optional_text(self.plot),
                rating: self.rating,
                image_url: optional_text(self.image_url),
            }),
            _ => Err(ValidationError { errors }),
        }
    }
}

/// Empty optional text is stored as absent.
pub(crate) fn optional_text(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}

// ── Field rules ──────────────────────────────────────────────────────

pub(crate) fn check_title(title: &str, errors: &mut Vec<FieldError>) {
    if title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.push(FieldError::new(
            "title",
            format!("Title cannot exceed {} characters", TITLE_MAX_CHARS),
        ));
    }
}

pub(crate) fn check_directors(directors: &str, errors: &mut Vec<FieldError>) {
    if directors.trim().is_empty() {
        errors.push(FieldError::new("directors", "Directors is required"));
    } else if directors.chars().count() > DIRECTORS_MAX_CHARS {
        errors.push(FieldError::new(
            "directors",
            format!("Directors cannot exceed {} characters", DIRECTORS_MAX_CHARS),
        ));
    }
}

pub(crate) fn check_actors(actors: &str, errors: &mut Vec<FieldError>) {
    if actors.trim().is_empty() {
        errors.push(FieldError::new("actors", "At least one actor is required"));
    }
}

pub(crate) fn check_release_date(release_date: Date, today: Date, errors: &mut Vec<FieldError>) {
    if release_date < EARLIEST_RELEASE || release_date > latest_release(today) {
        errors.push(FieldError::new(
            "releaseDate",
            "Release date must be between 1900 and 10 years from today",
        ));
    }
}

pub(crate) fn check_runtime(runtime: Runtime, errors: &mut Vec<FieldError>) {
    if !runtime.is_positive() {
        errors.push(FieldError::new("runtime", "Runtime must be positive"));
    }
}

pub(crate) fn check_rating(rating: Option<Decimal>, errors: &mut Vec<FieldError>) {
    if let Some(r) = rating {
        if !rating_in_bounds(r) {
            errors.push(FieldError::new("rating", "Rating must be between 0 and 10"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const TODAY: Date = date!(2026 - 10 - 16);

    fn draft() -> MovieDraft {
        MovieDraft {
            title: "The Dark Knight".to_string(),
            directors: "Christopher Nolan".to_string(),
            actors: "Christian Bale, Heath Ledger".to_string(),
            release_date: Some(date!(2008 - 07 - 18)),
            genre: "Action".to_string(),
            runtime: "02:32:00".to_string(),
            plot: Some("Batman faces the Joker.".to_string()),
            rating: Some(Decimal::from_str("9.0").unwrap()),
            image_url: None,
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn valid_draft_builds_typed_movie() {
        let movie = draft().validate(TODAY).unwrap();
        assert_eq!(movie.genre, Genre::Action);
        assert_eq!(movie.runtime, Runtime::from_hms(2, 32, 0));
        assert_eq!(movie.release_date, date!(2008 - 07 - 18));
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let err = MovieDraft::default().validate(TODAY).unwrap_err();
        for field in ["title", "directors", "actors", "releaseDate", "genre", "runtime"] {
            assert!(err.has_field(field), "missing error for {field}: {err}");
        }
        assert!(!err.has_field("rating"));
    }

    #[test]
    fn blank_title_is_required_error() {
        let err = MovieDraft {
            title: "   ".to_string(),
            ..draft()
        }
        .validate(TODAY)
        .unwrap_err();
        assert_eq!(err.errors, vec![FieldError::new("title", "Title is required")]);
    }

    #[test]
    fn length_limits_count_chars() {
        let ok = MovieDraft {
            title: "é".repeat(200),
            directors: "d".repeat(100),
            ..draft()
        };
        assert!(ok.validate(TODAY).is_ok());

        let err = MovieDraft {
            title: "t".repeat(201),
            directors: "d".repeat(101),
            ..draft()
        }
        .validate(TODAY)
        .unwrap_err();
        assert!(err.has_field("title"));
        assert!(err.has_field("directors"));
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for good in ["0", "10", "10.0", "5.5"] {
            let d = MovieDraft {
                rating: Some(dec(good)),
                ..draft()
            };
            assert!(d.validate(TODAY).is_ok(), "rejected {good}");
        }
        for bad in ["-0.1", "10.1"] {
            let err = MovieDraft {
                rating: Some(dec(bad)),
                ..draft()
            }
            .validate(TODAY)
            .unwrap_err();
            assert!(err.has_field("rating"), "accepted {bad}");
        }
    }

    #[test]
    fn release_date_window() {
        let at = |d: Date| MovieDraft {
            release_date: Some(d),
            ..draft()
        };
        assert!(at(date!(1900 - 01 - 01)).validate(TODAY).is_ok());
        assert!(at(date!(2036 - 10 - 16)).validate(TODAY).is_ok());
        assert!(at(date!(1899 - 12 - 31)).validate(TODAY).is_err());
        assert!(at(date!(2036 - 10 - 17)).validate(TODAY).is_err());
    }

    #[test]
    fn latest_release_on_leap_day() {
        assert_eq!(latest_release(date!(2028 - 02 - 29)), date!(2038 - 02 - 28));
        assert_eq!(latest_release(date!(2026 - 03 - 01)), date!(2036 - 03 - 01));
    }

    #[test]
    fn runtime_format_and_sign() {
        let with_runtime = |r: &str| MovieDraft {
            runtime: r.to_string(),
            ..draft()
        };
        let err = with_runtime("2h32m").validate(TODAY).unwrap_err();
        assert_eq!(
            err.errors,
            vec![FieldError::new("runtime", "Runtime must be in HH:mm:ss format")]
        );
        let err = with_runtime("00:00:00").validate(TODAY).unwrap_err();
        assert_eq!(
            err.errors,
            vec![FieldError::new("runtime", "Runtime must be positive")]
        );
    }

    #[test]
    fn genre_membership() {
        let d = MovieDraft {
            genre: "scifi".to_string(),
            ..draft()
        };
        assert_eq!(d.validate(TODAY).unwrap().genre, Genre::SciFi);

        let err = MovieDraft {
            genre: "Western".to_string(),
            ..draft()
        }
        .validate(TODAY)
        .unwrap_err();
        assert_eq!(err.errors, vec![FieldError::new("genre", "Invalid genre")]);
    }

    #[test]
    fn empty_optional_text_becomes_absent() {
        let movie = MovieDraft {
            plot: Some(String::new()),
            image_url: Some(String::new()),
            ..draft()
        }
        .validate(TODAY)
        .unwrap();
        assert_eq!(movie.plot, None);
        assert_eq!(movie.image_url, None);
    }

    #[test]
    fn draft_deserializes_from_camel_case_json() {
        let d: MovieDraft = serde_json::from_value(serde_json::json!({
            "title": "Inception",
            "directors": "Christopher Nolan",
            "actors": "Leonardo DiCaprio",
            "releaseDate": "2010-07-16",
            "genre": "SciFi",
            "runtime": "02:28:00",
            "rating": "8.8"
        }))
        .unwrap();
        assert_eq!(d.release_date, Some(date!(2010 - 07 - 16)));
        assert_eq!(d.rating, Some(dec("8.8")));
        assert!(d.validate(TODAY).is_ok());
    }
}
