//! The movie entity.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::{FieldError, ValidationError};
use crate::genre::Genre;
use crate::runtime::Runtime;
use crate::validate;

/// `YYYY-MM-DD` serde adapter for [`Date`] fields.
pub(crate) mod iso_date {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::macros::format_description;
    use time::Date;

    pub(crate) fn parse(text: &str) -> Result<Date, time::error::Parse> {
        Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
    }

    pub(crate) fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(&text)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(D::Error::custom)
    }

    pub(crate) mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        pub(crate) fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            use serde::de::Error as _;
            match Option::<String>::deserialize(deserializer)? {
                Some(text) => super::parse(&text).map(Some).map_err(D::Error::custom),
                None => Ok(None),
            }
        }
    }
}

/// Store-assigned movie identity. Never reused, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(MovieId)
    }
}

/// A movie that has passed validation but has no identity yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub directors: String,
    /// Free-form, comma-separated names.
    pub actors: String,
    #[serde(with = "iso_date")]
    pub release_date: Date,
    pub genre: Genre,
    pub runtime: Runtime,
    pub plot: Option<String>,
    pub rating: Option<Decimal>,
    pub image_url: Option<String>,
}

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub directors: String,
    pub actors: String,
    #[serde(with = "iso_date")]
    pub release_date: Date,
    pub genre: Genre,
    pub runtime: Runtime,
    pub plot: Option<String>,
    pub rating: Option<Decimal>,
    pub image_url: Option<String>,
}

impl NewMovie {
    /// Attach a store-assigned identity.
    pub fn with_id(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            directors: self.directors,
            actors: self.actors,
            release_date: self.release_date,
            genre: self.genre,
            runtime: self.runtime,
            plot: self.plot,
            rating: self.rating,
            image_url: self.image_url,
        }
    }

    /// Re-check every entity invariant against `today`.
    pub fn check(&self, today: Date) -> Result<(), ValidationError> {
        ValidationError::check(invariant_errors(
            &self.title,
            &self.directors,
            &self.actors,
            self.release_date,
            self.runtime,
            self.rating,
            today,
        ))
    }
}

impl Movie {
    /// Drop the identity, e.g. to compare a stored movie with what was inserted.
    pub fn without_id(self) -> NewMovie {
        NewMovie {
            title: self.title,
            directors: self.directors,
            actors: self.actors,
            release_date: self.release_date,
            genre: self.genre,
            runtime: self.runtime,
            plot: self.plot,
            rating: self.rating,
            image_url: self.image_url,
        }
    }

    /// Re-check every entity invariant against `today`.
    pub fn check(&self, today: Date) -> Result<(), ValidationError> {
        ValidationError::check(invariant_errors(
            &self.title,
            &self.directors,
            &self.actors,
            self.release_date,
            self.runtime,
            self.rating,
            today,
        ))
    }
}

fn invariant_errors(
    title: &str,
    directors: &str,
    actors: &str,
    release_date: Date,
    runtime: Runtime,
    rating: Option<Decimal>,
    today: Date,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    validate::check_title(title, &mut errors);
    validate::check_directors(directors, &mut errors);
    validate::check_actors(actors, &mut errors);
    validate::check_release_date(release_date, today, &mut errors);
    validate::check_runtime(runtime, &mut errors);
    validate::check_rating(rating, &mut errors);
    errors
}

/// Result ordering shared by latest-listing and search: newest release first,
/// identity ascending on equal dates.
pub fn by_release_desc(a: &Movie, b: &Movie) -> Ordering {
    b.release_date
        .cmp(&a.release_date)
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn sample(id: u64, release_date: Date) -> Movie {
        NewMovie {
            title: "Heat".to_string(),
            directors: "Michael Mann".to_string(),
            actors: "Al Pacino, Robert De Niro".to_string(),
            release_date,
            genre: Genre::Thriller,
            runtime: Runtime::from_hms(2, 50, 0),
            plot: None,
            rating: Some(Decimal::new(83, 1)),
            image_url: None,
        }
        .with_id(MovieId(id))
    }

    #[test]
    fn ordering_is_newest_first_then_id() {
        let mut movies = vec![
            sample(3, date!(1995 - 12 - 15)),
            sample(1, date!(2001 - 01 - 01)),
            sample(2, date!(1995 - 12 - 15)),
        ];
        movies.sort_by(by_release_desc);
        let ids: Vec<u64> = movies.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn with_id_then_without_id_is_identity() {
        let movie = sample(7, date!(1995 - 12 - 15));
        let plain = movie.clone().without_id();
        assert_eq!(plain.with_id(MovieId(7)), movie);
    }

    #[test]
    fn serializes_date_as_iso() {
        let movie = sample(1, date!(1995 - 12 - 15));
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["releaseDate"], "1995-12-15");
        assert_eq!(json["runtime"], "02:50:00");
        assert_eq!(json["genre"], "Thriller");
        let back: Movie = serde_json::from_value(json).unwrap();
        assert_eq!(back, movie);
    }

    #[test]
    fn movie_id_parses_from_text() {
        assert_eq!("42".parse::<MovieId>(), Ok(MovieId(42)));
        assert!("forty-two".parse::<MovieId>().is_err());
    }
}
