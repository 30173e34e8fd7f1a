//! The closed set of movie genres.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A movie genre. Never an open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    SciFi,
    Thriller,
    Documentary,
}

/// Text that does not name a member of [`Genre`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid genre '{0}'")]
pub struct GenreParseError(pub String);

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::Documentary,
    ];

    /// The genre's textual name, as rendered to clients and matched by search.
    pub fn name(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "SciFi",
            Genre::Thriller => "Thriller",
            Genre::Documentary => "Documentary",
        }
    }

    /// Case-insensitive parse of a genre name; surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Genre, GenreParseError> {
        let wanted = text.trim();
        Genre::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GenreParseError(text.to_owned()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = GenreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::parse(s)
    }
}

impl TryFrom<String> for Genre {
    type Error = GenreParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Genre::parse(&value)
    }
}
