//! Search dispatch: a `(category, value)` pair becomes a filter and an order.
//!
//! | category | match |
//! |---|---|
//! | `title` | case-insensitive substring of the title |
//! | `director` | case-insensitive substring of the directors |
//! | `genre` | case-insensitive substring of the genre name |
//! | `year` | release date as `YYYY-MM-DD` starts with the value |
//! | anything else | every movie matches |
//!
//! Results are always ordered by [`by_release_desc`].

use std::fmt;

use crate::error::ValidationError;
use crate::movie::{by_release_desc, Movie};

/// Which field a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCategory {
    Title,
    Director,
    Genre,
    Year,
    /// Unrecognized category name; applies no filter.
    Any,
}

impl SearchCategory {
    /// Case-insensitive; never fails, unknown names map to [`SearchCategory::Any`].
    pub fn parse(text: &str) -> SearchCategory {
        match text.trim().to_lowercase().as_str() {
            "title" => SearchCategory::Title,
            "director" => SearchCategory::Director,
            "genre" => SearchCategory::Genre,
            "year" => SearchCategory::Year,
            _ => SearchCategory::Any,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchCategory::Title => "title",
            SearchCategory::Director => "director",
            SearchCategory::Genre => "genre",
            SearchCategory::Year => "year",
            SearchCategory::Any => "any",
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    category: SearchCategory,
    value: String,
    folded: String,
}

impl SearchQuery {
    /// Build a query. A blank `value` is rejected as an invalid `searchValue`.
    pub fn new(category: &str, value: impl Into<String>) -> Result<SearchQuery, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::single(
                "searchValue",
                "Search value is required",
            ));
        }
        Ok(SearchQuery {
            category: SearchCategory::parse(category),
            folded: value.to_lowercase(),
            value,
        })
    }

    pub fn category(&self) -> SearchCategory {
        self.category
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The filter predicate. Pure: depends only on the query and the movie.
    pub fn matches(&self, movie: &Movie) -> bool {
        match self.category {
            SearchCategory::Title => movie.title.to_lowercase().contains(&self.folded),
            SearchCategory::Director => movie.directors.to_lowercase().contains(&self.folded),
            SearchCategory::Genre => movie.genre.name().to_lowercase().contains(&self.folded),
            SearchCategory::Year => movie.release_date.to_string().starts_with(&self.value),
            SearchCategory::Any => true,
        }
    }
}

/// Filter `movies` by `query` and order the survivors newest first.
pub fn search<I>(movies: I, query: &SearchQuery) -> Vec<Movie>
where
    I: IntoIterator<Item = Movie>,
{
    let mut hits: Vec<Movie> = movies.into_iter().filter(|m| query.matches(m)).collect();
    hits.sort_by(by_release_desc);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::Genre;
    use crate::movie::{MovieId, NewMovie};
    use crate::runtime::Runtime;
    use time::macros::date;
    use time::Date;

    fn movie(id: u64, title: &str, directors: &str, genre: Genre, release_date: Date) -> Movie {
        NewMovie {
            title: title.to_string(),
            directors: directors.to_string(),
            actors: "Someone".to_string(),
            release_date,
            genre,
            runtime: Runtime::from_hms(2, 0, 0),
            plot: None,
            rating: None,
            image_url: None,
        }
        .with_id(MovieId(id))
    }

    fn catalog() -> Vec<Movie> {
        vec![
            movie(1, "The Dark Knight", "Christopher Nolan", Genre::Action, date!(2008 - 07 - 18)),
            movie(2, "Parasite", "Bong Joon-ho", Genre::Drama, date!(2019 - 05 - 30)),
            movie(3, "Moonlight", "Barry Jenkins", Genre::Drama, date!(2016 - 10 - 21)),
            movie(4, "Dunkirk", "Christopher Nolan", Genre::Thriller, date!(2017 - 07 - 21)),
        ]
    }

    fn ids(movies: &[Movie]) -> Vec<u64> {
        movies.iter().map(|m| m.id.0).collect()
    }

    fn run(category: &str, value: &str) -> Vec<u64> {
        let q = SearchQuery::new(category, value).unwrap();
        ids(&search(catalog(), &q))
    }

    #[test]
    fn title_substring_is_case_insensitive() {
        assert_eq!(run("title", "Dark"), vec![1]);
        assert_eq!(run("title", "dark"), vec![1]);
        assert_eq!(run("title", "zzz"), Vec::<u64>::new());
    }

    #[test]
    fn director_matches_newest_first() {
        assert_eq!(run("director", "nolan"), vec![4, 1]);
    }

    #[test]
    fn genre_matches_by_name() {
        assert_eq!(run("genre", "Drama"), vec![2, 3]);
        assert_eq!(run("genre", "thrill"), vec![4]);
    }

    #[test]
    fn year_is_a_date_prefix() {
        assert_eq!(run("year", "2017"), vec![4]);
        assert_eq!(run("year", "201"), vec![2, 4, 3]);
        assert_eq!(run("year", "2019-05"), vec![2]);
        assert_eq!(run("year", "05"), Vec::<u64>::new());
    }

    #[test]
    fn unknown_category_returns_everything_ordered() {
        assert_eq!(run("rating", "9"), vec![2, 4, 3, 1]);
    }

    #[test]
    fn category_name_is_case_insensitive() {
        assert_eq!(SearchCategory::parse("TITLE"), SearchCategory::Title);
        assert_eq!(SearchCategory::parse("Year"), SearchCategory::Year);
        assert_eq!(SearchCategory::parse("actors"), SearchCategory::Any);
    }

    #[test]
    fn blank_value_is_rejected() {
        let err = SearchQuery::new("title", "  ").unwrap_err();
        assert!(err.has_field("searchValue"));
        assert!(SearchQuery::new("title", "").is_err());
    }

    #[test]
    fn same_input_same_result() {
        let q = SearchQuery::new("genre", "a").unwrap();
        assert_eq!(search(catalog(), &q), search(catalog(), &q));
    }
}
