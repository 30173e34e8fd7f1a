//! The external representation of a movie.
//!
//! Every read operation renders [`MovieView`], so clients see one fixed
//! field list regardless of how a movie was fetched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::movie::Movie;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieView {
    pub id: u64,
    pub title: String,
    pub directors: String,
    pub actors: String,
    /// `YYYY-MM-DD`
    pub release_date: String,
    /// Genre name, e.g. `"SciFi"`.
    pub genre: String,
    /// `HH:MM:SS`
    pub runtime: String,
    pub plot: Option<String>,
    pub rating: Option<Decimal>,
    pub image_url: Option<String>,
}

impl From<&Movie> for MovieView {
    fn from(movie: &Movie) -> Self {
        MovieView {
            id: movie.id.0,
            title: movie.title.clone(),
            directors: movie.directors.clone(),
            actors: movie.actors.clone(),
            release_date: movie.release_date.to_string(),
            genre: movie.genre.name().to_string(),
            runtime: movie.runtime.to_string(),
            plot: movie.plot.clone(),
            rating: movie.rating,
            image_url: movie.image_url.clone(),
        }
    }
}

impl From<Movie> for MovieView {
    fn from(movie: Movie) -> Self {
        MovieView::from(&movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::Genre;
    use crate::movie::{MovieId, NewMovie};
    use crate::runtime::Runtime;
    use time::macros::date;

    #[test]
    fn renders_fixed_field_list() {
        let movie = NewMovie {
            title: "Alien".to_string(),
            directors: "Ridley Scott".to_string(),
            actors: "Sigourney Weaver".to_string(),
            release_date: date!(1979 - 05 - 25),
            genre: Genre::SciFi,
            runtime: Runtime::from_hms(1, 57, 0),
            plot: None,
            rating: Some(Decimal::new(85, 1)),
            image_url: Some("https://img.example/alien.jpg".to_string()),
        }
        .with_id(MovieId(3));

        let json = serde_json::to_value(MovieView::from(&movie)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "title": "Alien",
                "directors": "Ridley Scott",
                "actors": "Sigourney Weaver",
                "releaseDate": "1979-05-25",
                "genre": "SciFi",
                "runtime": "01:57:00",
                "plot": null,
                "rating": "8.5",
                "imageUrl": "https://img.example/alien.jpg"
            })
        );
    }
}
