//! The in-process movie table both backends keep.

use std::collections::BTreeMap;

use marquee_core::{by_release_desc, Movie, MovieId, NewMovie};

use crate::error::StorageError;

#[derive(Debug, Clone)]
pub(crate) struct MovieTable {
    next_id: u64,
    movies: BTreeMap<MovieId, Movie>,
}

impl Default for MovieTable {
    fn default() -> Self {
        MovieTable {
            next_id: 1,
            movies: BTreeMap::new(),
        }
    }
}

impl MovieTable {
    /// Rebuild a table from persisted parts.
    ///
    /// Fails with a message if identities repeat or `next_id` would hand out
    /// an identity already in use.
    pub(crate) fn from_parts(next_id: u64, movies: Vec<Movie>) -> Result<MovieTable, String> {
        let mut table = MovieTable {
            next_id,
            movies: BTreeMap::new(),
        };
        for movie in movies {
            if movie.id.0 >= next_id {
                return Err(format!(
                    "movie id {} is not below next id {}",
                    movie.id, next_id
                ));
            }
            let id = movie.id;
            if table.movies.insert(id, movie).is_some() {
                return Err(format!("duplicate movie id {}", id));
            }
        }
        Ok(table)
    }

    pub(crate) fn next_id(&self) -> u64 {
        self.next_id
    }

    pub(crate) fn len(&self) -> usize {
        self.movies.len()
    }

    pub(crate) fn get(&self, id: MovieId) -> Option<Movie> {
        self.movies.get(&id).cloned()
    }

    pub(crate) fn list_all(&self) -> Vec<Movie> {
        self.movies.values().cloned().collect()
    }

    pub(crate) fn list_latest(&self, limit: usize) -> Vec<Movie> {
        let mut movies: Vec<&Movie> = self.movies.values().collect();
        movies.sort_by(|a, b| by_release_desc(a, b));
        movies.into_iter().take(limit).cloned().collect()
    }

    pub(crate) fn insert(&mut self, movie: NewMovie) -> Result<Movie, StorageError> {
        let id = MovieId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(StorageError::IdsExhausted)?;
        let stored = movie.with_id(id);
        self.movies.insert(id, stored.clone());
        Ok(stored)
    }

    pub(crate) fn replace(&mut self, movie: Movie) -> Result<Movie, StorageError> {
        match self.movies.get_mut(&movie.id) {
            Some(slot) => {
                *slot = movie.clone();
                Ok(movie)
            }
            None => Err(StorageError::NotFound { id: movie.id }),
        }
    }

    /// Whether a movie was actually removed.
    pub(crate) fn delete(&mut self, id: MovieId) -> bool {
        self.movies.remove(&id).is_some()
    }
}
