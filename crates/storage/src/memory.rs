use async_trait::async_trait;
use marquee_core::{Movie, MovieId, NewMovie};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::table::MovieTable;
use crate::traits::MovieStore;

/// A `MovieStore` held entirely in process memory.
///
/// Durable only for the life of the handle; used for tests and for
/// embedding the catalog without a file.
#[derive(Debug)]
pub struct InMemoryStore {
    /// `None` once closed.
    state: RwLock<Option<MovieTable>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            state: RwLock::new(Some(MovieTable::default())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        InMemoryStore::new()
    }
}

#[async_trait]
impl MovieStore for InMemoryStore {
    async fn get(&self, id: MovieId) -> Result<Option<Movie>, StorageError> {
        let state = self.state.read().await;
        let table = state.as_ref().ok_or(StorageError::Closed)?;
        Ok(table.get(id))
    }

    async fn list_all(&self) -> Result<Vec<Movie>, StorageError> {
        let state = self.state.read().await;
        let table = state.as_ref().ok_or(StorageError::Closed)?;
        Ok(table.list_all())
    }

    async fn list_latest(&self, limit: usize) -> Result<Vec<Movie>, StorageError> {
        let state = self.state.read().await;
        let table = state.as_ref().ok_or(StorageError::Closed)?;
        Ok(table.list_latest(limit))
    }

    async fn insert(&self, movie: NewMovie) -> Result<Movie, StorageError> {
        let mut state = self.state.write().await;
        let table = state.as_mut().ok_or(StorageError::Closed)?;
        let stored = table.insert(movie)?;
        tracing::debug!(id = %stored.id, "stored movie in memory");
        Ok(stored)
    }

    async fn replace(&self, movie: Movie) -> Result<Movie, StorageError> {
        let mut state = self.state.write().await;
        let table = state.as_mut().ok_or(StorageError::Closed)?;
        let stored = table.replace(movie)?;
        tracing::debug!(id = %stored.id, "replaced movie in memory");
        Ok(stored)
    }

    async fn delete(&self, id: MovieId) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        let table = state.as_mut().ok_or(StorageError::Closed)?;
        if table.delete(id) {
            tracing::debug!(id = %id, "removed movie from memory");
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), StorageError> {
        if self.state.write().await.take().is_some() {
            tracing::debug!("closed in-memory movie store");
        }
        Ok(())
    }
}
