//! marquee-catalog: the catalog operations a client adapter calls.
//!
//! [`Catalog`] composes a [`MovieStore`] with validation, the partial-update
//! merge and search dispatch from `marquee-core`. Every read returns
//! [`MovieView`]s; failures are [`CatalogError`]s.

mod error;

use std::sync::Arc;

use marquee_core::validate;
use marquee_core::{merge, search, MovieDraft, MovieId, MoviePatch, MovieView, SearchQuery};
use marquee_storage::{MovieStore, StorageError};
use time::Date;

pub use error::CatalogError;

/// How many movies [`Catalog::latest`] returns unless configured otherwise.
pub const DEFAULT_LATEST_COUNT: usize = 4;

/// The catalog service over a shared store handle.
pub struct Catalog<S: MovieStore> {
    store: Arc<S>,
    latest_count: usize,
    today: fn() -> Date,
}

impl<S: MovieStore> Clone for Catalog<S> {
    fn clone(&self) -> Self {
        Catalog {
            store: Arc::clone(&self.store),
            latest_count: self.latest_count,
            today: self.today,
        }
    }
}

impl<S: MovieStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Catalog::from_shared(Arc::new(store))
    }

    pub fn from_shared(store: Arc<S>) -> Self {
        Catalog {
            store,
            latest_count: DEFAULT_LATEST_COUNT,
            today: validate::today,
        }
    }

    /// Default size of the latest listing.
    pub fn with_latest_count(mut self, count: usize) -> Self {
        self.latest_count = count;
        self
    }

    /// Replace the clock used for the release-date window.
    pub fn with_clock(mut self, today: fn() -> Date) -> Self {
        self.today = today;
        self
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The configured number of most recent movies.
    pub async fn latest(&self) -> Result<Vec<MovieView>, CatalogError> {
        self.latest_n(self.latest_count).await
    }

    /// The `count` most recent movies, newest first.
    pub async fn latest_n(&self, count: usize) -> Result<Vec<MovieView>, CatalogError> {
        let movies = self.store.list_latest(count).await?;
        tracing::debug!(count, returned = movies.len(), "listed latest movies");
        Ok(movies.iter().map(MovieView::from).collect())
    }

    /// Every movie, identity ascending.
    pub async fn list(&self) -> Result<Vec<MovieView>, CatalogError> {
        let movies = self.store.list_all().await?;
        tracing::debug!(returned = movies.len(), "listed all movies");
        Ok(movies.iter().map(MovieView::from).collect())
    }

    /// Search by category. Unknown categories return everything; a blank
    /// value is an invalid `searchValue`.
    pub async fn search(
        &self,
        category: &str,
        value: &str,
    ) -> Result<Vec<MovieView>, CatalogError> {
        let query = SearchQuery::new(category, value)?;
        let hits = search(self.store.list_all().await?, &query);
        tracing::debug!(
            category = %query.category(),
            value = query.value(),
            hits = hits.len(),
            "searched movies"
        );
        Ok(hits.iter().map(MovieView::from).collect())
    }

    pub async fn get(&self, id: MovieId) -> Result<MovieView, CatalogError> {
        match self.store.get(id).await? {
            Some(movie) => {
                tracing::debug!(%id, "fetched movie");
                Ok(MovieView::from(movie))
            }
            None => Err(CatalogError::NotFound { id }),
        }
    }

    /// Validate `draft` and store it under a new identity.
    pub async fn create(&self, draft: MovieDraft) -> Result<MovieView, CatalogError> {
        let movie = draft.validate((self.today)())?;
        let stored = self.store.insert(movie).await?;
        tracing::info!(id = %stored.id, title = %stored.title, "created movie");
        Ok(MovieView::from(stored))
    }

    /// Merge `patch` into the stored movie, re-validate, and replace it.
    ///
    /// Patch fields the merge could not apply are logged and skipped; a
    /// merged movie that breaks an invariant is rejected without writing.
    pub async fn update(&self, id: MovieId, patch: MoviePatch) -> Result<MovieView, CatalogError> {
        let existing = self
            .store
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound { id })?;

        let outcome = merge(existing, patch);
        for skipped in &outcome.ignored {
            tracing::warn!(
                %id,
                field = skipped.field,
                value = %skipped.value,
                "ignored unparseable patch field"
            );
        }
        outcome.movie.check((self.today)())?;

        let stored = match self.store.replace(outcome.movie).await {
            Ok(stored) => stored,
            Err(StorageError::NotFound { id }) => return Err(CatalogError::NotFound { id }),
            Err(e) => return Err(e.into()),
        };
        tracing::info!(
            %id,
            ignored = outcome.ignored.len(),
            "updated movie"
        );
        Ok(MovieView::from(stored))
    }

    /// Remove a movie. Unlike the store, a missing identity is `NotFound`.
    pub async fn delete(&self, id: MovieId) -> Result<(), CatalogError> {
        if self.store.get(id).await?.is_none() {
            return Err(CatalogError::NotFound { id });
        }
        self.store.delete(id).await?;
        tracing::info!(%id, "deleted movie");
        Ok(())
    }

    /// Close the underlying store.
    pub async fn close(&self) -> Result<(), CatalogError> {
        self.store.close().await?;
        Ok(())
    }
}
