use async_trait::async_trait;
use marquee_core::{Movie, MovieId, NewMovie};

use crate::error::StorageError;

/// The storage trait for movie catalog backends.
///
/// A `MovieStore` provides durable keyed storage for validated movies. It
/// does not validate: callers hand it movies that already satisfy the
/// entity invariants.
///
/// ## Visibility
///
/// Every call persists before it returns and is atomically visible to every
/// later call. A `get` racing a `replace` observes the whole old or the whole
/// new movie, never a mix. Concurrent replaces of one identity are
/// last-write-wins; there is no conflict detection.
///
/// ## Identity
///
/// `insert` assigns identities from a monotonically increasing counter.
/// An identity freed by `delete` is never handed out again.
///
/// ## Lifecycle
///
/// Backends are opened by their constructors and shut with [`close`]. Every
/// operation on a closed store returns `Err(StorageError::Closed)`.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync + 'static` so a handle can be shared
/// behind `Arc` across async tasks.
///
/// [`close`]: MovieStore::close
#[async_trait]
pub trait MovieStore: Send + Sync + 'static {
    /// Read a movie by identity. `Ok(None)` when absent.
    async fn get(&self, id: MovieId) -> Result<Option<Movie>, StorageError>;

    /// Every stored movie, identity ascending.
    async fn list_all(&self) -> Result<Vec<Movie>, StorageError>;

    /// At most `limit` movies, newest release first, identity ascending on
    /// equal release dates.
    async fn list_latest(&self, limit: usize) -> Result<Vec<Movie>, StorageError>;

    /// Store a new movie and return it with its assigned identity.
    async fn insert(&self, movie: NewMovie) -> Result<Movie, StorageError>;

    /// Overwrite the movie with `movie.id`.
    ///
    /// Returns `Err(StorageError::NotFound)` if no such movie currently exists.
    async fn replace(&self, movie: Movie) -> Result<Movie, StorageError>;

    /// Remove a movie. Removing an absent identity is a no-op.
    async fn delete(&self, id: MovieId) -> Result<(), StorageError>;

    /// Shut the store. Closing an already closed store is a no-op.
    async fn close(&self) -> Result<(), StorageError>;
}
