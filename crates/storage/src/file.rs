use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use marquee_core::{Movie, MovieId, NewMovie};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::table::MovieTable;
use crate::traits::MovieStore;

/// On-disk layout of a store file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    next_id: u64,
    movies: Vec<Movie>,
}

/// A `MovieStore` persisted to a single JSON file.
///
/// Every mutation writes the whole table to a temporary file next to the
/// target and renames it into place, so a crash leaves either the old or the
/// new image on disk. The write lock is held across the rename; the in-memory
/// table is only updated once the file is durable.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// `None` once closed.
    state: RwLock<Option<MovieTable>>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing or empty file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let table = load(&path)?;
        tracing::debug!(
            path = %path.display(),
            movies = table.len(),
            next_id = table.next_id(),
            "opened movie store"
        );
        Ok(JsonFileStore {
            path,
            state: RwLock::new(Some(table)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `mutate` to a copy of the table, persist the copy, then commit it.
    async fn mutate<T>(
        &self,
        mutate: impl FnOnce(&mut MovieTable) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut state = self.state.write().await;
        let table = state.as_mut().ok_or(StorageError::Closed)?;
        let mut next = table.clone();
        let out = mutate(&mut next)?;
        *table = self.persist(next).await?;
        Ok(out)
    }

    /// Write `table` to disk off the async workers and hand it back once durable.
    ///
    /// Callers hold the write guard across the await, so writes never interleave.
    async fn persist(&self, table: MovieTable) -> Result<MovieTable, StorageError> {
        let path = self.path.clone();
        let table = tokio::task::spawn_blocking(move || save(&path, &table).map(|()| table))
            .await
            .map_err(|e| io_error(&self.path, io::Error::other(e)))??;
        tracing::debug!(
            path = %self.path.display(),
            movies = table.len(),
            next_id = table.next_id(),
            "persisted movie store"
        );
        Ok(table)
    }
}

fn io_error(path: &Path, source: io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn load(path: &Path) -> Result<MovieTable, StorageError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(MovieTable::default()),
        Err(e) => return Err(io_error(path, e)),
    };
    if text.trim().is_empty() {
        return Ok(MovieTable::default());
    }
    let file: StoreFile = serde_json::from_str(&text).map_err(|e| StorageError::Corrupt {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    MovieTable::from_parts(file.next_id, file.movies).map_err(|message| StorageError::Corrupt {
        path: path.to_path_buf(),
        message,
    })
}

fn save(path: &Path, table: &MovieTable) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;

    let file = StoreFile {
        next_id: table.next_id(),
        movies: table.list_all(),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| io_error(dir, e))?;
    serde_json::to_writer_pretty(tmp.as_file_mut(), &file)
        .map_err(|e| io_error(tmp.path(), e.into()))?;
    tmp.as_file_mut()
        .write_all(b"\n")
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| io_error(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}

#[async_trait]
impl MovieStore for JsonFileStore {
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
        self.mutate(|table| table.insert(movie)).await
    }

    async fn replace(&self, movie: Movie) -> Result<Movie, StorageError> {
        self.mutate(|table| table.replace(movie)).await
    }

    async fn delete(&self, id: MovieId) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        let table = state.as_mut().ok_or(StorageError::Closed)?;
        if table.get(id).is_none() {
            return Ok(());
        }
        let mut next = table.clone();
        next.delete(id);
        *table = self.persist(next).await?;
        Ok(())
    }

    async fn close(&self) -> Result<(), StorageError> {
        if self.state.write().await.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed movie store");
        }
        Ok(())
    }
}
