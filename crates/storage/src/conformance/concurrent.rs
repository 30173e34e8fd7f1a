use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;

use time::macros::date;

use super::{make_movie, TestResult};
use crate::{MovieStore, StorageError};

/// Number of concurrent tasks to spawn in each test.
const N: usize = 10;

pub(super) async fn run_concurrent_tests<S, F, Fut>(factory: &F) -> Vec<TestResult>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let mut results = Vec::new();

    results.push(TestResult::from_result(
        "concurrent",
        "concurrent_inserts_get_unique_ids",
        concurrent_inserts_get_unique_ids(factory).await,
    ));
    results.push(TestResult::from_result(
        "concurrent",
        "concurrent_replaces_last_write_wins",
        concurrent_replaces_last_write_wins(factory).await,
    ));
    results.push(TestResult::from_result(
        "concurrent",
        "reads_during_replace_see_whole_movies",
        reads_during_replace_see_whole_movies(factory).await,
    ));

    results
}

// ── Concurrent inserts: every task gets its own identity ────────────────────

/// N tasks insert at once. All succeed, identities are pairwise distinct and
/// the store holds exactly N movies afterwards.
async fn concurrent_inserts_get_unique_ids<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let storage = Arc::new(factory().await);

    let mut handles = Vec::new();
    for i in 0..N {
        let s = storage.clone();
        handles.push(tokio::spawn(async move {
            let m = s
                .insert(make_movie(&format!("movie-{i}"), date!(2003 - 03 - 03)))
                .await?;
            Ok::<_, StorageError>(m.id)
        }));
    }

    let mut ids = BTreeSet::new();
    for (i, handle) in handles.into_iter().enumerate() {
        let id = handle
            .await
            .map_err(|e| format!("task {i} panic: {e}"))?
            .map_err(|e| format!("task {i} failed: {e}"))?;
        if !ids.insert(id) {
            return Err(format!("identity {id} handed out twice"));
        }
    }

    let all = storage
        .list_all()
        .await
        .map_err(|e| format!("list_all: {e}"))?;
    if all.len() != N {
        return Err(format!("expected {N} movies, got {}", all.len()));
    }
    Ok(())
}

// ── Concurrent replaces of one movie: last write wins ───────────────────────

/// N tasks replace the same movie with distinct titles. There is no conflict
/// detection, so all succeed and the survivor is one of the written images.
async fn concurrent_replaces_last_write_wins<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let storage = Arc::new(factory().await);
    let original = storage
        .insert(make_movie("original", date!(2003 - 03 - 03)))
        .await
        .map_err(|e| format!("insert: {e}"))?;

    let mut handles = Vec::new();
    for i in 0..N {
        let s = storage.clone();
        let mut next = original.clone();
        next.title = format!("writer-{i}");
        next.directors = format!("director-{i}");
        handles.push(tokio::spawn(async move { s.replace(next).await }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        handle
            .await
            .map_err(|e| format!("task {i} panic: {e}"))?
            .map_err(|e| format!("task {i} failed: {e}"))?;
    }

    let survivor = storage
        .get(original.id)
        .await
        .map_err(|e| format!("get: {e}"))?
        .ok_or("movie vanished after concurrent replaces")?;
    let writer = survivor
        .title
        .strip_prefix("writer-")
        .ok_or_else(|| format!("unexpected survivor title {:?}", survivor.title))?;
    if survivor.directors != format!("director-{writer}") {
        return Err(format!(
            "torn write: title {:?} with directors {:?}",
            survivor.title, survivor.directors
        ));
    }
    Ok(())
}

// ── Reads racing replaces: pre- or post-image, never a mix ──────────────────

async fn reads_during_replace_see_whole_movies<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let storage = Arc::new(factory().await);
    let mut original = make_movie("v0", date!(2003 - 03 - 03));
    original.directors = "d0".to_string();
    let original = storage
        .insert(original)
        .await
        .map_err(|e| format!("insert: {e}"))?;

    let writer = {
        let s = storage.clone();
        let base = original.clone();
        tokio::spawn(async move {
            for i in 1..=N {
                let mut next = base.clone();
                next.title = format!("v{i}");
                next.directors = format!("d{i}");
                s.replace(next).await?;
            }
            Ok::<(), StorageError>(())
        })
    };

    let mut readers = Vec::new();
    for _ in 0..N {
        let s = storage.clone();
        let id = original.id;
        readers.push(tokio::spawn(async move {
            let mut seen = Vec::new();
            for _ in 0..N {
                if let Some(m) = s.get(id).await? {
                    seen.push((m.title, m.directors));
                }
            }
            Ok::<_, StorageError>(seen)
        }));
    }

    writer
        .await
        .map_err(|e| format!("writer panic: {e}"))?
        .map_err(|e| format!("writer failed: {e}"))?;
    for (i, reader) in readers.into_iter().enumerate() {
        let seen = reader
            .await
            .map_err(|e| format!("reader {i} panic: {e}"))?
            .map_err(|e| format!("reader {i} failed: {e}"))?;
        for (title, directors) in seen {
            if title.strip_prefix('v') != directors.strip_prefix('d') {
                return Err(format!("torn read: {title:?} with {directors:?}"));
            }
        }
    }
    Ok(())
}
