use std::future::Future;

use marquee_core::MovieId;
use time::macros::date;

use super::{make_movie, TestResult};
use crate::{MovieStore, StorageError};

pub(super) async fn run_error_tests<S, F, Fut>(factory: &F) -> Vec<TestResult>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let mut results = Vec::new();

    results.push(TestResult::from_result(
        "error",
        "get_nonexistent_is_none",
        get_nonexistent_is_none(factory).await,
    ));
    results.push(TestResult::from_result(
        "error",
        "replace_nonexistent_not_found",
        replace_nonexistent_not_found(factory).await,
    ));
    results.push(TestResult::from_result(
        "error",
        "replace_deleted_not_found",
        replace_deleted_not_found(factory).await,
    ));
    results.push(TestResult::from_result(
        "error",
        "delete_nonexistent_is_noop",
        delete_nonexistent_is_noop(factory).await,
    ));
    results.push(TestResult::from_result(
        "error",
        "empty_store_lists_nothing",
        empty_store_lists_nothing(factory).await,
    ));

    results
}

// ── 1. get on an empty store is Ok(None) ─────────────────────────────────────

async fn get_nonexistent_is_none<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    match s.get(MovieId(999)).await {
        Ok(None) => Ok(()),
        other => Err(format!("expected Ok(None), got {:?}", other)),
    }
}

// ── 2. replace of an unknown id is NotFound with that id ─────────────────────

async fn replace_nonexistent_not_found<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let ghost = make_movie("Ghost", date!(2001 - 01 - 01)).with_id(MovieId(77));
    match s.replace(ghost).await {
        Err(StorageError::NotFound { id }) if id == MovieId(77) => {}
        other => return Err(format!("expected NotFound {{ id: 77 }}, got {:?}", other)),
    }
    if !s.list_all().await.map_err(|e| format!("list_all: {e}"))?.is_empty() {
        return Err("failed replace created a movie".to_string());
    }
    Ok(())
}

// ── 3. replace after delete is NotFound ──────────────────────────────────────

async fn replace_deleted_not_found<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let stored = s
        .insert(make_movie("Brief", date!(2001 - 01 - 01)))
        .await
        .map_err(|e| format!("insert: {e}"))?;
    s.delete(stored.id).await.map_err(|e| format!("delete: {e}"))?;
    match s.replace(stored).await {
        Err(StorageError::NotFound { .. }) => Ok(()),
        other => Err(format!("expected NotFound, got {:?}", other)),
    }
}

// ── 4. delete of an unknown id succeeds and changes nothing ──────────────────

async fn delete_nonexistent_is_noop<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let stored = s
        .insert(make_movie("Stays", date!(2001 - 01 - 01)))
        .await
        .map_err(|e| format!("insert: {e}"))?;
    s.delete(MovieId(stored.id.0 + 100))
        .await
        .map_err(|e| format!("delete of missing id failed: {e}"))?;
    let all = s.list_all().await.map_err(|e| format!("list_all: {e}"))?;
    if all != vec![stored] {
        return Err(format!("delete of missing id changed the store: {all:?}"));
    }
    Ok(())
}

// ── 5. list operations on an empty store ─────────────────────────────────────

async fn empty_store_lists_nothing<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let all = s.list_all().await.map_err(|e| format!("list_all: {e}"))?;
    let latest = s
        .list_latest(4)
        .await
        .map_err(|e| format!("list_latest: {e}"))?;
    if !all.is_empty() || !latest.is_empty() {
        return Err(format!("expected empty lists, got {all:?} / {latest:?}"));
    }
    Ok(())
}
