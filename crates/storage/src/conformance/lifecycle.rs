use std::future::Future;

use marquee_core::MovieId;
use time::macros::date;

use super::{make_movie, TestResult};
use crate::{MovieStore, StorageError};

pub(super) async fn run_lifecycle_tests<S, F, Fut>(factory: &F) -> Vec<TestResult>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let mut results = Vec::new();

    results.push(TestResult::from_result(
        "lifecycle",
        "operations_after_close_fail",
        operations_after_close_fail(factory).await,
    ));
    results.push(TestResult::from_result(
        "lifecycle",
        "close_is_idempotent",
        close_is_idempotent(factory).await,
    ));

    results
}

fn expect_closed<T: std::fmt::Debug>(
    op: &str,
    result: Result<T, StorageError>,
) -> Result<(), String> {
    match result {
        Err(StorageError::Closed) => Ok(()),
        other => Err(format!("{op} after close: expected Closed, got {:?}", other)),
    }
}

// ── 1. every operation reports Closed ────────────────────────────────────────

async fn operations_after_close_fail<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let stored = s
        .insert(make_movie("Before close", date!(2001 - 01 - 01)))
        .await
        .map_err(|e| format!("insert: {e}"))?;
    s.close().await.map_err(|e| format!("close: {e}"))?;

    expect_closed("get", s.get(stored.id).await)?;
    expect_closed("list_all", s.list_all().await)?;
    expect_closed("list_latest", s.list_latest(4).await)?;
    expect_closed(
        "insert",
        s.insert(make_movie("After close", date!(2001 - 01 - 01)))
            .await,
    )?;
    expect_closed("replace", s.replace(stored).await)?;
    expect_closed("delete", s.delete(MovieId(1)).await)?;
    Ok(())
}

// ── 2. closing twice is fine ─────────────────────────────────────────────────

async fn close_is_idempotent<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    s.close().await.map_err(|e| format!("first close: {e}"))?;
    s.close().await.map_err(|e| format!("second close: {e}"))?;
    Ok(())
}
