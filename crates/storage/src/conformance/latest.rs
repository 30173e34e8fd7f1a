use std::future::Future;

use time::macros::date;

use super::{make_movie, titles, TestResult};
use crate::MovieStore;

pub(super) async fn run_latest_tests<S, F, Fut>(factory: &F) -> Vec<TestResult>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let mut results = Vec::new();

    results.push(TestResult::from_result(
        "latest",
        "latest_returns_newest_first",
        latest_returns_newest_first(factory).await,
    ));
    results.push(TestResult::from_result(
        "latest",
        "latest_ties_break_by_id",
        latest_ties_break_by_id(factory).await,
    ));
    results.push(TestResult::from_result(
        "latest",
        "latest_short_store_returns_all",
        latest_short_store_returns_all(factory).await,
    ));
    results.push(TestResult::from_result(
        "latest",
        "latest_zero_is_empty",
        latest_zero_is_empty(factory).await,
    ));

    results
}

// ── 1. the four most recent, strictly descending ─────────────────────────────

async fn latest_returns_newest_first<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    for (title, date) in [
        ("1999", date!(1999 - 03 - 31)),
        ("2010", date!(2010 - 07 - 16)),
        ("1972", date!(1972 - 03 - 24)),
        ("2019", date!(2019 - 05 - 30)),
        ("2014", date!(2014 - 11 - 07)),
        ("2008", date!(2008 - 07 - 18)),
    ] {
        s.insert(make_movie(title, date))
            .await
            .map_err(|e| format!("insert {title}: {e}"))?;
    }

    let latest = s
        .list_latest(4)
        .await
        .map_err(|e| format!("list_latest: {e}"))?;
    if titles(&latest) != ["2019", "2014", "2010", "2008"] {
        return Err(format!("unexpected latest order: {:?}", titles(&latest)));
    }
    if latest
        .windows(2)
        .any(|w| w[0].release_date <= w[1].release_date)
    {
        return Err("release dates not strictly descending".to_string());
    }
    Ok(())
}

// ── 2. equal release dates order by identity ascending ───────────────────────

async fn latest_ties_break_by_id<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    for title in ["first", "second", "third"] {
        s.insert(make_movie(title, date!(2000 - 01 - 01)))
            .await
            .map_err(|e| format!("insert {title}: {e}"))?;
    }
    let latest = s
        .list_latest(3)
        .await
        .map_err(|e| format!("list_latest: {e}"))?;
    if titles(&latest) != ["first", "second", "third"] {
        return Err(format!("ties not ordered by id: {:?}", titles(&latest)));
    }
    Ok(())
}

// ── 3. asking for more than the store holds ──────────────────────────────────

async fn latest_short_store_returns_all<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    s.insert(make_movie("older", date!(1980 - 01 - 01)))
        .await
        .map_err(|e| format!("insert: {e}"))?;
    s.insert(make_movie("newer", date!(1990 - 01 - 01)))
        .await
        .map_err(|e| format!("insert: {e}"))?;
    let latest = s
        .list_latest(4)
        .await
        .map_err(|e| format!("list_latest: {e}"))?;
    if titles(&latest) != ["newer", "older"] {
        return Err(format!("expected both movies, got {:?}", titles(&latest)));
    }
    Ok(())
}

// ── 4. a zero limit ──────────────────────────────────────────────────────────

async fn latest_zero_is_empty<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    s.insert(make_movie("only", date!(1980 - 01 - 01)))
        .await
        .map_err(|e| format!("insert: {e}"))?;
    let latest = s
        .list_latest(0)
        .await
        .map_err(|e| format!("list_latest: {e}"))?;
    if !latest.is_empty() {
        return Err(format!("expected nothing, got {:?}", titles(&latest)));
    }
    Ok(())
}
