use std::future::Future;

use marquee_core::{Genre, MovieId};
use rust_decimal::Decimal;
use time::macros::date;

use super::{make_movie, titles, TestResult};
use crate::MovieStore;

pub(super) async fn run_crud_tests<S, F, Fut>(factory: &F) -> Vec<TestResult>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let mut results = Vec::new();

    results.push(TestResult::from_result(
        "crud",
        "insert_then_get_round_trips",
        insert_then_get_round_trips(factory).await,
    ));
    results.push(TestResult::from_result(
        "crud",
        "insert_assigns_increasing_ids",
        insert_assigns_increasing_ids(factory).await,
    ));
    results.push(TestResult::from_result(
        "crud",
        "ids_not_reused_after_delete",
        ids_not_reused_after_delete(factory).await,
    ));
    results.push(TestResult::from_result(
        "crud",
        "list_all_is_id_ascending",
        list_all_is_id_ascending(factory).await,
    ));
    results.push(TestResult::from_result(
        "crud",
        "replace_overwrites_whole_movie",
        replace_overwrites_whole_movie(factory).await,
    ));
    results.push(TestResult::from_result(
        "crud",
        "delete_removes_movie",
        delete_removes_movie(factory).await,
    ));

    results
}

// ── 1. insert then get returns an equal movie ────────────────────────────────

async fn insert_then_get_round_trips<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let mut draft = make_movie("Heat", date!(1995 - 12 - 15));
    draft.rating = Some(Decimal::new(83, 1));
    draft.image_url = Some("https://img.example/heat.jpg".to_string());

    let stored = s
        .insert(draft.clone())
        .await
        .map_err(|e| format!("insert: {e}"))?;
    if stored.clone().without_id() != draft {
        return Err(format!("insert changed fields: {stored:?}"));
    }

    let fetched = s
        .get(stored.id)
        .await
        .map_err(|e| format!("get: {e}"))?
        .ok_or_else(|| format!("movie {} missing after insert", stored.id))?;
    if fetched != stored {
        return Err(format!("expected {stored:?}, got {fetched:?}"));
    }
    Ok(())
}

// ── 2. identities strictly increase ──────────────────────────────────────────

async fn insert_assigns_increasing_ids<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let mut last: Option<MovieId> = None;
    for i in 0..5 {
        let m = s
            .insert(make_movie(&format!("M{i}"), date!(2001 - 01 - 01)))
            .await
            .map_err(|e| format!("insert {i}: {e}"))?;
        if let Some(prev) = last {
            if m.id <= prev {
                return Err(format!("id {} not greater than previous {}", m.id, prev));
            }
        }
        last = Some(m.id);
    }
    Ok(())
}

// ── 3. a deleted identity is never handed out again ──────────────────────────

async fn ids_not_reused_after_delete<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let a = s
        .insert(make_movie("A", date!(2001 - 01 - 01)))
        .await
        .map_err(|e| format!("insert A: {e}"))?;
    let b = s
        .insert(make_movie("B", date!(2001 - 01 - 01)))
        .await
        .map_err(|e| format!("insert B: {e}"))?;
    s.delete(b.id).await.map_err(|e| format!("delete B: {e}"))?;
    let c = s
        .insert(make_movie("C", date!(2001 - 01 - 01)))
        .await
        .map_err(|e| format!("insert C: {e}"))?;
    if c.id == a.id || c.id == b.id {
        return Err(format!("identity {} reused", c.id));
    }
    Ok(())
}

// ── 4. list_all orders by identity ───────────────────────────────────────────

async fn list_all_is_id_ascending<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    for (title, date) in [
        ("Old", date!(1950 - 01 - 01)),
        ("New", date!(2020 - 01 - 01)),
        ("Mid", date!(1990 - 01 - 01)),
    ] {
        s.insert(make_movie(title, date))
            .await
            .map_err(|e| format!("insert {title}: {e}"))?;
    }
    let all = s.list_all().await.map_err(|e| format!("list_all: {e}"))?;
    if titles(&all) != ["Old", "New", "Mid"] {
        return Err(format!("expected insertion order, got {:?}", titles(&all)));
    }
    Ok(())
}

// ── 5. replace swaps every field but the identity ────────────────────────────

async fn replace_overwrites_whole_movie<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let stored = s
        .insert(make_movie("Before", date!(2005 - 05 - 05)))
        .await
        .map_err(|e| format!("insert: {e}"))?;

    let mut changed = stored.clone();
    changed.title = "After".to_string();
    changed.genre = Genre::Horror;
    changed.plot = None;
    let returned = s
        .replace(changed.clone())
        .await
        .map_err(|e| format!("replace: {e}"))?;
    if returned != changed {
        return Err(format!("replace returned {returned:?}"));
    }

    let fetched = s.get(stored.id).await.map_err(|e| format!("get: {e}"))?;
    if fetched.as_ref() != Some(&changed) {
        return Err(format!("expected {changed:?}, got {fetched:?}"));
    }
    Ok(())
}

// ── 6. delete makes the movie unreachable ────────────────────────────────────

async fn delete_removes_movie<S, F, Fut>(factory: &F) -> Result<(), String>
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let s = factory().await;
    let keep = s
        .insert(make_movie("Keep", date!(2001 - 01 - 01)))
        .await
        .map_err(|e| format!("insert keep: {e}"))?;
    let gone = s
        .insert(make_movie("Gone", date!(2002 - 01 - 01)))
        .await
        .map_err(|e| format!("insert gone: {e}"))?;

    s.delete(gone.id).await.map_err(|e| format!("delete: {e}"))?;

    if s.get(gone.id).await.map_err(|e| format!("get: {e}"))?.is_some() {
        return Err("deleted movie still readable".to_string());
    }
    let all = s.list_all().await.map_err(|e| format!("list_all: {e}"))?;
    if all != vec![keep] {
        return Err(format!("expected only Keep, got {:?}", titles(&all)));
    }
    Ok(())
}
