//! Conformance test suite for `MovieStore` implementations.
//!
//! This module provides a backend-agnostic test suite that any `MovieStore`
//! implementation can run to verify correctness. The suite covers:
//!
//! - **CRUD**: insert/get round trip, replace, delete
//! - **Identity**: unique, increasing identities that are never reused
//! - **Ordering**: `list_all` by identity, `list_latest` newest first
//! - **Errors**: absent identities, replace of a missing movie
//! - **Lifecycle**: every operation fails once the store is closed
//! - **Concurrency**: parallel inserts and replaces stay consistent
//!
//! # Usage
//!
//! Backend crates call [`run_conformance_suite`] with a factory function that
//! creates a fresh, empty store for each test:
//!
//! ```ignore
//! use marquee_storage::conformance::run_conformance_suite;
//! use marquee_storage::InMemoryStore;
//!
//! #[tokio::test]
//! async fn in_memory_conformance() {
//!     let report = run_conformance_suite(|| async { InMemoryStore::new() }).await;
//!     assert!(report.failed == 0, "{report}");
//! }
//! ```

mod concurrent;
mod crud;
mod error;
mod latest;
mod lifecycle;

use std::fmt;
use std::future::Future;

use marquee_core::{Genre, NewMovie, Runtime};
use time::Date;

use crate::MovieStore;

/// Result of a single conformance test.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Test category (e.g. "crud", "latest", "lifecycle").
    pub category: String,
    /// Test name (e.g. "insert_then_get_round_trips").
    pub name: String,
    /// Whether the test passed.
    pub passed: bool,
    /// Error message if the test failed.
    pub message: Option<String>,
}

impl TestResult {
    fn pass(category: &str, name: &str) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            passed: true,
            message: None,
        }
    }

    fn fail(category: &str, name: &str, msg: String) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            passed: false,
            message: Some(msg),
        }
    }

    fn from_result(category: &str, name: &str, result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::pass(category, name),
            Err(msg) => Self::fail(category, name, msg),
        }
    }
}

/// Aggregated report from a full conformance suite run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Conformance: {}/{} passed ({} failed)",
            self.passed, self.total, self.failed
        )?;
        for r in &self.results {
            if !r.passed {
                writeln!(
                    f,
                    "  FAIL [{}/{}]: {}",
                    r.category,
                    r.name,
                    r.message.as_deref().unwrap_or("(no message)")
                )?;
            }
        }
        Ok(())
    }
}

/// Run the full conformance suite against a store backend.
///
/// The `factory` function is called once per test to create a fresh, empty
/// store, ensuring test isolation.
pub async fn run_conformance_suite<S, F, Fut>(factory: F) -> ConformanceReport
where
    S: MovieStore,
    F: Fn() -> Fut,
    Fut: Future<Output = S>,
{
    let mut results = Vec::new();

    results.extend(crud::run_crud_tests(&factory).await);
    results.extend(error::run_error_tests(&factory).await);
    results.extend(latest::run_latest_tests(&factory).await);
    results.extend(lifecycle::run_lifecycle_tests(&factory).await);
    results.extend(concurrent::run_concurrent_tests(&factory).await);

    let passed = results.iter().filter(|r| r.passed).count();
    let total = results.len();

    ConformanceReport {
        results,
        passed,
        failed: total - passed,
        total,
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// A valid movie released on `release_date`.
fn make_movie(title: &str, release_date: Date) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        directors: "Test Director".to_string(),
        actors: "Actor One, Actor Two".to_string(),
        release_date,
        genre: Genre::Drama,
        runtime: Runtime::from_hms(1, 50, 0),
        plot: Some(format!("{title} plot")),
        rating: None,
        image_url: None,
    }
}

fn titles(movies: &[marquee_core::Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}
