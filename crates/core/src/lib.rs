//! marquee-core: movie catalog domain library.
//!
//! Holds everything about a movie that does not touch persistence:
//! the validated entity shape, create-payload validation, the sparse
//! partial-update merge, and the search dispatch over a set of movies.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`Movie`], [`NewMovie`], [`MovieId`] -- the entity with and without identity
//! - [`Genre`], [`Runtime`] -- the closed genre set and `HH:MM:SS` durations
//! - [`MovieDraft`] -- raw create payload, validated into a [`NewMovie`]
//! - [`MoviePatch`], [`merge()`] -- sparse field set and its merge rule
//! - [`SearchQuery`], [`search()`] -- category dispatch and result ordering
//! - [`MovieView`] -- the one external representation used by every read
//! - [`ValidationError`], [`FieldError`] -- field-level failures

pub mod error;
pub mod genre;
pub mod movie;
pub mod patch;
pub mod runtime;
pub mod search;
pub mod validate;
pub mod view;

// ── Convenience re-exports ───────────────────────────────────────────

pub use error::{FieldError, ValidationError};
pub use genre::{Genre, GenreParseError};
pub use movie::{by_release_desc, Movie, MovieId, NewMovie};
pub use patch::{merge, IgnoredField, MergeOutcome, MoviePatch};
pub use runtime::{Runtime, RuntimeParseError};
pub use search::{search, SearchCategory, SearchQuery};
pub use validate::MovieDraft;
pub use view::MovieView;
