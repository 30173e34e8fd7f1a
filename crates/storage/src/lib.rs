//! Persistence for the movie catalog.
//!
//! [`MovieStore`] is the keyed storage contract; [`InMemoryStore`] and
//! [`JsonFileStore`] implement it. [`conformance`] checks any backend
//! against the contract.

pub mod conformance;
mod error;
mod file;
mod memory;
mod table;
mod traits;

pub use error::StorageError;
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use traits::MovieStore;
