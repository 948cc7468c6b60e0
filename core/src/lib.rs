//! Boolean AND keyword search over a pre-built binary inverted index.
//!
//! Three on-disk files (term dictionary, document dictionary, postings
//! index) are loaded concurrently into read-only maps; queries then run
//! as sorted postings-list intersections.

pub mod error;
pub mod index;
pub mod intersect;
pub mod persist;
pub mod query;

pub use error::FormatError;
pub use index::{DocId, SearchIndex, TermId};
pub use persist::{load_index, IndexPaths};
pub use query::{process, QueryResult};
