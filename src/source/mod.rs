//! Visit data sources
//!
//! The alert engine never fetches data itself. A [`VisitSource`] hands it a
//! snapshot of well-formed visit records; decoding and validation happen
//! here, at the boundary.

pub mod json;
pub mod traits;

pub use json::JsonFileSource;
pub use traits::{InMemorySource, VisitSource};
