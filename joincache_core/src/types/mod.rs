//! Leaf types shared by every part of the aggregator: the opaque value and the
//! per-member fetch outcome.

mod blob;
mod fetch_outcome;

pub use blob::Blob;
pub use fetch_outcome::FetchOutcome;
