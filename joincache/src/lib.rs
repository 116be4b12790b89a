//! joincache: join multiple backing caches into one read-through cache.
//!
//! This crate exposes a small set of building blocks for cache aggregation:
//! - an aggregator that fans one `get(key)` out to every member and joins on all of them,
//! - a bounded fetch pool shared across concurrent lookups,
//! - a collector that picks the winning value and flags inconsistencies between members.
//!
//! It is designed for **runtime composition**: members are object-safe
//! [`CacheReadTrait`](joincache_core::CacheReadTrait) implementations, and the
//! aggregator implements the same trait, so aggregators nest as members of other
//! aggregators.
//!
//! # Quick start
//! ```rust
//! use anyhow::Result;
//! use async_trait::async_trait;
//! use joincache::CacheAggregator;
//! use joincache_core::{Blob, CacheReadTrait};
//!
//! #[derive(Debug)]
//! struct Fixed(&'static str, Option<&'static str>);
//!
//! #[async_trait]
//! impl CacheReadTrait for Fixed {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//!     async fn get(&self, _key: &str) -> Result<Option<Blob>> {
//!         Ok(self.1.map(Blob::from))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Members are queried concurrently; the first one (in this order) with a
//!     // value wins.
//!     let aggregator = CacheAggregator::builder()
//!         .cache(Fixed("local", None))
//!         .cache(Fixed("remote", Some("carrot")))
//!         .build()?;
//!
//!     assert_eq!(aggregator.get("some key").await?, Some(Blob::from("carrot")));
//!     Ok(())
//! }
//! ```
//!
//! ## See also
//! - [`CacheAggregator`]: the public aggregation surface
//! - [`FetchPool`]: the injected, bounded worker pool
//! - [`joincache_core::EventBus`]: where attempts, completions, and consistency
//!   diagnostics are emitted

mod aggregator;
pub use aggregator::CacheAggregator;

mod builder;
pub use builder::CacheAggregatorBuilder;

mod collect;
pub use collect::{collect_outcomes, diagnose, select_value};

mod pool;
pub use pool::FetchPool;

#[cfg(test)]
mod testing;
