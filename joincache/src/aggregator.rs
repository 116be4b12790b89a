//! # CacheAggregator
//!
//! Joins several member caches into one read-through cache: `get(key)` asks every
//! member concurrently, waits for all of them, and answers with the value of the
//! first member, in construction order, that had one.
//!
//! * Members are queried in parallel on a shared bounded [`FetchPool`].
//! * The join is a full barrier: there is no early return on first hit and no
//!   per-request timeout, so one hung member stalls its whole `get` call.
//! * A failing member is downgraded to an empty outcome, never propagated.
//! * Disagreements between members surface as [`Event::Inconsistency`] on the bus.
//!
//! The aggregator itself implements [`CacheReadTrait`], so aggregators nest as
//! members of other aggregators.

use crate::{FetchPool, collect::collect_outcomes};
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use joincache_core::{Blob, CacheReadTrait, EventBus, FetchOutcome};
use std::{collections::HashSet, fmt::Debug, sync::Arc};

/// Implements [`CacheReadTrait`] by fanning one lookup out to every member and
/// joining on all of their outcomes.
///
/// The member list is fixed at construction and shared read-only with the fetch
/// tasks; `get` is safe to call concurrently and repeatedly.
pub struct CacheAggregator {
	caches: Arc<Vec<Box<dyn CacheReadTrait>>>,
	events: EventBus,
	pool: FetchPool,
}

impl CacheAggregator {
	/// Create an aggregator over `caches`, in tie-break order.
	///
	/// Fails if `caches` is empty or if two members share a name.
	pub fn new(caches: Vec<Box<dyn CacheReadTrait>>, events: EventBus, pool: FetchPool) -> Result<CacheAggregator> {
		ensure!(!caches.is_empty(), "must have at least one member cache");

		let mut names = HashSet::new();
		for cache in &caches {
			ensure!(
				names.insert(cache.name().to_string()),
				"duplicate member cache name: {}",
				cache.name()
			);
		}

		Ok(Self {
			caches: Arc::new(caches),
			events,
			pool,
		})
	}

	/// Create a builder for customizing member list, event bus, and pool
	pub fn builder() -> crate::CacheAggregatorBuilder {
		crate::CacheAggregatorBuilder::new()
	}

	/// Get the event bus this aggregator emits on
	pub fn events(&self) -> &EventBus {
		&self.events
	}

	/// Get the fetch pool this aggregator dispatches on
	pub fn pool(&self) -> &FetchPool {
		&self.pool
	}

	/// Look up `key` in every member and return the consolidated value.
	///
	/// Suspends until every member has produced an outcome; there is no timeout
	/// and no cancellation. Member failures are downgraded and logged, so the
	/// only outward error is the join itself failing (a fetch task panicked or
	/// was aborted).
	pub async fn get(&self, key: &str) -> Result<Option<Blob>> {
		log::debug!("get {key:?} across {} member caches", self.caches.len());

		let handles: Vec<_> = (0..self.caches.len())
			.map(|index| {
				let caches = Arc::clone(&self.caches);
				let events = self.events.clone();
				let key = key.to_string();
				self.pool.spawn(async move {
					let cache = &caches[index];
					events.attempt(cache.name(), &key);
					match cache.get(&key).await {
						Ok(value) => {
							events.success(cache.name());
							FetchOutcome::from(value)
						}
						Err(error) => {
							let message = format!("{error:#}");
							log::warn!("member cache {:?} failed: {message}", cache.name());
							events.failure(cache.name(), message.clone());
							FetchOutcome::Failed(message)
						}
					}
				})
			})
			.collect();

		// Full join barrier: one outcome per member, in member order.
		let mut outcomes = Vec::with_capacity(handles.len());
		for result in futures::future::join_all(handles).await {
			match result {
				Ok(outcome) => outcomes.push(outcome),
				Err(error) => {
					self.events.error(format!("fetch task did not complete: {error:#}"));
					return Err(error).context("failed to join on all member fetches");
				}
			}
		}

		Ok(collect_outcomes(outcomes, &self.events))
	}
}

#[async_trait]
impl CacheReadTrait for CacheAggregator {
	fn name(&self) -> &str {
		"joined cache"
	}

	async fn get(&self, key: &str) -> Result<Option<Blob>> {
		CacheAggregator::get(self, key).await
	}
}

impl Debug for CacheAggregator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CacheAggregator")
			.field("caches", &self.caches)
			.field("pool", &self.pool)
			.finish_non_exhaustive()
	}
}
