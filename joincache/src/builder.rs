//! Builder pattern for constructing [`CacheAggregator`] instances.

use crate::{CacheAggregator, FetchPool};
use anyhow::Result;
use joincache_core::{CacheReadTrait, EventBus, PoolLimits};

/// Builder for creating customized [`CacheAggregator`] instances
///
/// Member order is significant: it is the tie-break order when several members
/// hold a value for the same key.
///
/// # Examples
///
/// ```no_run
/// use joincache::CacheAggregator;
/// use joincache_core::PoolLimits;
///
/// # fn members() -> Vec<Box<dyn joincache_core::CacheReadTrait>> { vec![] }
/// # fn main() -> anyhow::Result<()> {
/// let aggregator = CacheAggregator::builder()
///     .caches(members())
///     .pool_limits(PoolLimits::new(16))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct CacheAggregatorBuilder {
	caches: Vec<Box<dyn CacheReadTrait>>,
	events: Option<EventBus>,
	pool: Option<FetchPool>,
}

impl CacheAggregatorBuilder {
	/// Create a new builder with no members and default bus and pool
	pub fn new() -> Self {
		Self {
			caches: Vec::new(),
			events: None,
			pool: None,
		}
	}

	/// Append one member cache; members are queried in the order they were added
	pub fn cache(mut self, cache: impl CacheReadTrait + 'static) -> Self {
		self.caches.push(Box::new(cache));
		self
	}

	/// Append an already boxed member cache
	pub fn boxed_cache(mut self, cache: Box<dyn CacheReadTrait>) -> Self {
		self.caches.push(cache);
		self
	}

	/// Replace the member list with `caches`, keeping their order
	pub fn caches(mut self, caches: Vec<Box<dyn CacheReadTrait>>) -> Self {
		self.caches = caches;
		self
	}

	/// Use this event bus instead of creating a fresh one
	///
	/// Subscribe on the bus before handing it in to observe construction-to-teardown.
	pub fn events(mut self, events: EventBus) -> Self {
		self.events = Some(events);
		self
	}

	/// Share this fetch pool instead of creating a dedicated one
	pub fn pool(mut self, pool: FetchPool) -> Self {
		self.pool = Some(pool);
		self
	}

	/// Create a dedicated fetch pool with the given limits
	pub fn pool_limits(self, limits: PoolLimits) -> Self {
		self.pool(FetchPool::new(limits))
	}

	/// Build the aggregator
	///
	/// Fails if no member was added or if two members share a name.
	pub fn build(self) -> Result<CacheAggregator> {
		CacheAggregator::new(
			self.caches,
			self.events.unwrap_or_default(),
			self.pool.unwrap_or_default(),
		)
	}
}

impl Default for CacheAggregatorBuilder {
	fn default() -> Self {
		Self::new()
	}
}
