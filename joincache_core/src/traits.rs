use crate::Blob;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait defining the behavior of a readable cache member.
///
/// Anything that can answer `get(key)` with a value, a miss, or an error can take part
/// in aggregation: a local store, a remote cache client, or a whole aggregator nested
/// as a member.
#[async_trait]
pub trait CacheReadTrait: Debug + Send + Sync {
	/// Get the name of the cache, e.g. "redis-eu-west". Stable per instance and
	/// unique within one aggregator.
	fn name(&self) -> &str;

	/// Get the value for the given key, or `None` if this cache has no entry.
	async fn get(&self, key: &str) -> Result<Option<Blob>>;

	fn boxed(self) -> Box<dyn CacheReadTrait>
	where
		Self: Sized + 'static,
	{
		Box::new(self)
	}
}
