//! Shared test utilities and fixtures for the joincache crate.
//!
//! Provides a scripted member cache and an event-capture helper that are reused
//! across test modules. Only compiled when running tests.

use anyhow::{Result, bail};
use async_trait::async_trait;
use joincache_core::{Blob, CacheReadTrait, Event, EventBus};
use std::sync::{Arc, Mutex};

/// What a [`MockCache`] should do when asked for a key.
#[derive(Debug)]
pub enum MockBehavior {
	/// Answer every key with this value.
	Value(&'static str),
	/// Answer every key with a miss.
	Miss,
	/// Fail every call with this error message.
	Fail(&'static str),
	/// Panic inside the call (exercises the join-failure path).
	Panic,
}

/// A member cache with scripted behavior.
#[derive(Debug)]
pub struct MockCache {
	name: &'static str,
	behavior: MockBehavior,
	keys_seen: Mutex<Vec<String>>,
}

impl MockCache {
	pub fn new(name: &'static str, behavior: MockBehavior) -> MockCache {
		MockCache {
			name,
			behavior,
			keys_seen: Mutex::new(Vec::new()),
		}
	}

	pub fn value(name: &'static str, value: &'static str) -> MockCache {
		Self::new(name, MockBehavior::Value(value))
	}

	pub fn miss(name: &'static str) -> MockCache {
		Self::new(name, MockBehavior::Miss)
	}

	pub fn failing(name: &'static str, message: &'static str) -> MockCache {
		Self::new(name, MockBehavior::Fail(message))
	}

	/// The keys this cache has been asked for, in call order.
	pub fn keys_seen(&self) -> Vec<String> {
		self.keys_seen.lock().unwrap().clone()
	}
}

#[async_trait]
impl CacheReadTrait for MockCache {
	fn name(&self) -> &str {
		self.name
	}

	async fn get(&self, key: &str) -> Result<Option<Blob>> {
		self.keys_seen.lock().unwrap().push(key.to_string());
		match &self.behavior {
			MockBehavior::Value(value) => Ok(Some(Blob::from(*value))),
			MockBehavior::Miss => Ok(None),
			MockBehavior::Fail(message) => bail!("{message}"),
			MockBehavior::Panic => panic!("mock cache panic"),
		}
	}
}

/// Subscribe a collecting listener to `bus` and return the shared event vector.
pub fn capture_events(bus: &EventBus) -> Arc<Mutex<Vec<Event>>> {
	let captured = Arc::new(Mutex::new(Vec::new()));
	let captured_clone = captured.clone();
	bus.subscribe(move |event| {
		captured_clone.lock().unwrap().push(event.clone());
	});
	captured
}

/// Count the captured events matching `filter`.
pub fn count_events(events: &Arc<Mutex<Vec<Event>>>, filter: impl Fn(&Event) -> bool) -> usize {
	events.lock().unwrap().iter().filter(|e| filter(e)).count()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_mock_cache_records_keys() -> Result<()> {
		let cache = MockCache::value("foo", "apple");
		cache.get("a").await?;
		cache.get("b").await?;
		assert_eq!(cache.keys_seen(), vec!["a", "b"]);
		Ok(())
	}

	#[tokio::test]
	async fn test_mock_cache_behaviors() -> Result<()> {
		assert_eq!(MockCache::value("foo", "apple").get("k").await?, Some(Blob::from("apple")));
		assert_eq!(MockCache::miss("foo").get("k").await?, None);
		assert_eq!(
			format!("{:#}", MockCache::failing("foo", "i am dead").get("k").await.unwrap_err()),
			"i am dead"
		);
		Ok(())
	}
}
