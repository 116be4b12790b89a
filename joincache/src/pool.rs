//! The shared, bounded pool that runs member fetches.
//!
//! The pool is constructed explicitly and handed to every aggregator that should
//! share it; there is no hidden process-wide executor. It bounds how many member
//! fetches are in flight at once, across all concurrent `get` calls, and hands the
//! caller one [`JoinHandle`] per task to join on.
//!
//! Once created, the pool is immutable and cheap to clone (Arc-based).

use joincache_core::PoolLimits;
use std::{future::Future, sync::Arc};
use tokio::{sync::Semaphore, task::JoinHandle};

/// A bounded pool for fetch tasks.
///
/// Tasks submitted beyond the worker bound queue on the internal semaphore and start
/// as permits free up. The pool never cancels a running task: a slow fetch holds its
/// permit until it finishes.
#[derive(Clone, Debug)]
pub struct FetchPool {
	inner: Arc<PoolInner>,
}

#[derive(Debug)]
struct PoolInner {
	permits: Semaphore,
	limits: PoolLimits,
}

impl FetchPool {
	/// Create a pool with the given limits.
	pub fn new(limits: PoolLimits) -> Self {
		Self {
			inner: Arc::new(PoolInner {
				permits: Semaphore::new(limits.workers),
				limits,
			}),
		}
	}

	/// Get the limits this pool was created with.
	pub fn limits(&self) -> &PoolLimits {
		&self.inner.limits
	}

	/// Submit one fetch task.
	///
	/// The task is spawned immediately but waits for a pool permit before its body
	/// runs. The returned handle resolves to the task's result; it fails only if the
	/// task panicked or was aborted.
	pub fn spawn<F, T>(&self, future: F) -> JoinHandle<T>
	where
		F: Future<Output = T> + Send + 'static,
		T: Send + 'static,
	{
		let inner = Arc::clone(&self.inner);
		tokio::spawn(async move {
			// The semaphore is never closed, so acquire can only succeed.
			let _permit = inner.permits.acquire().await.expect("fetch pool semaphore closed");
			future.await
		})
	}
}

impl Default for FetchPool {
	fn default() -> Self {
		Self::new(PoolLimits::default())
	}
}
