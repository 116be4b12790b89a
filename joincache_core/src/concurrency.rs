//! Sizing policy for the shared fetch pool.
//!
//! Member fetches are I/O-bound (they wait on the network or disk of a backing
//! cache), so the default worker count is a multiple of the CPU count rather
//! than 1x.

use num_cpus;

/// Bound on how many member fetches may run at the same time, across all
/// concurrent `get` calls sharing one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolLimits {
	/// Maximum number of in-flight member fetches.
	pub workers: usize,
}

impl PoolLimits {
	/// Create a limit with a custom worker count, clamped to at least one.
	pub fn new(workers: usize) -> Self {
		Self {
			workers: workers.max(1),
		}
	}

	/// Get the number of logical CPUs available
	pub fn cpu_count() -> usize {
		num_cpus::get()
	}
}

impl Default for PoolLimits {
	/// Default to 3x the CPU count: fetches spend most of their time waiting,
	/// so parallelism well above the CPU count does not saturate it.
	fn default() -> Self {
		Self {
			workers: num_cpus::get() * 3,
		}
	}
}
