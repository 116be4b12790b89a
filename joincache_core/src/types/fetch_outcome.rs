//! The per-member result of one fetch attempt.
//!
//! Every member produces exactly one [`FetchOutcome`] per request. A failing member
//! downgrades its outcome to [`FetchOutcome::Failed`]; it never reduces the number of
//! outcomes the collector sees.

use super::Blob;

/// The tagged result of asking one member cache for one key.
///
/// Errors are captured at the task boundary as rendered text instead of being thrown
/// across it, which keeps outcomes cloneable and comparable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
	/// The member returned a value.
	Hit(Blob),
	/// The member answered, but has no entry for the key.
	Miss,
	/// The member call failed; carries the rendered error chain.
	Failed(String),
}

impl FetchOutcome {
	/// Returns `true` if the outcome carries a value.
	#[must_use]
	pub fn is_hit(&self) -> bool {
		matches!(self, FetchOutcome::Hit(_))
	}

	/// Returns `true` if the member produced no value, whether by answering
	/// with a miss or by failing. Selection treats both identically.
	#[must_use]
	pub fn is_miss_or_failed(&self) -> bool {
		!self.is_hit()
	}

	/// Returns the value if the outcome is a hit.
	#[must_use]
	pub fn value(&self) -> Option<&Blob> {
		match self {
			FetchOutcome::Hit(blob) => Some(blob),
			_ => None,
		}
	}
}

impl From<Option<Blob>> for FetchOutcome {
	fn from(value: Option<Blob>) -> Self {
		match value {
			Some(blob) => FetchOutcome::Hit(blob),
			None => FetchOutcome::Miss,
		}
	}
}
