//! Joins the per-member outcomes of one request into a single answer.
//!
//! Selection is *winner-takes-first*: the value of the first member, in construction
//! order, that produced a hit. A failed member counts as a miss for selection.
//! Alongside the selection, the collector derives at most one consistency diagnostic
//! and emits it on the event bus. Diagnostics are a best-effort signal for operators,
//! not a correctness gate; the selection proceeds regardless of what they find.

use joincache_core::{Blob, EventBus, FetchOutcome, InconsistencyKind};

/// Select the final value: the first hit in member order, if any.
pub fn select_value(outcomes: Vec<FetchOutcome>) -> Option<Blob> {
	outcomes.into_iter().find_map(|outcome| match outcome {
		FetchOutcome::Hit(blob) => Some(blob),
		_ => None,
	})
}

/// Derive the consistency diagnostic for one request, if any.
///
/// The rules are mutually exclusive and checked in this priority order:
/// 1. every member missed or failed;
/// 2. exactly one member missed or failed while all others produced values;
/// 3. two or more values exist and are not all equal.
pub fn diagnose(outcomes: &[FetchOutcome]) -> Option<InconsistencyKind> {
	if outcomes.is_empty() {
		return None;
	}

	let misses = outcomes.iter().filter(|o| o.is_miss_or_failed()).count();
	if misses == outcomes.len() {
		return Some(InconsistencyKind::AllMiss);
	}
	if misses == 1 {
		return Some(InconsistencyKind::PartialMiss);
	}

	let mut values = outcomes.iter().filter_map(|o| o.value());
	if let Some(first) = values.next() {
		if values.any(|value| value != first) {
			return Some(InconsistencyKind::DivergentValues);
		}
	}

	None
}

/// Run the collection step: emit the diagnostic (if any) and return the selection.
pub fn collect_outcomes(outcomes: Vec<FetchOutcome>, events: &EventBus) -> Option<Blob> {
	if let Some(kind) = diagnose(&outcomes) {
		log::warn!("inconsistent member outcomes: {kind:?}");
		events.inconsistency(kind);
	}
	select_value(outcomes)
}
