//! Event system for cache aggregation.
//!
//! Provides a unified event bus for everything the aggregator wants an operator to
//! see: per-member fetch attempts and completions, consistency diagnostics, and
//! generic warnings and errors. Emitting is fire-and-forget; nothing in the
//! aggregation control flow depends on a listener's return value.

use arc_swap::ArcSwap;
use std::sync::Arc;

/// Event types emitted during aggregation
#[derive(Debug, Clone)]
pub enum Event {
	/// A fetch task is about to ask a member for a key. Emitted once per member
	/// per request, before the member is invoked, regardless of what happens next.
	Attempt { cache: String, key: String },

	/// A member answered, with a value or a miss.
	Success { cache: String },

	/// A member call failed; carries the rendered error.
	Failure { cache: String, message: String },

	/// The collector found the outcomes of one request inconsistent.
	Inconsistency { kind: InconsistencyKind },

	/// Warning message
	Warning { message: String },

	/// Error message (e.g. the join over all fetch tasks itself failed)
	Error { message: String },

	/// Logging event forwarded from the `log` crate
	Log {
		level: LogLevel,
		target: String,
		message: String,
	},
}

/// The mutually exclusive consistency diagnostics, at most one per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InconsistencyKind {
	/// No member produced a value.
	AllMiss,
	/// Exactly one member came back empty while all others produced values.
	PartialMiss,
	/// Two or more members produced values that are not all equal.
	DivergentValues,
}

/// Log level for forwarded logging events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

/// Unique identifier for event listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type EventListener = Arc<dyn Fn(&Event) + Send + Sync>;

/// Thread-safe event bus for aggregation events
///
/// Listeners are called synchronously on the emitting task, in registration order.
/// Uses lock-free arc-swap so that emitting (frequent) never contends with
/// subscribing (rare).
#[derive(Clone)]
pub struct EventBus {
	listeners: Arc<ArcSwap<Vec<EventListener>>>,
}

impl EventBus {
	/// Create a new event bus
	pub fn new() -> Self {
		Self {
			listeners: Arc::new(ArcSwap::from_pointee(Vec::new())),
		}
	}

	/// Register an event listener
	///
	/// The listener will be called for all events emitted on this bus.
	/// Uses read-copy-update (RCU) so emitters never block.
	pub fn subscribe<F>(&self, listener: F) -> ListenerId
	where
		F: Fn(&Event) + Send + Sync + 'static,
	{
		let listener = Arc::new(listener);
		let id = self.listeners.load().len();
		self.listeners.rcu(|old| {
			let mut new = (**old).clone();
			new.push(listener.clone());
			new
		});
		ListenerId(id)
	}

	/// Emit an event to all listeners
	///
	/// A panicking listener is caught so it cannot fail the emitting task or
	/// silence the listeners registered after it.
	pub fn emit(&self, event: Event) {
		let listeners = self.listeners.load();
		for listener in listeners.iter() {
			let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
				listener(&event);
			}));
		}
	}

	/// Emit an attempt event for one member fetch
	pub fn attempt(&self, cache: &str, key: &str) {
		self.emit(Event::Attempt {
			cache: cache.to_string(),
			key: key.to_string(),
		});
	}

	/// Emit a success event for one member fetch
	pub fn success(&self, cache: &str) {
		self.emit(Event::Success {
			cache: cache.to_string(),
		});
	}

	/// Emit a failure event for one member fetch
	pub fn failure(&self, cache: &str, message: String) {
		self.emit(Event::Failure {
			cache: cache.to_string(),
			message,
		});
	}

	/// Emit a consistency diagnostic
	pub fn inconsistency(&self, kind: InconsistencyKind) {
		self.emit(Event::Inconsistency { kind });
	}

	/// Emit a warning event
	pub fn warn(&self, message: String) {
		self.emit(Event::Warning { message });
	}

	/// Emit an error event
	pub fn error(&self, message: String) {
		self.emit(Event::Error { message });
	}

	/// Emit a log event
	pub fn log(&self, level: LogLevel, target: &str, message: String) {
		self.emit(Event::Log {
			level,
			target: target.to_string(),
			message,
		});
	}
}

impl Default for EventBus {
	fn default() -> Self {
		Self::new()
	}
}

/// Adapter to forward log crate events to the event bus
pub struct LogAdapter {
	event_bus: EventBus,
}

impl LogAdapter {
	/// Create a new log adapter
	pub fn new(event_bus: EventBus) -> Self {
		Self { event_bus }
	}
}

impl log::Log for LogAdapter {
	fn enabled(&self, _metadata: &log::Metadata) -> bool {
		true
	}

	fn log(&self, record: &log::Record) {
		let level = match record.level() {
			log::Level::Error => LogLevel::Error,
			log::Level::Warn => LogLevel::Warn,
			log::Level::Info => LogLevel::Info,
			log::Level::Debug => LogLevel::Debug,
			log::Level::Trace => LogLevel::Trace,
		};

		self.event_bus.log(level, record.target(), format!("{}", record.args()));
	}

	fn flush(&self) {}
}

impl EventBus {
	/// Create a log adapter that forwards log crate events to the event bus
	pub fn create_log_adapter(&self) -> LogAdapter {
		LogAdapter::new(self.clone())
	}
}
