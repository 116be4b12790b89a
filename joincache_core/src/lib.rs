//! Core building blocks for cache aggregation: the opaque value type, the
//! per-member fetch outcome, the member capability trait, the event bus, and
//! pool sizing.

mod concurrency;
pub use concurrency::PoolLimits;

mod events;
pub use events::{Event, EventBus, InconsistencyKind, ListenerId, LogAdapter, LogLevel};

mod traits;
pub use traits::CacheReadTrait;

mod types;
pub use types::{Blob, FetchOutcome};
