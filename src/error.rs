//! Error types for debouncer construction.
//!
//! Construction is the only fallible operation in this crate. Once a
//! [`Debouncer`](crate::Debouncer) exists, every call either arms a timer or
//! re-arms one; there is nothing left to fail. Faults raised by the wrapped
//! callback during its deferred firing are contained by the runtime's task
//! boundary and are deliberately not wrapped here.

use std::time::Duration;
use thiserror::Error;

/// Longest wait accepted at wrapper-creation time.
///
/// Tokio's timer refuses sleeps much past two years. A wait beyond that range
/// is rejected up front instead of surfacing as a panic inside the deferred
/// timer task.
pub const MAX_WAIT: Duration = Duration::from_millis((1u64 << 36) - 1);

/// Errors surfaced when building a debouncer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DebounceError {
  /// The requested wait exceeds [`MAX_WAIT`].
  #[error("wait of {0:?} exceeds the supported maximum of {MAX_WAIT:?}")]
  WaitTooLong(Duration),
}
