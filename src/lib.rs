//! # Quiesce
//!
//! Trailing-edge debounce for async Rust.
//!
//! Debouncing suppresses all but the last of a rapid sequence of events,
//! deferring the effect until the sequence pauses. Quiesce ships the primitive
//! in two forms:
//!
//! - [`Debouncer`]: wraps a callback and its bound context. Every
//!   [`call`](Debouncer::call) re-arms a timer; once the quiet period elapses
//!   the callback fires exactly once per burst, with the final call's
//!   arguments.
//! - [`DebounceExt::debounce`]: the same primitive lifted onto any
//!   [`futures::Stream`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quiesce::{DebounceError, Debouncer};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DebounceError> {
//!   let debounced = Debouncer::unbound(Duration::from_millis(100), |query: String| {
//!     println!("search for {query}");
//!   })?;
//!
//!   debounced.call("r".to_string());
//!   debounced.call("ru".to_string());
//!   debounced.call("rust".to_string());
//!
//!   // 100ms after the last call the callback fires once, with "rust".
//!   tokio::time::sleep(Duration::from_millis(150)).await;
//!   Ok(())
//! }
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Debounce wrapper around a callback and its bound context.
pub mod debouncer;
/// Error types for wrapper construction.
pub mod error;
/// Debounce combinator for streams.
pub mod stream;

pub use debouncer::Debouncer;
pub use error::{DebounceError, MAX_WAIT};
pub use stream::{DebounceExt, debounce};
