//! Debounce wrapper around a callback and its bound context.
//!
//! A [`Debouncer`] is the stateful callable produced by wrapping a callback:
//! every [`call`](Debouncer::call) records the freshest arguments and re-arms
//! a single timer, so the callback fires at most once per burst, exactly one
//! quiet period after the burst's last call. Timers are the host runtime's
//! delayed tasks: scheduling is `tokio::spawn` + `tokio::time::sleep`,
//! cancellation is `JoinHandle::abort`.

use crate::error::{DebounceError, MAX_WAIT};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

// Receiver-first, like a bound method call.
type Callback<C, T> = Arc<dyn Fn(&C, T) + Send + Sync>;

/// Immutable half of the wrapper, shared with each spawned timer task.
struct Shared<C, T> {
  context: C,
  callback: Callback<C, T>,
}

/// A trailing-edge debounced wrapper around a callback.
///
/// The wrapper holds the callback, the context it is bound to, and at most
/// one pending timer. Calls coalesce: only the arguments of the last call in
/// a burst reach the callback, one full wait after that call.
///
/// The wrapper is reusable indefinitely; after a firing it simply returns to
/// the idle state and the next call starts a fresh burst.
///
/// Dropping the wrapper does not cancel an armed timer. As with most host
/// timer facilities, a firing that is already scheduled still happens; the
/// timer task owns everything it needs.
///
/// # Example
///
/// ```rust,no_run
/// use quiesce::Debouncer;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), quiesce::DebounceError> {
/// let window = "main".to_string();
/// let on_resize = Debouncer::new(Duration::from_millis(100), window, |window, (w, h): (u32, u32)| {
///   println!("{window} resized to {w}x{h}");
/// })?;
///
/// on_resize.call((800, 600));
/// on_resize.call((1024, 768)); // supersedes the first call
/// # Ok(())
/// # }
/// ```
pub struct Debouncer<C, T>
where
  C: Send + Sync + 'static,
  T: Send + 'static,
{
  wait: Duration,
  name: Option<String>,
  shared: Arc<Shared<C, T>>,
  /// Pending timer slot. The lock makes cancel-then-replace atomic, so at
  /// most one live timer exists per wrapper at any time.
  pending: Mutex<Option<JoinHandle<()>>>,
}

impl<C, T> Debouncer<C, T>
where
  C: Send + Sync + 'static,
  T: Send + 'static,
{
  /// Creates a debounced wrapper around `callback`, bound to `context`.
  ///
  /// The callback receives the bound context by reference and the forwarded
  /// arguments by value. Wrap multiple arguments in a tuple or struct at the
  /// call site.
  ///
  /// Fails fast with [`DebounceError::WaitTooLong`] if `wait` is beyond the
  /// host timer's supported range. A zero `wait` is valid: the timer fires on
  /// the next timer tick, still strictly after `call` returns.
  pub fn new<F>(wait: Duration, context: C, callback: F) -> Result<Self, DebounceError>
  where
    F: Fn(&C, T) + Send + Sync + 'static,
  {
    if wait > MAX_WAIT {
      return Err(DebounceError::WaitTooLong(wait));
    }
    Ok(Self {
      wait,
      name: None,
      shared: Arc::new(Shared {
        context,
        callback: Arc::new(callback),
      }),
      pending: Mutex::new(None),
    })
  }

  /// Sets a name for this wrapper, used in its diagnostic log line.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = Some(name);
    self
  }

  /// Records `args` and (re-)arms the timer.
  ///
  /// Any previously recorded arguments are discarded and any pending timer is
  /// cancelled before the new one is scheduled; `wait` after the last call in
  /// a burst, the callback fires once with that call's arguments. Returns
  /// immediately, never blocks.
  ///
  /// A panic raised by the callback during the deferred firing stays inside
  /// the timer task, where the runtime contains it; the wrapper neither
  /// catches nor logs it, and remains usable afterwards.
  ///
  /// # Panics
  ///
  /// Panics if called outside a Tokio runtime, since the timer is a spawned
  /// task.
  pub fn call(&self, args: T) {
    trace!(
      debouncer = self.name.as_deref().unwrap_or("debouncer"),
      wait_ms = self.wait.as_millis() as u64,
      "call recorded, re-arming timer"
    );

    let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(previous) = pending.take() {
      previous.abort();
    }

    let shared = Arc::clone(&self.shared);
    let wait = self.wait;
    *pending = Some(tokio::spawn(async move {
      tokio::time::sleep(wait).await;
      (shared.callback)(&shared.context, args);
    }));
  }

  /// Whether a timer is currently armed.
  ///
  /// `false` both before the first call and after a firing; `true` between a
  /// call and the end of its quiet period.
  pub fn is_pending(&self) -> bool {
    self
      .pending
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .as_ref()
      .is_some_and(|timer| !timer.is_finished())
  }

  /// The quiet period this wrapper was created with.
  pub fn wait(&self) -> Duration {
    self.wait
  }

  /// The name set via [`with_name`](Self::with_name), if any.
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// The context the callback is bound to.
  pub fn context(&self) -> &C {
    &self.shared.context
  }
}

impl<T> Debouncer<(), T>
where
  T: Send + 'static,
{
  /// Creates a debounced wrapper with no meaningful receiver.
  ///
  /// Convenience for callbacks that close over everything they need; the
  /// bound context is `()`.
  pub fn unbound<F>(wait: Duration, callback: F) -> Result<Self, DebounceError>
  where
    F: Fn(T) + Send + Sync + 'static,
  {
    Self::new(wait, (), move |_: &(), args| callback(args))
  }
}
