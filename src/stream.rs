//! Debounce combinator for streams.
//!
//! Lifts the trailing-edge primitive onto [`futures::Stream`]: an item is
//! yielded only once the source has been quiet for the configured wait, and
//! rapid items overwrite one another so the last value in a burst wins.

use futures::{Stream, StreamExt};
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::trace;

/// Debounces `source`, yielding an item once `wait` has elapsed without a
/// newer one arriving.
///
/// Each incoming item replaces the previously held one and resets the timer.
/// When the source ends, a still-held item is flushed immediately, since no
/// later item can supersede it anymore.
pub fn debounce<S>(source: S, wait: Duration) -> impl Stream<Item = S::Item>
where
  S: Stream,
{
  async_stream::stream! {
    let delay = time::sleep(wait);
    tokio::pin!(source, delay);
    let mut pending: Option<S::Item> = None;

    loop {
      tokio::select! {
        maybe_item = source.next() => match maybe_item {
          Some(item) => {
            trace!("item recorded, re-arming debounce timer");
            pending = Some(item);
            delay.as_mut().reset(Instant::now() + wait);
          }
          None => {
            if let Some(item) = pending.take() {
              yield item;
            }
            break;
          }
        },
        _ = &mut delay, if pending.is_some() => {
          if let Some(item) = pending.take() {
            yield item;
          }
        }
      }
    }
  }
}

/// Extension trait attaching [`debounce`] to any stream.
pub trait DebounceExt: Stream {
  /// Debounces this stream with the given quiet period.
  fn debounce(self, wait: Duration) -> impl Stream<Item = Self::Item>
  where
    Self: Sized,
  {
    debounce(self, wait)
  }
}

impl<S: Stream> DebounceExt for S {}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::stream;
  use tokio_test::{assert_pending, assert_ready_eq, task};

  #[tokio::test]
  async fn test_debounce_burst_collapses_to_last_item() {
    let out: Vec<i32> = debounce(stream::iter(vec![1, 2, 3, 4, 5]), Duration::from_millis(100))
      .collect()
      .await;

    assert_eq!(out, vec![5]);
  }

  #[tokio::test]
  async fn test_debounce_empty_source_yields_nothing() {
    let out: Vec<i32> = debounce(stream::iter(Vec::<i32>::new()), Duration::from_millis(100))
      .collect()
      .await;

    assert_eq!(out, Vec::<i32>::new());
  }

  #[tokio::test(start_paused = true)]
  async fn test_debounce_spaced_items_all_pass() {
    let source = async_stream::stream! {
      yield 1;
      time::sleep(Duration::from_millis(50)).await;
      yield 2;
    };

    let out: Vec<i32> = source.debounce(Duration::from_millis(20)).collect().await;

    // 1 fires at t=20; 2 arrives at t=50 and is flushed when the source ends.
    assert_eq!(out, vec![1, 2]);
  }

  #[tokio::test(start_paused = true)]
  async fn test_debounce_holds_item_until_quiet_period_elapses() {
    let (tx, rx) = futures::channel::mpsc::unbounded();
    let mut debounced = task::spawn(debounce(rx, Duration::from_millis(100)));

    tx.unbounded_send(1).unwrap();
    assert_pending!(debounced.poll_next());

    time::advance(Duration::from_millis(60)).await;
    assert_pending!(debounced.poll_next());

    // A fresh item re-arms the timer before the first one can fire.
    tx.unbounded_send(2).unwrap();
    assert_pending!(debounced.poll_next());

    time::advance(Duration::from_millis(60)).await;
    assert_pending!(debounced.poll_next());

    time::advance(Duration::from_millis(40)).await;
    assert_ready_eq!(debounced.poll_next(), Some(2));

    drop(tx);
    assert_ready_eq!(debounced.poll_next(), None);
  }
}
