// core/src/clock.rs

//! Time access for records.
//!
//! Records never read the wall clock directly. Every operation that stamps a
//! time has a `*_with` form taking a [`Clock`], and the plain form delegates
//! to [`SystemClock`]. Tests drive time with a [`ManualClock`].

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// A source of "now".
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// A clock that only moves when told to.
///
/// With a non-zero `tick`, every call to [`Clock::now`] returns the current
/// instant and then advances it by `tick`, which makes consecutive reads
/// strictly increasing without sleeping.
#[derive(Debug)]
pub struct ManualClock {
  current: Mutex<DateTime<Utc>>,
  tick: Duration,
}

impl ManualClock {
  pub fn new(start: DateTime<Utc>) -> Self {
    Self::ticking(start, Duration::zero())
  }

  pub fn ticking(start: DateTime<Utc>, tick: Duration) -> Self {
    ManualClock {
      current: Mutex::new(start),
      tick,
    }
  }

  /// Moves the clock forward (or backward, for a negative duration).
  pub fn advance(&self, by: Duration) {
    let mut current = self.current.lock();
    *current += by;
  }

  pub fn set(&self, to: DateTime<Utc>) {
    *self.current.lock() = to;
  }

  /// The instant the next `now()` will return, without ticking.
  pub fn peek(&self) -> DateTime<Utc> {
    *self.current.lock()
  }
}

impl Clock for ManualClock {
  fn now(&self) -> DateTime<Utc> {
    let mut current = self.current.lock();
    let now = *current;
    *current += self.tick;
    now
  }
}

impl<C: Clock + ?Sized> Clock for &C {
  fn now(&self) -> DateTime<Utc> {
    (**self).now()
  }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
  fn now(&self) -> DateTime<Utc> {
    (**self).now()
  }
}
