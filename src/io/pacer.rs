//! Tick-based delays and polling waits over an embedded-hal `DelayNs`.

use embedded_hal::delay::DelayNs;

use crate::config::units::Ticks;
use crate::error::Result;

/// Outcome of [`Pacer::wait_until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitOutcome {
    /// Condition observed after waiting this long.
    Ready(Ticks),
    /// Gave up after waiting this long.
    TimedOut(Ticks),
}

/// Converts ticks into delays on the injected delay provider.
///
/// This is the only place the controller suspends.
pub struct Pacer<D: DelayNs> {
    delay: D,
    tick_us: u32,
}

impl<D: DelayNs> Pacer<D> {
    /// Create a pacer with the given tick length in microseconds.
    pub fn new(delay: D, tick_us: u32) -> Self {
        Self { delay, tick_us }
    }

    /// Tick length in microseconds.
    #[inline]
    pub fn tick_us(&self) -> u32 {
        self.tick_us
    }

    /// Block for one tick.
    #[inline]
    pub fn tick(&mut self) {
        self.delay.delay_us(self.tick_us);
    }

    /// Block for a number of ticks.
    pub fn sleep(&mut self, ticks: Ticks) {
        for _ in 0..ticks.0 {
            self.tick();
        }
    }

    /// Poll `ready` until it returns `true`, sleeping `poll` between polls.
    ///
    /// `ready` is called before the first sleep, so an already-true
    /// condition returns `Ready(Ticks::ZERO)`. With `timeout` set, gives up
    /// once the accumulated wait reaches it. A zero `poll` still counts one
    /// tick per poll toward the timeout.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `ready`.
    pub fn wait_until<F>(&mut self, poll: Ticks, timeout: Option<Ticks>, mut ready: F) -> Result<WaitOutcome>
    where
        F: FnMut() -> Result<bool>,
    {
        let step = if poll.is_zero() { Ticks(1) } else { poll };
        let mut waited = Ticks::ZERO;

        loop {
            if ready()? {
                return Ok(WaitOutcome::Ready(waited));
            }
            if let Some(limit) = timeout {
                if waited >= limit {
                    return Ok(WaitOutcome::TimedOut(waited));
                }
            }
            self.sleep(poll);
            waited = waited + step;
        }
    }

    /// Release the delay provider.
    pub fn into_inner(self) -> D {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::{CheckedDelay, NoopDelay, Transaction as DelayTransaction};

    #[test]
    fn test_sleep_issues_one_delay_per_tick() {
        let mut delay = CheckedDelay::new(&[
            DelayTransaction::delay_us(1000),
            DelayTransaction::delay_us(1000),
            DelayTransaction::delay_us(1000),
        ]);
        let mut pacer = Pacer::new(delay.clone(), 1000);
        pacer.sleep(Ticks(3));
        delay.done();
    }

    #[test]
    fn test_wait_until_ready_immediately() {
        let mut pacer = Pacer::new(NoopDelay::new(), 1000);
        let outcome = pacer.wait_until(Ticks(1), None, || Ok(true)).unwrap();
        assert_eq!(outcome, WaitOutcome::Ready(Ticks::ZERO));
    }

    #[test]
    fn test_wait_until_counts_polls() {
        let mut pacer = Pacer::new(NoopDelay::new(), 1000);
        let mut polls = 0;
        let outcome = pacer
            .wait_until(Ticks(2), None, || {
                polls += 1;
                Ok(polls == 4)
            })
            .unwrap();
        assert_eq!(outcome, WaitOutcome::Ready(Ticks(6)));
    }

    #[test]
    fn test_wait_until_times_out() {
        let mut pacer = Pacer::new(NoopDelay::new(), 1000);
        let outcome = pacer.wait_until(Ticks(1), Some(Ticks(5)), || Ok(false)).unwrap();
        assert_eq!(outcome, WaitOutcome::TimedOut(Ticks(5)));
    }

    #[test]
    fn test_zero_poll_timeout_still_terminates() {
        let mut pacer = Pacer::new(NoopDelay::new(), 1000);
        let outcome = pacer.wait_until(Ticks::ZERO, Some(Ticks(3)), || Ok(false)).unwrap();
        assert_eq!(outcome, WaitOutcome::TimedOut(Ticks(3)));
    }
}
