//! Unit types for line quantities.
//!
//! Keeps tick durations, color readings and cycle counts apart at compile time.

use core::ops::Add;

use serde::Deserialize;

/// Duration in controller ticks.
///
/// One tick lasts `tick_us` microseconds (see [`LineConfig`](super::LineConfig)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Ticks(pub u32);

impl Ticks {
    /// Zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Create a new Ticks value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check for a zero-length duration.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Total microseconds for a given tick period.
    #[inline]
    pub fn as_micros(self, tick_us: u32) -> u64 {
        self.0 as u64 * tick_us as u64
    }
}

impl Add for Ticks {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

/// Quantized color sensor value.
///
/// With the default scaling this is the sensor voltage multiplied by 1024,
/// so a 5 V reference spans 0..=5120.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct ColorReading(pub u16);

impl ColorReading {
    /// Create a new ColorReading value.
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

/// Remaining sort cycles.
///
/// Only ever counts down; a run ends when it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct CycleCount(u16);

impl CycleCount {
    /// Create a new count.
    #[inline]
    pub const fn new(cycles: u16) -> Self {
        Self(cycles)
    }

    /// Get the raw value.
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// True once no cycles remain.
    #[inline]
    pub const fn is_exhausted(self) -> bool {
        self.0 == 0
    }

    /// Count after one more completed cycle.
    ///
    /// Returns `None` when already exhausted.
    #[inline]
    pub const fn decremented(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_count_counts_down_to_zero() {
        let mut count = CycleCount::new(3);
        let mut seen = 0;
        while let Some(next) = count.decremented() {
            assert_eq!(next.get() + 1, count.get());
            count = next;
            seen += 1;
        }
        assert_eq!(seen, 3);
        assert!(count.is_exhausted());
        assert_eq!(count.decremented(), None);
    }

    #[test]
    fn test_ticks_to_micros() {
        assert_eq!(Ticks(200).as_micros(1000), 200_000);
        assert_eq!(Ticks::ZERO.as_micros(1000), 0);
        assert_eq!((Ticks(u32::MAX) + Ticks(1)).value(), u32::MAX);
    }
}
