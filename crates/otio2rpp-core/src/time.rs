//! Time representation for interchange timelines
//!
//! A time value is a count expressed at its own rate (frames at 24 fps,
//! samples at 48 kHz, ...). No global frame rate is assumed: every value
//! carries the rate needed to turn it into seconds.

use serde::Deserialize;
use std::cmp::Ordering;
use std::ops::{Add, Sub};

use crate::error::{ConversionError, Result};

/// A point in time, as `value` units at `rate` units per second.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RationalTime {
    /// Count of units (frames, samples, ...)
    pub value: f64,
    /// Units per second
    pub rate: f64,
}

impl RationalTime {
    /// Create a new RationalTime of `value` units at `rate` units per second.
    #[inline]
    pub const fn new(value: f64, rate: f64) -> Self {
        Self { value, rate }
    }

    /// Convert to seconds as f64.
    #[inline]
    pub fn to_seconds(self) -> f64 {
        self.value / self.rate
    }

    /// Express this time at another rate.
    #[inline]
    pub fn rescaled_to(self, rate: f64) -> Self {
        if self.rate == rate {
            self
        } else {
            Self::new(self.value * rate / self.rate, rate)
        }
    }

    /// Zero time constant.
    pub const ZERO: Self = Self::new(0.0, 1.0);

    /// Reject values that cannot be converted to seconds.
    pub fn validate(self) -> Result<Self> {
        if !self.value.is_finite() {
            return Err(ConversionError::InvalidTime(format!(
                "value {} is not finite",
                self.value
            )));
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(ConversionError::InvalidTime(format!(
                "rate {} must be finite and positive",
                self.rate
            )));
        }
        if !self.to_seconds().is_finite() {
            return Err(ConversionError::InvalidTime(format!(
                "{} at rate {} does not fit in seconds",
                self.value, self.rate
            )));
        }
        Ok(self)
    }
}

/// Mixed-rate arithmetic happens at the larger of the two rates.
impl Add for RationalTime {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let rate = self.rate.max(rhs.rate);
        Self::new(
            self.rescaled_to(rate).value + rhs.rescaled_to(rate).value,
            rate,
        )
    }
}

impl Sub for RationalTime {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let rate = self.rate.max(rhs.rate);
        Self::new(
            self.rescaled_to(rate).value - rhs.rescaled_to(rate).value,
            rate,
        )
    }
}

/// Times compare by the instant they denote, whatever their rates.
impl PartialEq for RationalTime {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for RationalTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let rate = self.rate.max(other.rate);
        self.rescaled_to(rate)
            .value
            .partial_cmp(&other.rescaled_to(rate).value)
    }
}

/// A span of time: where it starts and how long it lasts.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TimeRange {
    /// Start time (inclusive)
    pub start_time: RationalTime,
    /// Duration of the range
    pub duration: RationalTime,
}

impl TimeRange {
    /// Create a new time range from start and duration.
    #[inline]
    pub fn new(start_time: RationalTime, duration: RationalTime) -> Self {
        Self {
            start_time,
            duration,
        }
    }

    /// Validate both ends of the range.
    pub fn validate(self) -> Result<Self> {
        self.start_time.validate()?;
        self.duration.validate()?;
        Ok(self)
    }

    /// Empty range starting at zero.
    pub const EMPTY: Self = Self {
        start_time: RationalTime::ZERO,
        duration: RationalTime::ZERO,
    };
}
