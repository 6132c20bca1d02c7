//! Milliunit type for representing currency amounts
//!
//! The budgeting service stores every amount as an integer number of
//! milliunits (1/1000 of the currency unit). Arithmetic stays in integers;
//! conversion to a float only happens at publication time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of milliunits in one whole currency unit
pub const MILLIUNITS_PER_UNIT: i64 = 1000;

/// A monetary amount stored as milliunits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milliunits(i64);

impl Milliunits {
    /// Create an amount from raw milliunits
    ///
    /// # Examples
    /// ```
    /// use ynab_metrics::models::Milliunits;
    /// let amount = Milliunits::new(150_000); // 150.000
    /// assert_eq!(amount.to_units(), 150.0);
    /// ```
    pub const fn new(milliunits: i64) -> Self {
        Self(milliunits)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw milliunit value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Convert to currency units for publication
    ///
    /// This is the only place milliunits become a float.
    pub fn to_units(&self) -> f64 {
        self.0 as f64 / MILLIUNITS_PER_UNIT as f64
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that returns `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Subtraction that returns `None` on overflow
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Truncating division that returns `None` for a zero divisor or overflow
    pub const fn checked_div(self, divisor: i64) -> Option<Self> {
        match self.0.checked_div(divisor) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl Default for Milliunits {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Milliunits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = (self.0 / MILLIUNITS_PER_UNIT).abs();
        let frac = (self.0 % MILLIUNITS_PER_UNIT).abs();
        if self.is_negative() {
            write!(f, "-{}.{:03}", whole, frac)
        } else {
            write!(f, "{}.{:03}", whole, frac)
        }
    }
}
