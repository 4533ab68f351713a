// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-open stay ranges and the overlap rule.
//!
//! A stay occupies its check-in night through the night before check-out.
//! The room is free again on the check-out date, so `[10th, 15th)` and
//! `[15th, 20th)` never collide.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::Serialize;
use time::{Date, Duration};

/// Returns true if `[in_a, out_a)` and `[in_b, out_b)` share at least one night.
#[must_use]
pub fn ranges_overlap(in_a: Date, out_a: Date, in_b: Date, out_b: Date) -> bool {
    !(out_a <= in_b || in_a >= out_b)
}

/// A validated `[check_in, check_out)` range with at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayRange {
    check_in: Date,
    check_out: Date,
}

impl StayRange {
    /// Creates a stay range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `check_out` is not strictly
    /// after `check_in`.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidDateRange {
                check_in,
                check_out,
                reason: String::from("Check-out date must be after check-in date"),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Number of nights in the stay. Always at least one.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }

    /// Returns true if the two stays share at least one night.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        ranges_overlap(
            self.check_in,
            self.check_out,
            other.check_in,
            other.check_out,
        )
    }

    /// Returns true if the room is occupied on the night of `date`.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Computes the total charge for the stay at a nightly price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AmountOverflow` if the product cannot be represented.
    pub fn total_for(&self, nightly_price: Decimal) -> Result<Decimal, DomainError> {
        nightly_price
            .checked_mul(Decimal::from(self.nights()))
            .ok_or_else(|| DomainError::AmountOverflow {
                operation: format!(
                    "pricing {} nights at {nightly_price}",
                    self.nights()
                ),
            })
    }
}

/// Returns `count` consecutive dates starting at `start`.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the horizon runs past the
/// last representable date.
pub fn horizon_dates(start: Date, count: u16) -> Result<Vec<Date>, DomainError> {
    (0..i64::from(count))
        .map(|offset| {
            start
                .checked_add(Duration::days(offset))
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: format!("extending horizon from {start} by {offset} days"),
                })
        })
        .collect()
}
