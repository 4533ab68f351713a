// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use parking_lot::Mutex;
use std::sync::Arc;
use time::{Date, OffsetDateTime};

/// Source of "today" for date validation and the availability horizon.
pub trait Clock: Send + Sync {
    fn today(&self) -> Date;
}

/// The current UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// A clock pinned to a settable date.
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<Date>,
}

impl FixedClock {
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    pub fn set_today(&self, today: Date) {
        *self.today.lock() = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        *self.today.lock()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> Date {
        (**self).today()
    }
}
