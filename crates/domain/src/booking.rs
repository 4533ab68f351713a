// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking types and the booking lifecycle.
//!
//! ```text
//! Confirmed --check_in-->  CheckedIn --check_out--> CheckedOut
//! Confirmed --cancel-->    Cancelled
//! CheckedIn --cancel-->    Cancelled
//! ```
//!
//! `CheckedOut` and `Cancelled` are terminal.

use crate::error::DomainError;
use crate::room::RoomNumber;
use crate::stay::StayRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Ledger-assigned booking identifier. Monotonic per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Booking lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// Operator action that moves a booking through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingTransition {
    CheckIn,
    CheckOut,
    Cancel,
}

impl BookingTransition {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CheckIn => "check_in",
            Self::CheckOut => "check_out",
            Self::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for BookingTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true if a booking in this state occupies its room.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }

    /// Returns true if no transition leaves this state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }

    /// Statuses from which `transition` is permitted.
    #[must_use]
    pub const fn sources_for(transition: BookingTransition) -> &'static [Self] {
        match transition {
            BookingTransition::CheckIn => &[Self::Confirmed],
            BookingTransition::CheckOut => &[Self::CheckedIn],
            BookingTransition::Cancel => &[Self::Confirmed, Self::CheckedIn],
        }
    }

    /// Returns the state reached by applying `transition`, or `None` if the
    /// transition is not permitted from this state.
    #[must_use]
    pub const fn after(&self, transition: BookingTransition) -> Option<Self> {
        match (self, transition) {
            (Self::Confirmed, BookingTransition::CheckIn) => Some(Self::CheckedIn),
            (Self::CheckedIn, BookingTransition::CheckOut) => Some(Self::CheckedOut),
            (Self::Confirmed | Self::CheckedIn, BookingTransition::Cancel) => {
                Some(Self::Cancelled)
            }
            _ => None,
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Guest contact details captured with a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    #[must_use]
    pub const fn new(name: String, email: String, phone: String) -> Self {
        Self { name, email, phone }
    }
}

/// A request to reserve a room, before the ledger has accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub room_number: RoomNumber,
    pub customer: Customer,
    pub check_in: Date,
    pub check_out: Date,
    pub total_amount: Decimal,
}

/// A booking accepted by the ledger and ready to be stored.
///
/// The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub room_number: RoomNumber,
    pub customer: Customer,
    pub stay: StayRange,
    pub total_amount: Decimal,
    pub booked_on: Date,
}

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub booking_id: BookingId,
    /// Room reference by value. Whether the room exists is the caller's concern.
    pub room_number: RoomNumber,
    pub customer: Customer,
    pub stay: StayRange,
    pub status: BookingStatus,
    pub total_amount: Decimal,
    pub booked_on: Date,
}

impl Booking {
    /// Builds the stored form of a new booking. New bookings start `Confirmed`.
    #[must_use]
    pub fn from_new(booking_id: BookingId, new_booking: NewBooking) -> Self {
        Self {
            booking_id,
            room_number: new_booking.room_number,
            customer: new_booking.customer,
            stay: new_booking.stay,
            status: BookingStatus::Confirmed,
            total_amount: new_booking.total_amount,
            booked_on: new_booking.booked_on,
        }
    }

    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.stay.check_in()
    }

    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.stay.check_out()
    }

    /// Returns true if this booking holds `room_number` for any night of `stay`.
    #[must_use]
    pub fn blocks(&self, room_number: RoomNumber, stay: &StayRange) -> bool {
        self.status.is_active() && self.room_number == room_number && self.stay.overlaps(stay)
    }
}
