// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod account;
mod availability;
mod booking;
mod error;
mod room;
mod stay;
mod validation;

#[cfg(test)]
mod tests;

pub use account::{Account, NewAccount, Role, Username};
pub use availability::{
    AvailabilityGrid, DEFAULT_HORIZON_DAYS, compute_availability_grid, is_room_available,
};
pub use booking::{
    Booking, BookingId, BookingRequest, BookingStatus, BookingTransition, Customer, NewBooking,
};
pub use error::DomainError;
pub use room::{Amenity, Room, RoomNumber, RoomStatus, RoomType};
pub use stay::{StayRange, horizon_dates, ranges_overlap};
pub use validation::{
    MIN_PASSWORD_LENGTH, validate_customer, validate_new_account, validate_room,
    validate_stay_dates,
};

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<time::Date, DomainError> {
    time::Date::parse(
        value,
        time::macros::format_description!("[year]-[month]-[day]"),
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}
