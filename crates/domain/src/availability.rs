// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room availability over dates.

use crate::booking::Booking;
use crate::error::DomainError;
use crate::room::RoomNumber;
use crate::stay::{horizon_dates, ranges_overlap};
use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// Horizon used when the caller does not choose one.
pub const DEFAULT_HORIZON_DAYS: u16 = 30;

/// Calendar date to the set of rooms with no active booking on that night.
pub type AvailabilityGrid = BTreeMap<Date, BTreeSet<RoomNumber>>;

/// Returns true if no active booking of `room_number` overlaps
/// `[check_in, check_out)`.
///
/// This function is pure and only considers the bookings it is given.
#[must_use]
pub fn is_room_available(
    bookings: &[Booking],
    room_number: RoomNumber,
    check_in: Date,
    check_out: Date,
) -> bool {
    !bookings.iter().any(|booking| {
        booking.status.is_active()
            && booking.room_number == room_number
            && ranges_overlap(booking.check_in(), booking.check_out(), check_in, check_out)
    })
}

/// Builds the availability grid for `days` consecutive dates from `start`.
///
/// Every date starts with every room in `rooms`; each active booking then
/// removes its room from the dates where `[check_in, check_out)` meets the
/// horizon. Bookings for rooms not in `rooms` are ignored.
///
/// # Arguments
///
/// * `rooms` - The rooms to report on
/// * `bookings` - Candidate bookings; inactive ones are skipped
/// * `start` - First date of the horizon (normally today)
/// * `days` - Number of dates in the horizon
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the horizon runs past the
/// last representable date.
pub fn compute_availability_grid(
    rooms: &[RoomNumber],
    bookings: &[Booking],
    start: Date,
    days: u16,
) -> Result<AvailabilityGrid, DomainError> {
    let all_rooms: BTreeSet<RoomNumber> = rooms.iter().copied().collect();
    let mut grid: AvailabilityGrid = horizon_dates(start, days)?
        .into_iter()
        .map(|date| (date, all_rooms.clone()))
        .collect();

    for booking in bookings.iter().filter(|b| b.status.is_active()) {
        // StayRange guarantees check_in < check_out, so the range is well formed.
        for (_, free_rooms) in grid.range_mut(booking.check_in()..booking.check_out()) {
            free_rooms.remove(&booking.room_number);
        }
    }

    Ok(grid)
}
