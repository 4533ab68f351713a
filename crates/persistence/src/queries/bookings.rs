// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use hotel_desk_domain::{Booking, BookingId, RoomNumber};
use tracing::debug;

use crate::data_models::BookingRow;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Lists every booking in id order.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_bookings(conn: &mut SqliteConnection) -> Result<Vec<Booking>, PersistenceError> {
    let rows: Vec<BookingRow> = bookings::table
        .order(bookings::booking_id.asc())
        .select(BookingRow::as_select())
        .load(conn)?;

    debug!(booking_count = rows.len(), "Loaded bookings");
    rows.into_iter().map(BookingRow::into_booking).collect()
}

/// Retrieves a booking by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row is corrupt.
/// Returns `Ok(None)` if the booking is not found.
pub fn find_booking(
    conn: &mut SqliteConnection,
    booking_id: BookingId,
) -> Result<Option<Booking>, PersistenceError> {
    let row: Option<BookingRow> = bookings::table
        .filter(bookings::booking_id.eq(booking_id.value()))
        .select(BookingRow::as_select())
        .first(conn)
        .optional()?;

    row.map(BookingRow::into_booking).transpose()
}

/// Lists the bookings of one room in any state.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn bookings_for_room(
    conn: &mut SqliteConnection,
    room_number: RoomNumber,
) -> Result<Vec<Booking>, PersistenceError> {
    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::room_number.eq(i64::from(room_number.value())))
        .order(bookings::booking_id.asc())
        .select(BookingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(BookingRow::into_booking).collect()
}
