// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use hotel_desk_domain::{BookingId, BookingStatus, NewBooking};
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Inserts a booking in the `Confirmed` state and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    booking: &NewBooking,
) -> Result<BookingId, PersistenceError> {
    diesel::insert_into(bookings::table)
        .values((
            bookings::room_number.eq(i64::from(booking.room_number.value())),
            bookings::customer_name.eq(&booking.customer.name),
            bookings::customer_email.eq(&booking.customer.email),
            bookings::customer_phone.eq(&booking.customer.phone),
            bookings::check_in.eq(booking.stay.check_in().to_string()),
            bookings::check_out.eq(booking.stay.check_out().to_string()),
            bookings::status.eq(BookingStatus::Confirmed.as_str()),
            bookings::total_amount.eq(booking.total_amount.to_string()),
            bookings::booked_on.eq(booking.booked_on.to_string()),
        ))
        .execute(conn)?;

    let booking_id: i64 = get_last_insert_rowid(conn)?;
    info!(
        booking_id,
        room_number = booking.room_number.value(),
        "Inserted booking row"
    );
    Ok(BookingId::new(booking_id))
}

/// Overwrites a booking's status.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_booking_status(
    conn: &mut SqliteConnection,
    booking_id: BookingId,
    status: BookingStatus,
) -> Result<bool, PersistenceError> {
    let rows_affected: usize =
        diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id.value())))
            .set(bookings::status.eq(status.as_str()))
            .execute(conn)?;

    debug!(
        booking_id = booking_id.value(),
        status = status.as_str(),
        rows_affected,
        "Updated booking status"
    );
    Ok(rows_affected > 0)
}
