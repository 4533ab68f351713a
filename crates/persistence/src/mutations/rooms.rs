// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use hotel_desk_domain::{Amenity, Room, RoomNumber};
use tracing::{debug, info};

use crate::diesel_schema::rooms;
use crate::error::PersistenceError;

/// Inserts a room. The room number must not already exist.
///
/// # Errors
///
/// Returns an error if the insert fails, including on a duplicate number.
pub fn insert_room(conn: &mut SqliteConnection, room: &Room) -> Result<(), PersistenceError> {
    diesel::insert_into(rooms::table)
        .values((
            rooms::room_number.eq(i64::from(room.room_number.value())),
            rooms::room_type.eq(room.room_type.as_str()),
            rooms::status.eq(room.status.as_str()),
            rooms::floor.eq(room.floor),
            rooms::amenities.eq(Amenity::join(&room.amenities)),
            rooms::price.eq(room.price.to_string()),
        ))
        .execute(conn)?;

    info!(room_number = room.room_number.value(), "Inserted room row");
    Ok(())
}

/// Overwrites every attribute of the room with the same number.
///
/// The sequence column is untouched, so the room keeps its position.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_room(conn: &mut SqliteConnection, room: &Room) -> Result<bool, PersistenceError> {
    let rows_affected: usize = diesel::update(
        rooms::table.filter(rooms::room_number.eq(i64::from(room.room_number.value()))),
    )
    .set((
        rooms::room_type.eq(room.room_type.as_str()),
        rooms::status.eq(room.status.as_str()),
        rooms::floor.eq(room.floor),
        rooms::amenities.eq(Amenity::join(&room.amenities)),
        rooms::price.eq(room.price.to_string()),
    ))
    .execute(conn)?;

    debug!(
        room_number = room.room_number.value(),
        rows_affected, "Updated room row"
    );
    Ok(rows_affected > 0)
}

/// Deletes a room by number.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_room(
    conn: &mut SqliteConnection,
    room_number: RoomNumber,
) -> Result<bool, PersistenceError> {
    let rows_affected: usize = diesel::delete(
        rooms::table.filter(rooms::room_number.eq(i64::from(room_number.value()))),
    )
    .execute(conn)?;

    debug!(
        room_number = room_number.value(),
        rows_affected, "Deleted room row"
    );
    Ok(rows_affected > 0)
}
