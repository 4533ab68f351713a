// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use hotel_desk_domain::{Room, RoomNumber};
use tracing::debug;

use crate::data_models::RoomRow;
use crate::diesel_schema::rooms;
use crate::error::PersistenceError;

/// Lists every room in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or a row is corrupt.
pub fn list_rooms(conn: &mut SqliteConnection) -> Result<Vec<Room>, PersistenceError> {
    let rows: Vec<RoomRow> = rooms::table
        .order(rooms::room_seq.asc())
        .select(RoomRow::as_select())
        .load(conn)?;

    debug!(room_count = rows.len(), "Loaded rooms");
    rows.into_iter().map(RoomRow::into_room).collect()
}

/// Retrieves a room by number.
///
/// # Errors
///
/// Returns an error if the query fails or the row is corrupt.
/// Returns `Ok(None)` if the room is not found.
pub fn find_room(
    conn: &mut SqliteConnection,
    room_number: RoomNumber,
) -> Result<Option<Room>, PersistenceError> {
    let row: Option<RoomRow> = rooms::table
        .filter(rooms::room_number.eq(i64::from(room_number.value())))
        .select(RoomRow::as_select())
        .first(conn)
        .optional()?;

    row.map(RoomRow::into_room).transpose()
}
