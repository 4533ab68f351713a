// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store trait implementations. Each store owns one connection.

use diesel::SqliteConnection;
use hotel_desk::{
    AccountRecord, AccountStore, BookingStore, RoomStore, StorageError, StoredAccount,
};
use hotel_desk_domain::{
    Account, Booking, BookingId, BookingStatus, NewBooking, Room, RoomNumber, Username,
};

use crate::error::PersistenceError;
use crate::{mutations, queries};

/// `RoomStore` over the `rooms` table.
pub struct SqliteRoomStore {
    conn: SqliteConnection,
}

impl SqliteRoomStore {
    pub(crate) const fn new(conn: SqliteConnection) -> Self {
        Self { conn }
    }
}

impl RoomStore for SqliteRoomStore {
    fn insert_room(&mut self, room: &Room) -> Result<(), StorageError> {
        Ok(mutations::rooms::insert_room(&mut self.conn, room)?)
    }

    fn list_rooms(&mut self) -> Result<Vec<Room>, StorageError> {
        Ok(queries::rooms::list_rooms(&mut self.conn)?)
    }

    fn find_room(&mut self, room_number: RoomNumber) -> Result<Option<Room>, StorageError> {
        Ok(queries::rooms::find_room(&mut self.conn, room_number)?)
    }

    fn replace_room(&mut self, room: &Room) -> Result<bool, StorageError> {
        Ok(mutations::rooms::update_room(&mut self.conn, room)?)
    }

    fn remove_room(&mut self, room_number: RoomNumber) -> Result<bool, StorageError> {
        Ok(mutations::rooms::delete_room(&mut self.conn, room_number)?)
    }
}

/// `BookingStore` over the `bookings` table.
pub struct SqliteBookingStore {
    conn: SqliteConnection,
}

impl SqliteBookingStore {
    pub(crate) const fn new(conn: SqliteConnection) -> Self {
        Self { conn }
    }
}

impl BookingStore for SqliteBookingStore {
    fn insert_booking(&mut self, booking: NewBooking) -> Result<Booking, StorageError> {
        let booking_id: BookingId = mutations::bookings::insert_booking(&mut self.conn, &booking)?;
        Ok(Booking::from_new(booking_id, booking))
    }

    fn list_bookings(&mut self) -> Result<Vec<Booking>, StorageError> {
        Ok(queries::bookings::list_bookings(&mut self.conn)?)
    }

    fn find_booking(&mut self, booking_id: BookingId) -> Result<Option<Booking>, StorageError> {
        Ok(queries::bookings::find_booking(&mut self.conn, booking_id)?)
    }

    fn bookings_for_room(
        &mut self,
        room_number: RoomNumber,
    ) -> Result<Vec<Booking>, StorageError> {
        Ok(queries::bookings::bookings_for_room(
            &mut self.conn,
            room_number,
        )?)
    }

    fn update_status(
        &mut self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<bool, StorageError> {
        Ok(mutations::bookings::update_booking_status(
            &mut self.conn,
            booking_id,
            status,
        )?)
    }
}

/// `AccountStore` over the `accounts` table.
pub struct SqliteAccountStore {
    conn: SqliteConnection,
}

impl SqliteAccountStore {
    pub(crate) const fn new(conn: SqliteConnection) -> Self {
        Self { conn }
    }
}

impl AccountStore for SqliteAccountStore {
    fn insert_account(&mut self, record: AccountRecord) -> Result<Account, StorageError> {
        mutations::accounts::insert_account(&mut self.conn, &record)?;

        // Read back for the database-assigned creation timestamp.
        let stored: StoredAccount =
            queries::accounts::find_account_by_username(&mut self.conn, &record.username)?
                .ok_or_else(|| {
                    PersistenceError::QueryFailed(format!(
                        "Account '{}' missing after insert",
                        record.username
                    ))
                })?;
        Ok(stored.account)
    }

    fn find_account(&mut self, username: &Username) -> Result<Option<StoredAccount>, StorageError> {
        Ok(queries::accounts::find_account_by_username(
            &mut self.conn,
            username,
        )?)
    }
}
