// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vector-backed stores for tests and single-process use.

use crate::store::{
    AccountRecord, AccountStore, BookingStore, RoomStore, StorageError, StoredAccount,
};
use hotel_desk_domain::{
    Account, Booking, BookingId, BookingStatus, NewBooking, Room, RoomNumber, Username,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Rooms in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRoomStore {
    rooms: Vec<Room>,
}

impl InMemoryRoomStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    fn position(&self, room_number: RoomNumber) -> Option<usize> {
        self.rooms
            .iter()
            .position(|room| room.room_number == room_number)
    }
}

impl RoomStore for InMemoryRoomStore {
    fn insert_room(&mut self, room: &Room) -> Result<(), StorageError> {
        self.rooms.push(room.clone());
        Ok(())
    }

    fn list_rooms(&mut self) -> Result<Vec<Room>, StorageError> {
        Ok(self.rooms.clone())
    }

    fn find_room(&mut self, room_number: RoomNumber) -> Result<Option<Room>, StorageError> {
        Ok(self.position(room_number).map(|i| self.rooms[i].clone()))
    }

    fn replace_room(&mut self, room: &Room) -> Result<bool, StorageError> {
        match self.position(room.room_number) {
            Some(i) => {
                self.rooms[i] = room.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_room(&mut self, room_number: RoomNumber) -> Result<bool, StorageError> {
        match self.position(room_number) {
            Some(i) => {
                self.rooms.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Bookings in id order with a monotonic id counter.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    bookings: Vec<Booking>,
    last_id: i64,
}

impl InMemoryBookingStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bookings: Vec::new(),
            last_id: 0,
        }
    }
}

impl BookingStore for InMemoryBookingStore {
    fn insert_booking(&mut self, booking: NewBooking) -> Result<Booking, StorageError> {
        self.last_id += 1;
        let stored: Booking = Booking::from_new(BookingId::new(self.last_id), booking);
        self.bookings.push(stored.clone());
        Ok(stored)
    }

    fn list_bookings(&mut self) -> Result<Vec<Booking>, StorageError> {
        Ok(self.bookings.clone())
    }

    fn find_booking(&mut self, booking_id: BookingId) -> Result<Option<Booking>, StorageError> {
        Ok(self
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .cloned())
    }

    fn bookings_for_room(
        &mut self,
        room_number: RoomNumber,
    ) -> Result<Vec<Booking>, StorageError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.room_number == room_number)
            .cloned()
            .collect())
    }

    fn update_status(
        &mut self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<bool, StorageError> {
        match self.bookings.iter_mut().find(|b| b.booking_id == booking_id) {
            Some(booking) => {
                booking.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Accounts with their password hashes.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: Vec<StoredAccount>,
    last_id: i64,
}

impl InMemoryAccountStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accounts: Vec::new(),
            last_id: 0,
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn insert_account(&mut self, record: AccountRecord) -> Result<Account, StorageError> {
        let created_at: String = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| StorageError::Backend(format!("Failed to format timestamp: {e}")))?;

        self.last_id += 1;
        let account: Account = Account {
            account_id: self.last_id,
            username: record.username,
            role: record.role,
            full_name: record.full_name,
            email: record.email,
            phone: record.phone,
            created_at,
        };
        self.accounts.push(StoredAccount {
            account: account.clone(),
            password_hash: record.password_hash,
        });
        Ok(account)
    }

    fn find_account(&mut self, username: &Username) -> Result<Option<StoredAccount>, StorageError> {
        Ok(self
            .accounts
            .iter()
            .find(|stored| stored.account.username == *username)
            .cloned())
    }
}
