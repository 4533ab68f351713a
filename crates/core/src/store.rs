// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage seams for the registry, ledger and account directory.
//!
//! Stores take `&mut self`; each component serializes access to its store
//! behind its own lock, so implementations need no internal locking.

use hotel_desk_domain::{
    Account, Booking, BookingId, BookingStatus, NewBooking, Role, Room, RoomNumber, Username,
};

/// Failure reported by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend could not complete the operation.
    #[error("Storage backend failure: {0}")]
    Backend(String),
    /// A stored record could not be turned back into a domain value.
    #[error("Corrupt stored record: {0}")]
    CorruptRecord(String),
}

/// Keyed room storage. Listing preserves insertion order.
pub trait RoomStore {
    /// Stores a room. Callers check uniqueness first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_room(&mut self, room: &Room) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_rooms(&mut self) -> Result<Vec<Room>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_room(&mut self, room_number: RoomNumber) -> Result<Option<Room>, StorageError>;

    /// Replaces the room with the same number, keeping its position.
    /// Returns `false` if no such room is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn replace_room(&mut self, room: &Room) -> Result<bool, StorageError>;

    /// Returns `false` if no such room is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn remove_room(&mut self, room_number: RoomNumber) -> Result<bool, StorageError>;
}

/// Booking storage. The store assigns monotonic booking ids.
pub trait BookingStore {
    /// Stores a booking in the `Confirmed` state and returns it with its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_booking(&mut self, booking: NewBooking) -> Result<Booking, StorageError>;

    /// All bookings in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_bookings(&mut self) -> Result<Vec<Booking>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_booking(&mut self, booking_id: BookingId) -> Result<Option<Booking>, StorageError>;

    /// Bookings of one room in any state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn bookings_for_room(&mut self, room_number: RoomNumber)
    -> Result<Vec<Booking>, StorageError>;

    /// Overwrites a booking's status. Returns `false` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_status(
        &mut self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<bool, StorageError>;
}

/// An account ready to be stored: validated fields plus the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub username: Username,
    pub password_hash: String,
    pub role: Role,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

/// A stored account together with its password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAccount {
    pub account: Account,
    pub password_hash: String,
}

/// Account storage keyed by normalized username.
pub trait AccountStore {
    /// Stores an account and returns it with its id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_account(&mut self, record: AccountRecord) -> Result<Account, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_account(&mut self, username: &Username) -> Result<Option<StoredAccount>, StorageError>;
}
