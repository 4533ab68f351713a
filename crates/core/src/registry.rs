// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::RoomStore;
use hotel_desk_domain::{DomainError, Room, RoomNumber, RoomStatus, validate_room};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

/// The room catalog, keyed by room number.
///
/// Every operation runs under one lock, so a uniqueness check and the
/// insert that follows it cannot interleave with another writer.
pub struct RoomRegistry<S: RoomStore> {
    store: Mutex<S>,
}

impl<S: RoomStore> RoomRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Registers a new room.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The room fails field validation
    /// - A room with the same number already exists
    /// - The store fails
    pub fn add_room(&self, room: Room) -> Result<(), CoreError> {
        validate_room(&room)?;

        let mut store = self.store.lock();
        if store.find_room(room.room_number)?.is_some() {
            warn!(
                room_number = room.room_number.value(),
                "Rejected duplicate room"
            );
            return Err(CoreError::DomainViolation(DomainError::DuplicateRoom {
                room_number: room.room_number,
            }));
        }

        store.insert_room(&room)?;
        info!(
            room_number = room.room_number.value(),
            room_type = room.room_type.as_str(),
            "Added room"
        );
        Ok(())
    }

    /// All rooms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn get_all_rooms(&self) -> Result<Vec<Room>, CoreError> {
        let rooms: Vec<Room> = self.store.lock().list_rooms()?;
        debug!(room_count = rooms.len(), "Listed rooms");
        Ok(rooms)
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn get_room(&self, room_number: RoomNumber) -> Result<Option<Room>, CoreError> {
        Ok(self.store.lock().find_room(room_number)?)
    }

    /// Rooms currently in `status`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn rooms_with_status(&self, status: RoomStatus) -> Result<Vec<Room>, CoreError> {
        Ok(self
            .get_all_rooms()?
            .into_iter()
            .filter(|room| room.status == status)
            .collect())
    }

    /// Room numbers in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn room_numbers(&self) -> Result<Vec<RoomNumber>, CoreError> {
        Ok(self
            .get_all_rooms()?
            .into_iter()
            .map(|room| room.room_number)
            .collect())
    }

    /// Replaces the room with the same number.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the room was replaced
    /// * `Ok(false)` if no room has that number
    ///
    /// # Errors
    ///
    /// Returns an error if the room fails field validation or the store fails.
    pub fn update_room(&self, room: Room) -> Result<bool, CoreError> {
        validate_room(&room)?;

        let replaced: bool = self.store.lock().replace_room(&room)?;
        if replaced {
            info!(room_number = room.room_number.value(), "Updated room");
        } else {
            debug!(
                room_number = room.room_number.value(),
                "Update skipped, room not found"
            );
        }
        Ok(replaced)
    }

    /// Removes a room. Bookings that reference it are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn delete_room(&self, room_number: RoomNumber) -> Result<bool, CoreError> {
        let removed: bool = self.store.lock().remove_room(room_number)?;
        if removed {
            info!(room_number = room_number.value(), "Deleted room");
        }
        Ok(removed)
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn room_count(&self) -> Result<usize, CoreError> {
        Ok(self.store.lock().list_rooms()?.len())
    }
}
