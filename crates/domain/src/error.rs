// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::room::RoomNumber;
use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A room with this number is already registered.
    #[error("Room {room_number} already exists")]
    DuplicateRoom {
        /// The duplicate room number.
        room_number: RoomNumber,
    },
    /// Room number is zero or otherwise unusable.
    #[error("Invalid room number: {0}")]
    InvalidRoomNumber(String),
    /// Room price is negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
    /// Room type string did not match a known type.
    #[error("Invalid room type: {0}")]
    InvalidRoomType(String),
    /// Room status string did not match a known status.
    #[error("Invalid room status: {0}")]
    InvalidRoomStatus(String),
    /// Amenity string did not match a known amenity.
    #[error("Invalid amenity: {0}")]
    InvalidAmenity(String),
    /// Booking status string did not match a known status.
    #[error("Invalid booking status: {0}")]
    InvalidBookingStatus(String),
    /// Customer details are missing or malformed.
    #[error("Invalid customer: {0}")]
    InvalidCustomer(String),
    /// Check-in/check-out ordering or past-date rule violated.
    #[error("Invalid date range {check_in} to {check_out}: {reason}")]
    InvalidDateRange {
        /// The requested check-in date.
        check_in: Date,
        /// The requested check-out date.
        check_out: Date,
        /// Which rule was violated.
        reason: String,
    },
    /// An active booking already covers part of the requested stay.
    #[error("Room {room_number} is not available from {check_in} to {check_out}")]
    BookingConflict {
        /// The requested room.
        room_number: RoomNumber,
        /// The requested check-in date.
        check_in: Date,
        /// The requested check-out date.
        check_out: Date,
    },
    /// Stay amount could not be represented.
    #[error("Amount overflow while {operation}")]
    AmountOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Date arithmetic left the representable range.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    #[error("Failed to parse date '{date_string}': {error}")]
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Username is empty or contains unsupported characters.
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    /// Password does not meet the minimum requirements.
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    /// Role string did not match a known role.
    #[error("Invalid role: {0}")]
    InvalidRole(String),
    /// Username is already registered.
    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),
}
