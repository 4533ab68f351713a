// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross the boundary as `YYYY-MM-DD` strings and are parsed here,
//! never defaulted.

use hotel_desk::Session;
use hotel_desk_domain::{Account, Booking, Room};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// API request to register an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// `Admin` or `Customer`. Defaults to `Customer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A registered account, without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account_id: i64,
    pub username: String,
    pub role: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id,
            username: account.username.value().to_string(),
            role: account.role.as_str().to_string(),
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            created_at: account.created_at.clone(),
        }
    }
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    pub username: String,
    pub role: String,
}

/// The caller behind a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub account_id: i64,
    pub username: String,
    pub role: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            account_id: session.account_id,
            username: session.username.value().to_string(),
            role: session.role.as_str().to_string(),
        }
    }
}

/// API request to add a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub room_number: u32,
    pub room_type: String,
    pub floor: i32,
    /// Defaults to `Available`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Defaults to the room type's base price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// API request to replace a room's attributes. The number comes from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    pub room_type: String,
    pub floor: i32,
    pub status: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Defaults to the room type's base price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// Query parameters for listing rooms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoomsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A room as seen through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomResponse {
    pub room_number: u32,
    pub room_type: String,
    pub status: String,
    pub floor: i32,
    pub amenities: Vec<String>,
    pub price: Decimal,
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            room_number: room.room_number.value(),
            room_type: room.room_type.as_str().to_string(),
            status: room.status.as_str().to_string(),
            floor: room.floor,
            amenities: room
                .amenities
                .iter()
                .map(|a| a.as_str().to_string())
                .collect(),
            price: room.price,
        }
    }
}

/// API response for listing rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoomsResponse {
    pub rooms: Vec<RoomResponse>,
}

/// API request to book a room. The total is priced by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub room_number: u32,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    /// `YYYY-MM-DD`.
    pub check_in: String,
    /// `YYYY-MM-DD`.
    pub check_out: String,
}

/// Query parameters for listing bookings. At most one filter applies;
/// `status` wins over `customer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBookingsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Case-insensitive substring of the customer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

/// A booking as seen through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: i64,
    pub room_number: u32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub status: String,
    pub total_amount: Decimal,
    pub booked_on: String,
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_id: booking.booking_id.value(),
            room_number: booking.room_number.value(),
            customer_name: booking.customer.name.clone(),
            customer_email: booking.customer.email.clone(),
            customer_phone: booking.customer.phone.clone(),
            check_in: booking.check_in().to_string(),
            check_out: booking.check_out().to_string(),
            nights: booking.stay.nights(),
            status: booking.status.as_str().to_string(),
            total_amount: booking.total_amount,
            booked_on: booking.booked_on.to_string(),
        }
    }
}

/// API response for listing bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    pub bookings: Vec<BookingResponse>,
}

/// API response for a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionResponse {
    pub booking_id: i64,
    pub status: String,
    pub message: String,
}

/// Query parameters for a single availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub room_number: u32,
    pub check_in: String,
    pub check_out: String,
}

/// API response for a single availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub room_number: u32,
    pub check_in: String,
    pub check_out: String,
    pub available: bool,
}

/// Query parameters for the availability grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityGridQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u16>,
}

/// Free rooms on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDay {
    pub date: String,
    pub available_rooms: Vec<u32>,
}

/// API response for the availability grid, in date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityGridResponse {
    pub start: String,
    pub horizon_days: u16,
    pub days: Vec<GridDay>,
}

/// API response for today's front desk lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontDeskResponse {
    pub date: String,
    pub bookings: Vec<BookingResponse>,
}

/// Generic acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResponse {
    pub success: bool,
    pub message: String,
}
