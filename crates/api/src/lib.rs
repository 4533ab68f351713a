// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The API boundary of the hotel desk.
//!
//! Requests arrive as plain serde structs with string dates and enum names.
//! Handlers authorize the caller, translate into domain types, call the
//! room registry, booking ledger or account directory, and translate the
//! outcome into response structs or an [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthorizationService, SessionTable};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    availability_grid, cancel_booking, check_availability, check_in, check_out, create_booking,
    create_room, delete_room, get_booking, get_room, list_bookings, list_rooms, login, logout,
    register_account, todays_arrivals, todays_departures, update_room,
};
pub use request_response::{
    AccountResponse, AvailabilityGridQuery, AvailabilityGridResponse, AvailabilityQuery,
    AvailabilityResponse, BookingResponse, CreateBookingRequest, CreateRoomRequest,
    FrontDeskResponse, GridDay, ListBookingsQuery, ListBookingsResponse, ListRoomsQuery,
    ListRoomsResponse, LoginRequest, LoginResponse, RegisterRequest, RoomResponse,
    SessionResponse, TransitionResponse, UpdateRoomRequest, WriteResponse,
};
