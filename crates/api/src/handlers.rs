// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One function per desk operation.
//!
//! Each handler checks the caller's role, translates the request into
//! domain types, calls into core and translates the result back.

use hotel_desk::{
    AccountDirectory, AccountStore, BookingLedger, BookingStore, Clock, RoomRegistry, RoomStore,
    Session,
};
use hotel_desk_domain::{
    Account, Amenity, AvailabilityGrid, Booking, BookingId, BookingRequest, BookingStatus,
    BookingTransition, Customer, NewAccount, Role, Room, RoomNumber, RoomStatus, RoomType,
    StayRange, Username, parse_date,
};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::str::FromStr;
use time::Date;
use tracing::{info, warn};

use crate::auth::{AuthorizationService, SessionTable};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AccountResponse, AvailabilityGridQuery, AvailabilityGridResponse, AvailabilityQuery,
    AvailabilityResponse, BookingResponse, CreateBookingRequest, CreateRoomRequest,
    FrontDeskResponse, GridDay, ListBookingsQuery, ListBookingsResponse, ListRoomsQuery,
    ListRoomsResponse, LoginRequest, LoginResponse, RegisterRequest, RoomResponse,
    TransitionResponse, UpdateRoomRequest, WriteResponse,
};

fn parse_amenities(values: &[String]) -> Result<BTreeSet<Amenity>, ApiError> {
    values
        .iter()
        .map(|value| Amenity::from_str(value.trim()))
        .collect::<Result<BTreeSet<Amenity>, _>>()
        .map_err(translate_domain_error)
}

fn room_not_found(room_number: RoomNumber) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Room"),
        message: format!("Room {room_number} does not exist"),
    }
}

fn booking_not_found(booking_id: BookingId) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Booking"),
        message: format!("Booking {booking_id} does not exist"),
    }
}

fn build_room(
    room_number: RoomNumber,
    room_type: &str,
    floor: i32,
    status: Option<&str>,
    amenities: &[String],
    price: Option<Decimal>,
) -> Result<Room, ApiError> {
    let room_type: RoomType = RoomType::from_str(room_type).map_err(translate_domain_error)?;
    let status: RoomStatus = match status {
        Some(value) => RoomStatus::from_str(value).map_err(translate_domain_error)?,
        None => RoomStatus::Available,
    };
    let amenities: BTreeSet<Amenity> = parse_amenities(amenities)?;

    let mut room: Room = Room::new(room_number, room_type, floor)
        .with_status(status)
        .with_amenities(amenities);
    if let Some(price) = price {
        room = room.with_price(price);
    }
    Ok(room)
}

// ============================================================================
// Accounts and sessions
// ============================================================================

/// Registers an account.
///
/// The role defaults to `Customer`. Creating an `Admin` requires an admin
/// caller.
///
/// # Errors
///
/// Returns an error if:
/// - The role is unknown, or `Admin` without an admin caller
/// - Any field validation fails
/// - The username is taken
/// - Hashing or the store fails
pub fn register_account<A: AccountStore>(
    accounts: &AccountDirectory<A>,
    caller: Option<&Session>,
    request: RegisterRequest,
) -> Result<AccountResponse, ApiError> {
    let role: Role = match request.role.as_deref() {
        Some(value) => Role::from_str(value).map_err(translate_domain_error)?,
        None => Role::Customer,
    };
    AuthorizationService::authorize_register(caller, role)?;

    let new_account: NewAccount = NewAccount {
        username: Username::new(&request.username),
        password: request.password,
        role,
        full_name: request.full_name,
        email: request.email,
        phone: request.phone,
    };

    let account: Account = accounts
        .register(new_account)
        .map_err(translate_core_error)?;
    Ok(AccountResponse::from(&account))
}

/// Checks credentials and issues a bearer token.
///
/// Unknown usernames and wrong passwords fail the same way.
///
/// # Errors
///
/// Returns `AuthenticationFailed` on bad credentials, or an error if the
/// store fails.
pub fn login<A: AccountStore>(
    accounts: &AccountDirectory<A>,
    sessions: &SessionTable,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let session: Session = accounts
        .authenticate(&request.username, &request.password)
        .map_err(translate_core_error)?
        .ok_or_else(|| ApiError::AuthenticationFailed {
            reason: String::from("Invalid username or password"),
        })?;

    let username: String = session.username.value().to_string();
    let role: String = session.role.as_str().to_string();
    let token: String = sessions.issue(session);
    info!(username = %username, role = %role, "Login succeeded");

    Ok(LoginResponse {
        token,
        username,
        role,
    })
}

/// Revokes a bearer token.
///
/// # Errors
///
/// Returns `AuthenticationFailed` if the token was never issued or was
/// already revoked.
pub fn logout(sessions: &SessionTable, token: &str) -> Result<WriteResponse, ApiError> {
    if !sessions.revoke(token) {
        return Err(ApiError::AuthenticationFailed {
            reason: String::from("Session is not active"),
        });
    }
    Ok(WriteResponse {
        success: true,
        message: String::from("Logged out"),
    })
}

// ============================================================================
// Rooms
// ============================================================================

/// Adds a room to the catalog. Admin only.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an Admin
/// - The type, status or an amenity is unknown
/// - The number is zero or the price negative
/// - The number is already registered
/// - The store fails
pub fn create_room<R: RoomStore>(
    registry: &RoomRegistry<R>,
    session: &Session,
    request: &CreateRoomRequest,
) -> Result<RoomResponse, ApiError> {
    AuthorizationService::authorize_manage_rooms(session, "create_room")?;

    let room: Room = build_room(
        RoomNumber::new(request.room_number),
        &request.room_type,
        request.floor,
        request.status.as_deref(),
        &request.amenities,
        request.price,
    )?;
    let response: RoomResponse = RoomResponse::from(&room);
    registry.add_room(room).map_err(translate_core_error)?;
    Ok(response)
}

/// Lists rooms in catalog order, optionally only those with one status.
///
/// # Errors
///
/// Returns an error if the status filter is unknown or the store fails.
pub fn list_rooms<R: RoomStore>(
    registry: &RoomRegistry<R>,
    query: &ListRoomsQuery,
) -> Result<ListRoomsResponse, ApiError> {
    let rooms: Vec<Room> = match query.status.as_deref() {
        Some(value) => {
            let status: RoomStatus = RoomStatus::from_str(value).map_err(translate_domain_error)?;
            registry.rooms_with_status(status)
        }
        None => registry.get_all_rooms(),
    }
    .map_err(translate_core_error)?;

    Ok(ListRoomsResponse {
        rooms: rooms.iter().map(RoomResponse::from).collect(),
    })
}

/// Looks up one room.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the number is not registered, or an error
/// if the store fails.
pub fn get_room<R: RoomStore>(
    registry: &RoomRegistry<R>,
    room_number: u32,
) -> Result<RoomResponse, ApiError> {
    let room_number: RoomNumber = RoomNumber::new(room_number);
    registry
        .get_room(room_number)
        .map_err(translate_core_error)?
        .map(|room| RoomResponse::from(&room))
        .ok_or_else(|| room_not_found(room_number))
}

/// Replaces every attribute of a room except its number. Admin only.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an Admin
/// - Any attribute fails parsing or validation
/// - The room does not exist
/// - The store fails
pub fn update_room<R: RoomStore>(
    registry: &RoomRegistry<R>,
    session: &Session,
    room_number: u32,
    request: &UpdateRoomRequest,
) -> Result<RoomResponse, ApiError> {
    AuthorizationService::authorize_manage_rooms(session, "update_room")?;

    let room_number: RoomNumber = RoomNumber::new(room_number);
    let room: Room = build_room(
        room_number,
        &request.room_type,
        request.floor,
        Some(&request.status),
        &request.amenities,
        request.price,
    )?;
    let response: RoomResponse = RoomResponse::from(&room);

    if !registry.update_room(room).map_err(translate_core_error)? {
        return Err(room_not_found(room_number));
    }
    Ok(response)
}

/// Removes a room from the catalog. Admin only.
///
/// Bookings that name the room are left in place.
///
/// # Errors
///
/// Returns an error if the caller is not an Admin, the room does not exist,
/// or the store fails.
pub fn delete_room<R: RoomStore>(
    registry: &RoomRegistry<R>,
    session: &Session,
    room_number: u32,
) -> Result<WriteResponse, ApiError> {
    AuthorizationService::authorize_manage_rooms(session, "delete_room")?;

    let room_number: RoomNumber = RoomNumber::new(room_number);
    if !registry
        .delete_room(room_number)
        .map_err(translate_core_error)?
    {
        return Err(room_not_found(room_number));
    }
    Ok(WriteResponse {
        success: true,
        message: format!("Deleted room {room_number}"),
    })
}

// ============================================================================
// Bookings
// ============================================================================

/// Books a room for the caller.
///
/// The total is the room's current nightly price times the number of
/// nights. Dates that do not parse are rejected, never defaulted.
///
/// # Errors
///
/// Returns an error if:
/// - A date is malformed, in the past, or out of order
/// - The room does not exist
/// - The customer details are invalid
/// - Another active booking overlaps the stay
/// - The store fails
pub fn create_booking<R: RoomStore, B: BookingStore, C: Clock>(
    registry: &RoomRegistry<R>,
    ledger: &BookingLedger<B, C>,
    session: &Session,
    request: CreateBookingRequest,
) -> Result<BookingResponse, ApiError> {
    let check_in: Date = parse_date(&request.check_in).map_err(translate_domain_error)?;
    let check_out: Date = parse_date(&request.check_out).map_err(translate_domain_error)?;
    let stay: StayRange = StayRange::new(check_in, check_out).map_err(translate_domain_error)?;

    let room_number: RoomNumber = RoomNumber::new(request.room_number);
    let room: Room = registry
        .get_room(room_number)
        .map_err(translate_core_error)?
        .ok_or_else(|| room_not_found(room_number))?;
    let total_amount: Decimal = stay.total_for(room.price).map_err(translate_domain_error)?;

    let booking: Booking = ledger
        .create_booking(BookingRequest {
            room_number,
            customer: Customer::new(
                request.customer_name,
                request.customer_email,
                request.customer_phone,
            ),
            check_in,
            check_out,
            total_amount,
        })
        .map_err(translate_core_error)?;

    info!(
        booking_id = booking.booking_id.value(),
        username = session.username.value(),
        "Booking placed"
    );
    Ok(BookingResponse::from(&booking))
}

/// Lists bookings, latest check-in first.
///
/// A `status` filter wins over a `customer` name search.
///
/// # Errors
///
/// Returns an error if the status filter is unknown or the store fails.
pub fn list_bookings<B: BookingStore, C: Clock>(
    ledger: &BookingLedger<B, C>,
    query: &ListBookingsQuery,
) -> Result<ListBookingsResponse, ApiError> {
    let bookings: Vec<Booking> = match (query.status.as_deref(), query.customer.as_deref()) {
        (Some(value), _) => {
            let status: BookingStatus =
                BookingStatus::from_str(value).map_err(translate_domain_error)?;
            ledger.bookings_with_status(status)
        }
        (None, Some(name)) => ledger.search_by_customer(name),
        (None, None) => ledger.get_all_bookings(),
    }
    .map_err(translate_core_error)?;

    Ok(ListBookingsResponse {
        bookings: bookings.iter().map(BookingResponse::from).collect(),
    })
}

/// Looks up one booking.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id, or an error if the store
/// fails.
pub fn get_booking<B: BookingStore, C: Clock>(
    ledger: &BookingLedger<B, C>,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    let booking_id: BookingId = BookingId::new(booking_id);
    ledger
        .get_booking(booking_id)
        .map_err(translate_core_error)?
        .map(|booking| BookingResponse::from(&booking))
        .ok_or_else(|| booking_not_found(booking_id))
}

fn apply_transition<B: BookingStore, C: Clock>(
    ledger: &BookingLedger<B, C>,
    session: &Session,
    booking_id: i64,
    transition: BookingTransition,
) -> Result<TransitionResponse, ApiError> {
    let booking_id: BookingId = BookingId::new(booking_id);
    let moved: bool = match transition {
        BookingTransition::CheckIn => ledger.check_in(booking_id),
        BookingTransition::CheckOut => ledger.check_out(booking_id),
        BookingTransition::Cancel => ledger.cancel(booking_id),
    }
    .map_err(translate_core_error)?;

    let booking: Booking = ledger
        .get_booking(booking_id)
        .map_err(translate_core_error)?
        .ok_or_else(|| booking_not_found(booking_id))?;

    if !moved {
        warn!(
            booking_id = booking_id.value(),
            status = booking.status.as_str(),
            transition = transition.as_str(),
            username = session.username.value(),
            "Rejected booking transition"
        );
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("booking_lifecycle"),
            message: format!(
                "Cannot {transition} booking {booking_id} while it is {}",
                booking.status
            ),
        });
    }

    Ok(TransitionResponse {
        booking_id: booking_id.value(),
        status: booking.status.as_str().to_string(),
        message: format!("Booking {booking_id} is now {}", booking.status),
    })
}

/// Moves a `Confirmed` booking to `CheckedIn`.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id, a `booking_lifecycle` rule
/// violation if the booking is in another state, or an error if the store
/// fails.
pub fn check_in<B: BookingStore, C: Clock>(
    ledger: &BookingLedger<B, C>,
    session: &Session,
    booking_id: i64,
) -> Result<TransitionResponse, ApiError> {
    apply_transition(ledger, session, booking_id, BookingTransition::CheckIn)
}

/// Moves a `CheckedIn` booking to `CheckedOut`.
///
/// # Errors
///
/// Same as [`check_in`].
pub fn check_out<B: BookingStore, C: Clock>(
    ledger: &BookingLedger<B, C>,
    session: &Session,
    booking_id: i64,
) -> Result<TransitionResponse, ApiError> {
    apply_transition(ledger, session, booking_id, BookingTransition::CheckOut)
}

/// Cancels a `Confirmed` or `CheckedIn` booking.
///
/// # Errors
///
/// Same as [`check_in`].
pub fn cancel_booking<B: BookingStore, C: Clock>(
    ledger: &BookingLedger<B, C>,
    session: &Session,
    booking_id: i64,
) -> Result<TransitionResponse, ApiError> {
    apply_transition(ledger, session, booking_id, BookingTransition::Cancel)
}

// ============================================================================
// Availability and the front desk
// ============================================================================

/// Answers whether one room is free for a stay.
///
/// Only bookings are consulted; the room need not be registered.
///
/// # Errors
///
/// Returns an error if a date is malformed or the store fails.
pub fn check_availability<B: BookingStore, C: Clock>(
    ledger: &BookingLedger<B, C>,
    query: &AvailabilityQuery,
) -> Result<AvailabilityResponse, ApiError> {
    let check_in: Date = parse_date(&query.check_in).map_err(translate_domain_error)?;
    let check_out: Date = parse_date(&query.check_out).map_err(translate_domain_error)?;

    let available: bool = ledger
        .is_room_available(RoomNumber::new(query.room_number), check_in, check_out)
        .map_err(translate_core_error)?;

    Ok(AvailabilityResponse {
        room_number: query.room_number,
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
        available,
    })
}

/// Free rooms per date from today over the requested horizon.
///
/// # Errors
///
/// Returns an error if the horizon is zero, runs off the calendar, or the
/// store fails.
pub fn availability_grid<R: RoomStore, B: BookingStore, C: Clock>(
    registry: &RoomRegistry<R>,
    ledger: &BookingLedger<B, C>,
    query: &AvailabilityGridQuery,
    default_horizon_days: u16,
) -> Result<AvailabilityGridResponse, ApiError> {
    let horizon_days: u16 = query.days.unwrap_or(default_horizon_days);
    if horizon_days == 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("days"),
            message: String::from("Horizon must be at least one day"),
        });
    }

    let rooms: Vec<RoomNumber> = registry.room_numbers().map_err(translate_core_error)?;
    let grid: AvailabilityGrid = ledger
        .availability_grid(&rooms, horizon_days)
        .map_err(translate_core_error)?;

    let days: Vec<GridDay> = grid
        .into_iter()
        .map(|(date, free)| GridDay {
            date: date.to_string(),
            available_rooms: free.into_iter().map(|room| room.value()).collect(),
        })
        .collect();

    Ok(AvailabilityGridResponse {
        start: ledger.today().to_string(),
        horizon_days,
        days,
    })
}

/// Confirmed bookings arriving today.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn todays_arrivals<B: BookingStore, C: Clock>(
    ledger: &BookingLedger<B, C>,
) -> Result<FrontDeskResponse, ApiError> {
    let bookings: Vec<Booking> = ledger.todays_check_ins().map_err(translate_core_error)?;
    Ok(FrontDeskResponse {
        date: ledger.today().to_string(),
        bookings: bookings.iter().map(BookingResponse::from).collect(),
    })
}

/// Checked-in bookings departing today.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn todays_departures<B: BookingStore, C: Clock>(
    ledger: &BookingLedger<B, C>,
) -> Result<FrontDeskResponse, ApiError> {
    let bookings: Vec<Booking> = ledger.todays_check_outs().map_err(translate_core_error)?;
    Ok(FrontDeskResponse {
        date: ledger.today().to_string(),
        bookings: bookings.iter().map(BookingResponse::from).collect(),
    })
}
