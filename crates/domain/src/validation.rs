// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::account::NewAccount;
use crate::booking::Customer;
use crate::error::DomainError;
use crate::room::Room;
use crate::stay::StayRange;
use rust_decimal::Decimal;
use time::Date;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validates a room's field constraints.
///
/// This does NOT check for uniqueness (that requires the registry).
///
/// # Errors
///
/// Returns an error if:
/// - The room number is zero
/// - The price is negative
pub fn validate_room(room: &Room) -> Result<(), DomainError> {
    // Rule: room numbers start at 1
    if room.room_number.value() == 0 {
        return Err(DomainError::InvalidRoomNumber(String::from(
            "Room number must be greater than 0",
        )));
    }

    if room.price < Decimal::ZERO {
        return Err(DomainError::InvalidPrice(format!(
            "Price cannot be negative, got {}",
            room.price
        )));
    }

    Ok(())
}

/// Validates the guest details on a booking.
///
/// # Errors
///
/// Returns `DomainError::InvalidCustomer` if the name is blank or the email
/// has no `@`.
pub fn validate_customer(customer: &Customer) -> Result<(), DomainError> {
    if customer.name.trim().is_empty() {
        return Err(DomainError::InvalidCustomer(String::from(
            "Customer name cannot be empty",
        )));
    }

    if !customer.email.contains('@') {
        return Err(DomainError::InvalidCustomer(format!(
            "Customer email '{}' is not an email address",
            customer.email
        )));
    }

    Ok(())
}

/// Validates requested stay dates against "today".
///
/// # Returns
///
/// * `Ok(StayRange)` if check-in is today or later and check-out is after check-in
/// * `Err(DomainError::InvalidDateRange)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The check-in date is before `today`
/// - The check-out date is on or before the check-in date
pub fn validate_stay_dates(
    check_in: Date,
    check_out: Date,
    today: Date,
) -> Result<StayRange, DomainError> {
    if check_in < today {
        return Err(DomainError::InvalidDateRange {
            check_in,
            check_out,
            reason: String::from("Check-in date cannot be in the past"),
        });
    }

    StayRange::new(check_in, check_out)
}

/// Validates registration input.
///
/// # Errors
///
/// Returns an error if:
/// - The username is empty or contains whitespace
/// - The password is shorter than `MIN_PASSWORD_LENGTH`
/// - The full name, email or phone is empty
pub fn validate_new_account(account: &NewAccount) -> Result<(), DomainError> {
    let username: &str = account.username.value();
    if username.is_empty() {
        return Err(DomainError::InvalidUsername(String::from(
            "Username cannot be empty",
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidUsername(format!(
            "Username '{username}' cannot contain whitespace"
        )));
    }

    if account.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::InvalidPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }

    if account.full_name.trim().is_empty()
        || account.email.trim().is_empty()
        || account.phone.trim().is_empty()
    {
        return Err(DomainError::InvalidCustomer(String::from(
            "Full name, email and phone are required",
        )));
    }

    Ok(())
}
