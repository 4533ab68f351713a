// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and their conversion into domain values.
//!
//! Dates are `YYYY-MM-DD` text, money is decimal text and amenities are a
//! comma separated list. A row that no longer parses is reported as
//! `PersistenceError::CorruptRow` rather than silently repaired.

use diesel::prelude::*;
use hotel_desk::StoredAccount;
use hotel_desk_domain::{
    Account, Amenity, Booking, BookingId, BookingStatus, Customer, Role, Room, RoomNumber,
    RoomStatus, RoomType, StayRange, Username, parse_date,
};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use time::Date;

use crate::diesel_schema::{accounts, bookings, rooms};
use crate::error::PersistenceError;

fn corrupt(table: &'static str, reason: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::CorruptRow {
        table,
        reason: reason.to_string(),
    }
}

fn room_number_column(table: &'static str, value: i64) -> Result<RoomNumber, PersistenceError> {
    value
        .to_u32()
        .map(RoomNumber::new)
        .ok_or_else(|| corrupt(table, format!("room number {value} out of range")))
}

fn decimal_column(table: &'static str, value: &str) -> Result<Decimal, PersistenceError> {
    Decimal::from_str(value).map_err(|e| corrupt(table, format!("amount '{value}': {e}")))
}

fn date_column(table: &'static str, value: &str) -> Result<Date, PersistenceError> {
    parse_date(value).map_err(|e| corrupt(table, e))
}

/// Diesel Queryable struct for room rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RoomRow {
    pub room_number: i64,
    pub room_type: String,
    pub status: String,
    pub floor: i32,
    pub amenities: String,
    pub price: String,
}

impl RoomRow {
    pub fn into_room(self) -> Result<Room, PersistenceError> {
        Ok(Room {
            room_number: room_number_column("rooms", self.room_number)?,
            room_type: RoomType::from_str(&self.room_type).map_err(|e| corrupt("rooms", e))?,
            status: RoomStatus::from_str(&self.status).map_err(|e| corrupt("rooms", e))?,
            floor: self.floor,
            amenities: Amenity::parse_list(&self.amenities).map_err(|e| corrupt("rooms", e))?,
            price: decimal_column("rooms", &self.price)?,
        })
    }
}

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookingRow {
    pub booking_id: i64,
    pub room_number: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
    pub total_amount: String,
    pub booked_on: String,
}

impl BookingRow {
    pub fn into_booking(self) -> Result<Booking, PersistenceError> {
        let stay: StayRange = StayRange::new(
            date_column("bookings", &self.check_in)?,
            date_column("bookings", &self.check_out)?,
        )
        .map_err(|e| corrupt("bookings", e))?;

        Ok(Booking {
            booking_id: BookingId::new(self.booking_id),
            room_number: room_number_column("bookings", self.room_number)?,
            customer: Customer::new(
                self.customer_name,
                self.customer_email,
                self.customer_phone,
            ),
            stay,
            status: BookingStatus::from_str(&self.status).map_err(|e| corrupt("bookings", e))?,
            total_amount: decimal_column("bookings", &self.total_amount)?,
            booked_on: date_column("bookings", &self.booked_on)?,
        })
    }
}

/// Diesel Queryable struct for account rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountRow {
    pub account_id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: String,
}

impl AccountRow {
    pub fn into_stored_account(self) -> Result<StoredAccount, PersistenceError> {
        Ok(StoredAccount {
            account: Account {
                account_id: self.account_id,
                username: Username::new(&self.username),
                role: Role::from_str(&self.role).map_err(|e| corrupt("accounts", e))?,
                full_name: self.full_name,
                email: self.email,
                phone: self.phone,
                created_at: self.created_at,
            },
            password_hash: self.password_hash,
        })
    }
}
