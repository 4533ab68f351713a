// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking ledger: overlap checks, the booking lifecycle and the
//! forward availability grid.

use crate::clock::Clock;
use crate::error::CoreError;
use crate::store::BookingStore;
use hotel_desk_domain::{
    AvailabilityGrid, Booking, BookingId, BookingRequest, BookingStatus, BookingTransition,
    DomainError, NewBooking, RoomNumber, StayRange, compute_availability_grid, is_room_available,
    validate_customer, validate_stay_dates,
};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::cmp::Reverse;
use time::Date;
use tracing::{debug, info, warn};

/// Date-ranged reservations against room numbers.
///
/// The room reference is by value; the ledger never consults the room
/// registry. "Today" comes from the injected clock.
pub struct BookingLedger<S: BookingStore, C: Clock> {
    store: Mutex<S>,
    clock: C,
}

impl<S: BookingStore, C: Clock> BookingLedger<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store: Mutex::new(store),
            clock,
        }
    }

    /// The ledger's notion of today.
    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Returns true if no active booking of `room_number` overlaps
    /// `[check_in, check_out)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn is_room_available(
        &self,
        room_number: RoomNumber,
        check_in: Date,
        check_out: Date,
    ) -> Result<bool, CoreError> {
        let bookings: Vec<Booking> = self.store.lock().bookings_for_room(room_number)?;
        Ok(is_room_available(
            &bookings,
            room_number,
            check_in,
            check_out,
        ))
    }

    /// Checks that a stay could be booked right now.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Check-in is before today or check-out is not after check-in
    ///   (`InvalidDateRange`)
    /// - An active booking of the room overlaps the stay (`BookingConflict`)
    /// - The store fails
    pub fn validate_booking(
        &self,
        room_number: RoomNumber,
        check_in: Date,
        check_out: Date,
    ) -> Result<StayRange, CoreError> {
        let mut store = self.store.lock();
        Self::validate_locked(&mut *store, self.clock.today(), room_number, check_in, check_out)
    }

    /// Validates and records a booking in one critical section.
    ///
    /// Two overlapping requests racing for the same room yield exactly one
    /// booking; the loser sees `BookingConflict`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer details are invalid
    /// - The amount is negative
    /// - The dates are invalid or the room is taken (see `validate_booking`)
    /// - The store fails
    pub fn create_booking(&self, request: BookingRequest) -> Result<Booking, CoreError> {
        validate_customer(&request.customer)?;
        if request.total_amount < Decimal::ZERO {
            return Err(CoreError::DomainViolation(DomainError::InvalidPrice(
                format!("Total amount cannot be negative, got {}", request.total_amount),
            )));
        }

        let today: Date = self.clock.today();
        let mut store = self.store.lock();
        let stay: StayRange = Self::validate_locked(
            &mut *store,
            today,
            request.room_number,
            request.check_in,
            request.check_out,
        )?;

        let booking: Booking = store.insert_booking(NewBooking {
            room_number: request.room_number,
            customer: request.customer,
            stay,
            total_amount: request.total_amount,
            booked_on: today,
        })?;
        drop(store);

        info!(
            booking_id = booking.booking_id.value(),
            room_number = booking.room_number.value(),
            check_in = %booking.check_in(),
            check_out = %booking.check_out(),
            "Created booking"
        );
        Ok(booking)
    }

    /// `Confirmed` to `CheckedIn`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the booking moved
    /// * `Ok(false)` if the id is unknown or the booking is not `Confirmed`
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn check_in(&self, booking_id: BookingId) -> Result<bool, CoreError> {
        self.transition(booking_id, BookingTransition::CheckIn)
    }

    /// `CheckedIn` to `CheckedOut`. Same return convention as `check_in`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn check_out(&self, booking_id: BookingId) -> Result<bool, CoreError> {
        self.transition(booking_id, BookingTransition::CheckOut)
    }

    /// `Confirmed` or `CheckedIn` to `Cancelled`. Same return convention as
    /// `check_in`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn cancel(&self, booking_id: BookingId) -> Result<bool, CoreError> {
        self.transition(booking_id, BookingTransition::Cancel)
    }

    /// Free rooms per date for `horizon_days` dates starting today.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the horizon overflows the
    /// calendar.
    pub fn availability_grid(
        &self,
        rooms: &[RoomNumber],
        horizon_days: u16,
    ) -> Result<AvailabilityGrid, CoreError> {
        let today: Date = self.clock.today();
        let bookings: Vec<Booking> = self.store.lock().list_bookings()?;
        let grid: AvailabilityGrid =
            compute_availability_grid(rooms, &bookings, today, horizon_days)?;
        debug!(
            start = %today,
            horizon_days,
            room_count = rooms.len(),
            "Computed availability grid"
        );
        Ok(grid)
    }

    /// All bookings, latest check-in first, ties by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn get_all_bookings(&self) -> Result<Vec<Booking>, CoreError> {
        let mut bookings: Vec<Booking> = self.store.lock().list_bookings()?;
        bookings.sort_by_key(|b| (Reverse(b.check_in()), b.booking_id));
        Ok(bookings)
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn get_booking(&self, booking_id: BookingId) -> Result<Option<Booking>, CoreError> {
        Ok(self.store.lock().find_booking(booking_id)?)
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn bookings_with_status(&self, status: BookingStatus) -> Result<Vec<Booking>, CoreError> {
        self.filtered(|b| b.status == status)
    }

    /// Bookings whose customer name contains `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn search_by_customer(&self, name: &str) -> Result<Vec<Booking>, CoreError> {
        let needle: String = name.trim().to_lowercase();
        self.filtered(|b| b.customer.name.to_lowercase().contains(&needle))
    }

    /// Confirmed bookings arriving today.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn todays_check_ins(&self) -> Result<Vec<Booking>, CoreError> {
        let today: Date = self.clock.today();
        self.filtered(|b| b.status == BookingStatus::Confirmed && b.check_in() == today)
    }

    /// Checked-in bookings departing today.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn todays_check_outs(&self) -> Result<Vec<Booking>, CoreError> {
        let today: Date = self.clock.today();
        self.filtered(|b| b.status == BookingStatus::CheckedIn && b.check_out() == today)
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn total_bookings(&self) -> Result<usize, CoreError> {
        Ok(self.store.lock().list_bookings()?.len())
    }

    fn filtered<F>(&self, predicate: F) -> Result<Vec<Booking>, CoreError>
    where
        F: Fn(&Booking) -> bool,
    {
        Ok(self
            .get_all_bookings()?
            .into_iter()
            .filter(|b| predicate(b))
            .collect())
    }

    fn validate_locked(
        store: &mut S,
        today: Date,
        room_number: RoomNumber,
        check_in: Date,
        check_out: Date,
    ) -> Result<StayRange, CoreError> {
        let stay: StayRange = validate_stay_dates(check_in, check_out, today)?;

        let bookings: Vec<Booking> = store.bookings_for_room(room_number)?;
        if bookings.iter().any(|b| b.blocks(room_number, &stay)) {
            warn!(
                room_number = room_number.value(),
                check_in = %check_in,
                check_out = %check_out,
                "Rejected overlapping booking"
            );
            return Err(CoreError::DomainViolation(DomainError::BookingConflict {
                room_number,
                check_in,
                check_out,
            }));
        }

        Ok(stay)
    }

    fn transition(
        &self,
        booking_id: BookingId,
        transition: BookingTransition,
    ) -> Result<bool, CoreError> {
        let mut store = self.store.lock();
        let Some(booking) = store.find_booking(booking_id)? else {
            debug!(
                booking_id = booking_id.value(),
                transition = transition.as_str(),
                "Unknown booking"
            );
            return Ok(false);
        };

        let Some(next) = booking.status.after(transition) else {
            debug!(
                booking_id = booking_id.value(),
                transition = transition.as_str(),
                status = booking.status.as_str(),
                "Transition not permitted"
            );
            return Ok(false);
        };

        let updated: bool = store.update_status(booking_id, next)?;
        drop(store);

        if updated {
            info!(
                booking_id = booking_id.value(),
                from = booking.status.as_str(),
                to = next.as_str(),
                "Booking status changed"
            );
        }
        Ok(updated)
    }
}
