// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AvailabilityGrid, Booking, BookingId, BookingStatus, Customer, NewBooking, RoomNumber,
    StayRange, compute_availability_grid, is_room_available,
};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use time::Date;
use time::macros::date;

fn create_test_booking(id: i64, room: u32, check_in: Date, check_out: Date) -> Booking {
    Booking::from_new(
        BookingId::new(id),
        NewBooking {
            room_number: RoomNumber::new(room),
            customer: Customer::new(
                String::from("Asha Rao"),
                String::from("asha@example.com"),
                String::from("555-0100"),
            ),
            stay: StayRange::new(check_in, check_out).unwrap(),
            total_amount: Decimal::from(1500),
            booked_on: date!(2024 - 01 - 01),
        },
    )
}

fn rooms(numbers: &[u32]) -> BTreeSet<RoomNumber> {
    numbers.iter().copied().map(RoomNumber::new).collect()
}

#[test]
fn test_room_available_with_no_bookings() {
    assert!(is_room_available(
        &[],
        RoomNumber::new(101),
        date!(2024 - 01 - 10),
        date!(2024 - 01 - 15),
    ));
}

#[test]
fn test_room_unavailable_when_active_booking_overlaps() {
    let bookings: Vec<Booking> = vec![create_test_booking(
        1,
        101,
        date!(2024 - 01 - 10),
        date!(2024 - 01 - 15),
    )];

    assert!(!is_room_available(
        &bookings,
        RoomNumber::new(101),
        date!(2024 - 01 - 14),
        date!(2024 - 01 - 20),
    ));
    // Checkout day is free.
    assert!(is_room_available(
        &bookings,
        RoomNumber::new(101),
        date!(2024 - 01 - 15),
        date!(2024 - 01 - 20),
    ));
    // Other rooms are unaffected.
    assert!(is_room_available(
        &bookings,
        RoomNumber::new(102),
        date!(2024 - 01 - 10),
        date!(2024 - 01 - 15),
    ));
}

#[test]
fn test_inactive_bookings_do_not_block() {
    let mut cancelled: Booking =
        create_test_booking(1, 101, date!(2024 - 01 - 10), date!(2024 - 01 - 15));
    cancelled.status = BookingStatus::Cancelled;
    let mut departed: Booking =
        create_test_booking(2, 101, date!(2024 - 01 - 10), date!(2024 - 01 - 15));
    departed.status = BookingStatus::CheckedOut;

    assert!(is_room_available(
        &[cancelled, departed],
        RoomNumber::new(101),
        date!(2024 - 01 - 11),
        date!(2024 - 01 - 12),
    ));
}

#[test]
fn test_checked_in_booking_blocks() {
    let mut stay: Booking =
        create_test_booking(1, 101, date!(2024 - 01 - 10), date!(2024 - 01 - 15));
    stay.status = BookingStatus::CheckedIn;

    assert!(!is_room_available(
        &[stay],
        RoomNumber::new(101),
        date!(2024 - 01 - 12),
        date!(2024 - 01 - 13),
    ));
}

#[test]
fn test_three_day_grid_with_one_booking_on_day_two() {
    let day1: Date = date!(2024 - 06 - 01);
    let day2: Date = date!(2024 - 06 - 02);
    let day3: Date = date!(2024 - 06 - 03);
    let bookings: Vec<Booking> = vec![create_test_booking(1, 101, day2, day3)];

    let grid: AvailabilityGrid = compute_availability_grid(
        &[RoomNumber::new(101), RoomNumber::new(102)],
        &bookings,
        day1,
        3,
    )
    .unwrap();

    assert_eq!(grid.len(), 3);
    assert_eq!(grid[&day1], rooms(&[101, 102]));
    assert_eq!(grid[&day2], rooms(&[102]));
    assert_eq!(grid[&day3], rooms(&[101, 102]));
}

#[test]
fn test_grid_clips_bookings_to_horizon() {
    let start: Date = date!(2024 - 06 - 10);
    let bookings: Vec<Booking> = vec![
        // Started before the horizon, ends inside it.
        create_test_booking(1, 101, date!(2024 - 06 - 05), date!(2024 - 06 - 12)),
        // Starts inside the horizon, ends after it.
        create_test_booking(2, 102, date!(2024 - 06 - 13), date!(2024 - 07 - 01)),
        // Entirely before the horizon.
        create_test_booking(3, 103, date!(2024 - 05 - 01), date!(2024 - 05 - 03)),
    ];

    let grid: AvailabilityGrid = compute_availability_grid(
        &[
            RoomNumber::new(101),
            RoomNumber::new(102),
            RoomNumber::new(103),
        ],
        &bookings,
        start,
        5,
    )
    .unwrap();

    assert_eq!(grid[&date!(2024 - 06 - 10)], rooms(&[102, 103]));
    assert_eq!(grid[&date!(2024 - 06 - 11)], rooms(&[102, 103]));
    assert_eq!(grid[&date!(2024 - 06 - 12)], rooms(&[101, 102, 103]));
    assert_eq!(grid[&date!(2024 - 06 - 13)], rooms(&[101, 103]));
    assert_eq!(grid[&date!(2024 - 06 - 14)], rooms(&[101, 103]));
    assert!(!grid.contains_key(&date!(2024 - 06 - 15)));
}

#[test]
fn test_grid_ignores_unknown_rooms_and_inactive_bookings() {
    let start: Date = date!(2024 - 06 - 10);
    let mut cancelled: Booking = create_test_booking(1, 101, start, date!(2024 - 06 - 12));
    cancelled.status = BookingStatus::Cancelled;
    let stray: Booking = create_test_booking(2, 999, start, date!(2024 - 06 - 12));

    let grid: AvailabilityGrid =
        compute_availability_grid(&[RoomNumber::new(101)], &[cancelled, stray], start, 2).unwrap();

    assert!(grid.values().all(|free| *free == rooms(&[101])));
}

#[test]
fn test_grid_with_no_rooms_still_lists_dates() {
    let grid: AvailabilityGrid =
        compute_availability_grid(&[], &[], date!(2024 - 06 - 10), 30).unwrap();
    assert_eq!(grid.len(), 30);
    assert!(grid.values().all(BTreeSet::is_empty));
}
