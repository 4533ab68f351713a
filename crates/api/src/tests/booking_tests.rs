// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

use crate::{
    ApiError, BookingResponse, ListBookingsQuery, UpdateRoomRequest, cancel_booking, check_in,
    check_out, create_booking, get_booking, list_bookings, update_room,
};

use super::helpers::{
    TestDesk, create_booking_request, create_test_admin, create_test_customer, create_test_desk,
    seed_room,
};

fn book(desk: &TestDesk, room: u32, check_in: &str, check_out: &str) -> BookingResponse {
    create_booking(
        &desk.registry,
        &desk.ledger,
        &create_test_customer(),
        create_booking_request(room, check_in, check_out),
    )
    .expect("Booking should succeed")
}

fn assert_rule(err: &ApiError, expected_rule: &str) {
    match err {
        ApiError::DomainRuleViolation { rule, .. } => assert_eq!(rule, expected_rule),
        other => panic!("Expected DomainRuleViolation({expected_rule}), got {other:?}"),
    }
}

#[test]
fn test_booking_total_is_room_price_times_nights() {
    let desk = create_test_desk();
    seed_room(&desk, 305, "Suite");

    let booking = book(&desk, 305, "2024-01-12", "2024-01-15");

    assert_eq!(booking.nights, 3);
    assert_eq!(booking.total_amount, Decimal::from(21000));
    assert_eq!(booking.status, "confirmed");
    assert_eq!(booking.check_in, "2024-01-12");
    assert_eq!(booking.check_out, "2024-01-15");
    assert_eq!(booking.booked_on, "2024-01-10");
}

#[test]
fn test_booking_uses_current_room_price() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");
    update_room(
        &desk.registry,
        &create_test_admin(),
        101,
        &UpdateRoomRequest {
            room_type: String::from("Single"),
            floor: 1,
            status: String::from("Available"),
            amenities: Vec::new(),
            price: Some(Decimal::new(199_999, 2)),
        },
    )
    .unwrap();

    let booking = book(&desk, 101, "2024-01-10", "2024-01-12");

    assert_eq!(booking.total_amount, Decimal::new(399_998, 2));
}

#[test]
fn test_booking_unknown_room_is_not_found() {
    let desk = create_test_desk();

    let err = create_booking(
        &desk.registry,
        &desk.ledger,
        &create_test_customer(),
        create_booking_request(999, "2024-01-12", "2024-01-14"),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
    assert_eq!(desk.ledger.total_bookings().unwrap(), 0);
}

#[test]
fn test_booking_rejects_malformed_date() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");

    let err = create_booking(
        &desk.registry,
        &desk.ledger,
        &create_test_customer(),
        create_booking_request(101, "12/01/2024", "2024-01-14"),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "date"));
    assert_eq!(desk.ledger.total_bookings().unwrap(), 0);
}

#[test]
fn test_booking_rejects_past_check_in() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");

    let err = create_booking(
        &desk.registry,
        &desk.ledger,
        &create_test_customer(),
        create_booking_request(101, "2024-01-09", "2024-01-11"),
    )
    .unwrap_err();

    assert_rule(&err, "valid_stay_dates");
    assert!(!err.is_conflict());
}

#[test]
fn test_booking_rejects_zero_nights() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");

    let err = create_booking(
        &desk.registry,
        &desk.ledger,
        &create_test_customer(),
        create_booking_request(101, "2024-01-12", "2024-01-12"),
    )
    .unwrap_err();

    assert_rule(&err, "valid_stay_dates");
}

#[test]
fn test_booking_rejects_invalid_customer_email() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");
    let mut request = create_booking_request(101, "2024-01-12", "2024-01-14");
    request.customer_email = String::from("not-an-email");

    let err = create_booking(
        &desk.registry,
        &desk.ledger,
        &create_test_customer(),
        request,
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "customer"));
}

#[test]
fn test_overlapping_booking_conflicts() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");
    book(&desk, 101, "2024-01-10", "2024-01-15");

    let err = create_booking(
        &desk.registry,
        &desk.ledger,
        &create_test_customer(),
        create_booking_request(101, "2024-01-14", "2024-01-20"),
    )
    .unwrap_err();

    assert_rule(&err, "room_available");
    assert!(err.is_conflict());
}

#[test]
fn test_back_to_back_bookings_do_not_conflict() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");
    book(&desk, 101, "2024-01-10", "2024-01-15");

    let second = book(&desk, 101, "2024-01-15", "2024-01-20");

    assert_eq!(second.status, "confirmed");
    assert_eq!(desk.ledger.total_bookings().unwrap(), 2);
}

#[test]
fn test_lifecycle_through_check_out() {
    let desk = create_test_desk();
    let session = create_test_customer();
    seed_room(&desk, 101, "Single");
    let booking = book(&desk, 101, "2024-01-10", "2024-01-12");

    let checked_in = check_in(&desk.ledger, &session, booking.booking_id).unwrap();
    assert_eq!(checked_in.status, "checked_in");

    let checked_out = check_out(&desk.ledger, &session, booking.booking_id).unwrap();
    assert_eq!(checked_out.status, "checked_out");

    let err = cancel_booking(&desk.ledger, &session, booking.booking_id).unwrap_err();
    assert_rule(&err, "booking_lifecycle");
    assert!(err.is_conflict());

    let stored = get_booking(&desk.ledger, booking.booking_id).unwrap();
    assert_eq!(stored.status, "checked_out");
}

#[test]
fn test_check_out_requires_check_in() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");
    let booking = book(&desk, 101, "2024-01-10", "2024-01-12");

    let err = check_out(&desk.ledger, &create_test_customer(), booking.booking_id).unwrap_err();

    assert_rule(&err, "booking_lifecycle");
    let stored = get_booking(&desk.ledger, booking.booking_id).unwrap();
    assert_eq!(stored.status, "confirmed");
}

#[test]
fn test_cancel_frees_the_room() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");
    let booking = book(&desk, 101, "2024-01-12", "2024-01-14");

    let cancelled = cancel_booking(&desk.ledger, &create_test_customer(), booking.booking_id)
        .expect("Cancel should succeed");
    assert_eq!(cancelled.status, "cancelled");

    let rebooked = book(&desk, 101, "2024-01-12", "2024-01-14");
    assert_ne!(rebooked.booking_id, booking.booking_id);
}

#[test]
fn test_transition_on_unknown_booking_is_not_found() {
    let desk = create_test_desk();

    let err = check_in(&desk.ledger, &create_test_customer(), 42).unwrap_err();

    assert!(matches!(
        err,
        ApiError::ResourceNotFound { resource_type, .. } if resource_type == "Booking"
    ));
}

#[test]
fn test_list_bookings_filters() {
    let desk = create_test_desk();
    seed_room(&desk, 101, "Single");
    seed_room(&desk, 102, "Single");
    let early = book(&desk, 101, "2024-01-11", "2024-01-12");
    let late = book(&desk, 102, "2024-01-20", "2024-01-22");
    let mut other_guest = create_booking_request(101, "2024-01-15", "2024-01-16");
    other_guest.customer_name = String::from("Bram Osei");
    create_booking(
        &desk.registry,
        &desk.ledger,
        &create_test_customer(),
        other_guest,
    )
    .unwrap();
    cancel_booking(&desk.ledger, &create_test_customer(), early.booking_id).unwrap();

    let all = list_bookings(&desk.ledger, &ListBookingsQuery::default()).unwrap();
    let check_ins: Vec<&str> = all.bookings.iter().map(|b| b.check_in.as_str()).collect();
    assert_eq!(check_ins, vec!["2024-01-20", "2024-01-15", "2024-01-11"]);

    let cancelled = list_bookings(
        &desk.ledger,
        &ListBookingsQuery {
            status: Some(String::from("cancelled")),
            customer: Some(String::from("bram")),
        },
    )
    .unwrap();
    assert_eq!(cancelled.bookings.len(), 1);
    assert_eq!(cancelled.bookings[0].booking_id, early.booking_id);

    let asha = list_bookings(
        &desk.ledger,
        &ListBookingsQuery {
            status: None,
            customer: Some(String::from("ASHA")),
        },
    )
    .unwrap();
    let ids: Vec<i64> = asha.bookings.iter().map(|b| b.booking_id).collect();
    assert_eq!(ids, vec![late.booking_id, early.booking_id]);

    let err = list_bookings(
        &desk.ledger,
        &ListBookingsQuery {
            status: Some(String::from("pending")),
            customer: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "status"));
}
