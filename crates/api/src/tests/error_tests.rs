// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hotel_desk::{CoreError, StorageError};
use hotel_desk_domain::{DomainError, RoomNumber};
use time::macros::date;

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_duplicate_room_is_a_conflict() {
    let err = translate_domain_error(DomainError::DuplicateRoom {
        room_number: RoomNumber::new(101),
    });

    assert!(matches!(
        &err,
        ApiError::DomainRuleViolation { rule, message }
            if rule == "unique_room" && message.contains("101")
    ));
    assert!(err.is_conflict());
}

#[test]
fn test_booking_conflict_is_a_conflict() {
    let err = translate_domain_error(DomainError::BookingConflict {
        room_number: RoomNumber::new(101),
        check_in: date!(2024 - 01 - 14),
        check_out: date!(2024 - 01 - 20),
    });

    assert!(err.is_conflict());
}

#[test]
fn test_invalid_date_range_is_a_rule_but_not_a_conflict() {
    let err = translate_domain_error(DomainError::InvalidDateRange {
        check_in: date!(2024 - 01 - 15),
        check_out: date!(2024 - 01 - 15),
        reason: String::from("Check-out date must be after check-in date"),
    });

    assert!(matches!(
        &err,
        ApiError::DomainRuleViolation { rule, .. } if rule == "valid_stay_dates"
    ));
    assert!(!err.is_conflict());
}

#[test]
fn test_field_errors_name_their_field() {
    let cases: Vec<(DomainError, &str)> = vec![
        (DomainError::InvalidPrice(String::from("-1")), "price"),
        (DomainError::InvalidRoomType(String::from("Hut")), "room_type"),
        (DomainError::InvalidRoomStatus(String::from("Wet")), "status"),
        (DomainError::InvalidAmenity(String::from("Spa")), "amenities"),
        (DomainError::InvalidUsername(String::from("a b")), "username"),
        (
            DomainError::DateParseError {
                date_string: String::from("tomorrow"),
                error: String::from("invalid"),
            },
            "date",
        ),
    ];

    for (domain_err, expected_field) in cases {
        let err = translate_domain_error(domain_err);
        assert!(
            matches!(&err, ApiError::InvalidInput { field, .. } if field == expected_field),
            "unexpected translation {err:?}"
        );
        assert!(!err.is_conflict());
    }
}

#[test]
fn test_storage_failure_is_unavailable() {
    let err = translate_core_error(CoreError::StorageUnavailable(StorageError::Backend(
        String::from("disk I/O error"),
    )));

    assert!(matches!(
        err,
        ApiError::StorageUnavailable { message } if message.contains("disk I/O error")
    ));
}

#[test]
fn test_core_domain_violation_is_unwrapped() {
    let err = translate_core_error(CoreError::DomainViolation(DomainError::DuplicateUsername(
        String::from("asha"),
    )));

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { rule, .. } if rule == "unique_username"
    ));
}
