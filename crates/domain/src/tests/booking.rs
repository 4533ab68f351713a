// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingStatus, BookingTransition, DomainError};
use std::str::FromStr;

#[test]
fn test_status_string_round_trip() {
    let statuses: [BookingStatus; 4] = [
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
    ];

    for status in statuses {
        let parsed: BookingStatus = BookingStatus::from_str(status.as_str()).unwrap();
        assert_eq!(status, parsed);
    }
}

#[test]
fn test_invalid_status_string() {
    let result: Result<BookingStatus, DomainError> = BookingStatus::from_str("CONFIRMED");
    assert!(matches!(result, Err(DomainError::InvalidBookingStatus(_))));
}

#[test]
fn test_active_states() {
    assert!(BookingStatus::Confirmed.is_active());
    assert!(BookingStatus::CheckedIn.is_active());
    assert!(!BookingStatus::CheckedOut.is_active());
    assert!(!BookingStatus::Cancelled.is_active());
}

#[test]
fn test_forward_transitions() {
    assert_eq!(
        BookingStatus::Confirmed.after(BookingTransition::CheckIn),
        Some(BookingStatus::CheckedIn)
    );
    assert_eq!(
        BookingStatus::CheckedIn.after(BookingTransition::CheckOut),
        Some(BookingStatus::CheckedOut)
    );
}

#[test]
fn test_cancel_from_active_states() {
    assert_eq!(
        BookingStatus::Confirmed.after(BookingTransition::Cancel),
        Some(BookingStatus::Cancelled)
    );
    assert_eq!(
        BookingStatus::CheckedIn.after(BookingTransition::Cancel),
        Some(BookingStatus::Cancelled)
    );
}

#[test]
fn test_no_transitions_from_terminal_states() {
    for terminal in [BookingStatus::CheckedOut, BookingStatus::Cancelled] {
        assert!(terminal.is_terminal());
        for transition in [
            BookingTransition::CheckIn,
            BookingTransition::CheckOut,
            BookingTransition::Cancel,
        ] {
            assert_eq!(terminal.after(transition), None);
        }
    }
}

#[test]
fn test_check_out_requires_check_in() {
    assert_eq!(
        BookingStatus::Confirmed.after(BookingTransition::CheckOut),
        None
    );
    assert_eq!(
        BookingStatus::CheckedIn.after(BookingTransition::CheckIn),
        None
    );
}

#[test]
fn test_sources_agree_with_after() {
    let all: [BookingStatus; 4] = [
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
    ];
    for transition in [
        BookingTransition::CheckIn,
        BookingTransition::CheckOut,
        BookingTransition::Cancel,
    ] {
        for status in all {
            assert_eq!(
                BookingStatus::sources_for(transition).contains(&status),
                status.after(transition).is_some(),
                "{status} / {transition}"
            );
        }
    }
}
