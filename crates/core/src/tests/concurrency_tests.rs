// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    TestLedger, create_test_ledger, create_test_registry, create_test_request, create_test_room,
};
use crate::{CoreError, InMemoryRoomStore, RoomRegistry};
use hotel_desk_domain::{Booking, DomainError};
use std::sync::Arc;
use std::thread;
use time::macros::date;

#[test]
fn test_concurrent_overlapping_bookings_yield_one() {
    let ledger: Arc<TestLedger> = Arc::new(create_test_ledger());

    let handles: Vec<thread::JoinHandle<Result<Booking, CoreError>>> = (0..8)
        .map(|i| {
            let ledger: Arc<TestLedger> = Arc::clone(&ledger);
            thread::spawn(move || {
                // Every request overlaps night 2024-01-12.
                ledger.create_booking(create_test_request(
                    101,
                    date!(2024 - 01 - 11),
                    date!(2024 - 01 - 13).saturating_add(time::Duration::days(i)),
                ))
            })
        })
        .collect();

    let results: Vec<Result<Booking, CoreError>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes: usize = results.iter().filter(|r| r.is_ok()).count();
    let conflicts: usize = results
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(CoreError::DomainViolation(DomainError::BookingConflict { .. }))
            )
        })
        .count();

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(ledger.total_bookings().unwrap(), 1);
}

#[test]
fn test_concurrent_duplicate_rooms_yield_one() {
    let registry: Arc<RoomRegistry<InMemoryRoomStore>> = Arc::new(create_test_registry());

    let handles: Vec<thread::JoinHandle<Result<(), CoreError>>> = (0..8)
        .map(|_| {
            let registry: Arc<RoomRegistry<InMemoryRoomStore>> = Arc::clone(&registry);
            thread::spawn(move || registry.add_room(create_test_room(101)))
        })
        .collect();

    let successes: usize = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(Result::is_ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(registry.room_count().unwrap(), 1);
}
