// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use hotel_desk::{
    AccountDirectory, BookingLedger, FixedClock, InMemoryAccountStore, InMemoryBookingStore,
    InMemoryRoomStore, RoomRegistry, Session,
};
use hotel_desk_domain::{Role, Username};
use std::sync::Arc;
use time::Date;
use time::macros::date;

use crate::{CreateBookingRequest, CreateRoomRequest, RegisterRequest, SessionTable, create_room};

/// The date every test desk treats as today.
pub const TODAY: Date = date!(2024 - 01 - 10);

pub struct TestDesk {
    pub registry: RoomRegistry<InMemoryRoomStore>,
    pub ledger: BookingLedger<InMemoryBookingStore, Arc<FixedClock>>,
    pub clock: Arc<FixedClock>,
    pub accounts: AccountDirectory<InMemoryAccountStore>,
    pub sessions: SessionTable,
}

pub fn create_test_desk() -> TestDesk {
    let clock: Arc<FixedClock> = Arc::new(FixedClock::new(TODAY));
    TestDesk {
        registry: RoomRegistry::new(InMemoryRoomStore::new()),
        ledger: BookingLedger::new(InMemoryBookingStore::new(), Arc::clone(&clock)),
        clock,
        // Minimum bcrypt cost keeps the suite fast.
        accounts: AccountDirectory::with_cost(InMemoryAccountStore::new(), 4),
        sessions: SessionTable::new(),
    }
}

pub fn create_test_admin() -> Session {
    Session {
        account_id: 1,
        username: Username::new("frontdesk"),
        role: Role::Admin,
    }
}

pub fn create_test_customer() -> Session {
    Session {
        account_id: 2,
        username: Username::new("asha"),
        role: Role::Customer,
    }
}

pub fn create_room_request(room_number: u32, room_type: &str) -> CreateRoomRequest {
    CreateRoomRequest {
        room_number,
        room_type: room_type.to_string(),
        floor: 1,
        status: None,
        amenities: Vec::new(),
        price: None,
    }
}

pub fn create_booking_request(
    room_number: u32,
    check_in: &str,
    check_out: &str,
) -> CreateBookingRequest {
    CreateBookingRequest {
        room_number,
        customer_name: String::from("Asha Rao"),
        customer_email: String::from("asha@example.com"),
        customer_phone: String::from("555-0100"),
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
    }
}

pub fn create_register_request(username: &str, role: Option<&str>) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: String::from("secret123"),
        full_name: String::from("Test Guest"),
        email: String::from("guest@example.com"),
        phone: String::from("555-0100"),
        role: role.map(str::to_string),
    }
}

/// Adds a room of `room_type` as the test admin.
pub fn seed_room(desk: &TestDesk, room_number: u32, room_type: &str) {
    create_room(
        &desk.registry,
        &create_test_admin(),
        &create_room_request(room_number, room_type),
    )
    .expect("Failed to seed room");
}
