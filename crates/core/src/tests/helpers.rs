// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AccountDirectory, BookingLedger, FixedClock, InMemoryAccountStore, InMemoryBookingStore,
    InMemoryRoomStore, RoomRegistry,
};
use hotel_desk_domain::{
    BookingRequest, Customer, NewAccount, Role, Room, RoomNumber, RoomType, Username,
};
use rust_decimal::Decimal;
use time::Date;
use time::macros::date;

pub type TestLedger = BookingLedger<InMemoryBookingStore, FixedClock>;

/// The date every test ledger treats as today.
pub const TODAY: Date = date!(2024 - 01 - 10);

pub fn create_test_ledger() -> TestLedger {
    BookingLedger::new(InMemoryBookingStore::new(), FixedClock::new(TODAY))
}

pub fn create_test_registry() -> RoomRegistry<InMemoryRoomStore> {
    RoomRegistry::new(InMemoryRoomStore::new())
}

pub fn create_test_directory() -> AccountDirectory<InMemoryAccountStore> {
    // Minimum bcrypt cost keeps the suite fast.
    AccountDirectory::with_cost(InMemoryAccountStore::new(), 4)
}

pub fn create_test_room(number: u32) -> Room {
    Room::new(RoomNumber::new(number), RoomType::Double, 1)
}

pub fn create_test_customer() -> Customer {
    Customer::new(
        String::from("Asha Rao"),
        String::from("asha@example.com"),
        String::from("555-0100"),
    )
}

pub fn create_test_request(room: u32, check_in: Date, check_out: Date) -> BookingRequest {
    BookingRequest {
        room_number: RoomNumber::new(room),
        customer: create_test_customer(),
        check_in,
        check_out,
        total_amount: Decimal::from(2500),
    }
}

pub fn create_test_account(username: &str, role: Role) -> NewAccount {
    NewAccount {
        username: Username::new(username),
        password: String::from("secret123"),
        role,
        full_name: String::from("Test Guest"),
        email: String::from("guest@example.com"),
        phone: String::from("555-0100"),
    }
}
