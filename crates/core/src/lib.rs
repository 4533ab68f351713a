// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod accounts;
mod clock;
mod error;
mod ledger;
mod memory;
mod registry;
mod session;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use accounts::AccountDirectory;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use ledger::BookingLedger;
pub use memory::{InMemoryAccountStore, InMemoryBookingStore, InMemoryRoomStore};
pub use registry::RoomRegistry;
pub use session::Session;
pub use store::{AccountRecord, AccountStore, BookingStore, RoomStore, StorageError, StoredAccount};
