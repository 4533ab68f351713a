// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the hotel desk.
//!
//! `SQLite` stores for rooms, bookings and accounts, built on Diesel.
//!
//! ## Connections
//!
//! A [`Database`] runs the embedded migrations once and then hands out
//! stores. Every store owns its own connection and touches only its own
//! table, so the registry, ledger and account directory never contend for
//! a connection.
//!
//! In-memory databases use a uniquely named shared-cache URL so the stores
//! see the same data. The database lives while the `Database` or any store
//! built from it is alive.
//!
//! ## Testing Philosophy
//!
//! - Tests run against in-memory `SQLite` only
//! - Each test gets its own database from `Database::new_in_memory()`

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod stores;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use stores::{SqliteAccountStore, SqliteBookingStore, SqliteRoomStore};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// An initialized `SQLite` database that hands out stores.
pub struct Database {
    database_url: String,
    // Keeps a shared-cache in-memory database alive until the stores connect.
    _anchor: SqliteConnection,
}

impl Database {
    /// Creates a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let database_url: String = format!("file:memdb_hotel_{db_id}?mode=memory&cache=shared");

        let anchor: SqliteConnection = backend::sqlite::initialize_database(&database_url)?;

        Ok(Self {
            database_url,
            _anchor: anchor,
        })
    }

    /// Opens (creating if needed) a file database in WAL mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let database_url: String = path
            .as_ref()
            .to_str()
            .ok_or_else(|| {
                PersistenceError::InitializationError("Invalid database path".to_string())
            })?
            .to_string();

        let mut anchor: SqliteConnection = backend::sqlite::initialize_database(&database_url)?;
        backend::sqlite::enable_wal_mode(&mut anchor)?;

        info!("Opened database file: {}", database_url);
        Ok(Self {
            database_url,
            _anchor: anchor,
        })
    }

    /// Opens a room store on its own connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub fn room_store(&self) -> Result<SqliteRoomStore, PersistenceError> {
        Ok(SqliteRoomStore::new(self.connect()?))
    }

    /// Opens a booking store on its own connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub fn booking_store(&self) -> Result<SqliteBookingStore, PersistenceError> {
        Ok(SqliteBookingStore::new(self.connect()?))
    }

    /// Opens an account store on its own connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub fn account_store(&self) -> Result<SqliteAccountStore, PersistenceError> {
        Ok(SqliteAccountStore::new(self.connect()?))
    }

    fn connect(&self) -> Result<SqliteConnection, PersistenceError> {
        backend::sqlite::open_connection(&self.database_url)
    }
}
