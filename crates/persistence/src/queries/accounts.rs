// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use hotel_desk::StoredAccount;
use hotel_desk_domain::Username;
use tracing::debug;

use crate::data_models::AccountRow;
use crate::diesel_schema::accounts;
use crate::error::PersistenceError;

/// Retrieves an account and its password hash by username.
///
/// Usernames are stored normalized, so the lookup is case-insensitive.
///
/// # Errors
///
/// Returns an error if the query fails or the row is corrupt.
/// Returns `Ok(None)` if no account has that username.
pub fn find_account_by_username(
    conn: &mut SqliteConnection,
    username: &Username,
) -> Result<Option<StoredAccount>, PersistenceError> {
    debug!("Looking up account by username: {}", username);

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::username.eq(username.value()))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?;

    row.map(AccountRow::into_stored_account).transpose()
}
