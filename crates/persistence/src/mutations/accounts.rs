// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use hotel_desk::AccountRecord;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::accounts;
use crate::error::PersistenceError;

/// Inserts an account. The password is already hashed.
///
/// # Errors
///
/// Returns an error if the insert fails, including on a duplicate username.
pub fn insert_account(
    conn: &mut SqliteConnection,
    record: &AccountRecord,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(accounts::table)
        .values((
            accounts::username.eq(record.username.value()),
            accounts::password_hash.eq(&record.password_hash),
            accounts::role.eq(record.role.as_str()),
            accounts::full_name.eq(&record.full_name),
            accounts::email.eq(&record.email),
            accounts::phone.eq(&record.phone),
        ))
        .execute(conn)?;

    let account_id: i64 = get_last_insert_rowid(conn)?;
    info!(
        account_id,
        username = record.username.value(),
        "Inserted account row"
    );
    Ok(account_id)
}
