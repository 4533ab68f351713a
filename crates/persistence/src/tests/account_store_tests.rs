// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Database, SqliteAccountStore};
use hotel_desk::{AccountDirectory, CoreError, Session};
use hotel_desk_domain::{Account, DomainError, NewAccount, Role, Username};

fn create_test_directory(db: &Database) -> AccountDirectory<SqliteAccountStore> {
    AccountDirectory::with_cost(db.account_store().unwrap(), 4)
}

fn create_test_account(username: &str, role: Role) -> NewAccount {
    NewAccount {
        username: Username::new(username),
        password: String::from("secret123"),
        role,
        full_name: String::from("Front Desk"),
        email: String::from("desk@example.com"),
        phone: String::from("555-0199"),
    }
}

#[test]
fn test_register_stores_hash_and_timestamp() {
    let db: Database = Database::new_in_memory().unwrap();
    let directory: AccountDirectory<SqliteAccountStore> = create_test_directory(&db);

    let account: Account = directory
        .register(create_test_account("desk", Role::Admin))
        .unwrap();

    assert_eq!(account.account_id, 1);
    assert!(account.is_admin());
    assert!(!account.created_at.is_empty());
}

#[test]
fn test_authenticate_against_stored_hash() {
    let db: Database = Database::new_in_memory().unwrap();
    let directory: AccountDirectory<SqliteAccountStore> = create_test_directory(&db);
    directory
        .register(create_test_account("desk", Role::Admin))
        .unwrap();

    let session: Session = directory
        .authenticate("Desk", "secret123")
        .unwrap()
        .unwrap();

    assert!(session.is_admin());
    assert!(directory.authenticate("desk", "nope-nope").unwrap().is_none());
}

#[test]
fn test_duplicate_username_is_rejected() {
    let db: Database = Database::new_in_memory().unwrap();
    let directory: AccountDirectory<SqliteAccountStore> = create_test_directory(&db);
    directory
        .register(create_test_account("desk", Role::Admin))
        .unwrap();

    assert!(matches!(
        directory.register(create_test_account("DESK", Role::Customer)),
        Err(CoreError::DomainViolation(DomainError::DuplicateUsername(_)))
    ));
    assert!(directory.username_exists("desk").unwrap());
}
