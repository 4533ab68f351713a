// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::session::Session;
use crate::store::{AccountRecord, AccountStore, StoredAccount};
use hotel_desk_domain::{Account, DomainError, NewAccount, Username, validate_new_account};
use parking_lot::Mutex;
use tracing::{info, warn};

/// Registered accounts and credential checks.
pub struct AccountDirectory<S: AccountStore> {
    store: Mutex<S>,
    hash_cost: u32,
}

impl<S: AccountStore> AccountDirectory<S> {
    /// Creates a directory hashing at `bcrypt::DEFAULT_COST`.
    pub fn new(store: S) -> Self {
        Self::with_cost(store, bcrypt::DEFAULT_COST)
    }

    /// Creates a directory hashing at an explicit bcrypt cost.
    pub fn with_cost(store: S, hash_cost: u32) -> Self {
        Self {
            store: Mutex::new(store),
            hash_cost,
        }
    }

    /// Registers an account.
    ///
    /// The password is hashed before the store lock is taken; the
    /// uniqueness check and insert then happen under the lock.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The fields fail validation
    /// - The username is taken
    /// - Hashing fails
    /// - The store fails
    pub fn register(&self, new_account: NewAccount) -> Result<Account, CoreError> {
        validate_new_account(&new_account)?;

        let password_hash: String = bcrypt::hash(&new_account.password, self.hash_cost)
            .map_err(|e| CoreError::CredentialHashing(format!("Failed to hash password: {e}")))?;

        let mut store = self.store.lock();
        if store.find_account(&new_account.username)?.is_some() {
            warn!(
                username = new_account.username.value(),
                "Rejected duplicate username"
            );
            return Err(CoreError::DomainViolation(DomainError::DuplicateUsername(
                new_account.username.value().to_string(),
            )));
        }

        let account: Account = store.insert_account(AccountRecord {
            username: new_account.username,
            password_hash,
            role: new_account.role,
            full_name: new_account.full_name,
            email: new_account.email,
            phone: new_account.phone,
        })?;
        drop(store);

        info!(
            account_id = account.account_id,
            username = account.username.value(),
            role = account.role.as_str(),
            "Registered account"
        );
        Ok(account)
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn username_exists(&self, username: &str) -> Result<bool, CoreError> {
        Ok(self
            .store
            .lock()
            .find_account(&Username::new(username))?
            .is_some())
    }

    /// Checks a username and password.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Session))` if the credentials match
    /// * `Ok(None)` if the username is unknown or the password is wrong
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the stored hash is unreadable.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<Session>, CoreError> {
        let stored: Option<StoredAccount> =
            self.store.lock().find_account(&Username::new(username))?;

        let Some(stored) = stored else {
            warn!(username, "Login failed, unknown username");
            return Ok(None);
        };

        let matches: bool = bcrypt::verify(password, &stored.password_hash)
            .map_err(|e| CoreError::CredentialHashing(format!("Failed to verify password: {e}")))?;

        if matches {
            info!(
                account_id = stored.account.account_id,
                username = stored.account.username.value(),
                "Login succeeded"
            );
            Ok(Some(Session::for_account(&stored.account)))
        } else {
            warn!(username, "Login failed, wrong password");
            Ok(None)
        }
    }
}
