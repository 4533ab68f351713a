// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hotel_desk_domain::{Account, Role, Username};
use serde::Serialize;

/// The authenticated caller, returned by a successful login and passed
/// explicitly to every operation that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub account_id: i64,
    pub username: Username,
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn for_account(account: &Account) -> Self {
        Self {
            account_id: account.account_id,
            username: account.username.clone(),
            role: account.role,
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}
