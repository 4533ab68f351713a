// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization checks and the login session table.

use hotel_desk::Session;
use hotel_desk_domain::Role;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

use crate::error::ApiError;

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if a caller may change the room catalog.
    ///
    /// Only Admin callers may add, update or delete rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller does not have the Admin role.
    pub fn authorize_manage_rooms(session: &Session, action: &str) -> Result<(), ApiError> {
        if session.is_admin() {
            Ok(())
        } else {
            Err(ApiError::Unauthorized {
                action: action.to_string(),
                required_role: String::from(Role::Admin.as_str()),
            })
        }
    }

    /// Checks if a caller may register an account with `role`.
    ///
    /// Anyone may self-register a Customer account; only an Admin may
    /// create another Admin.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-admin asks for the Admin role.
    pub fn authorize_register(caller: Option<&Session>, role: Role) -> Result<(), ApiError> {
        match role {
            Role::Customer => Ok(()),
            Role::Admin if caller.is_some_and(Session::is_admin) => Ok(()),
            Role::Admin => Err(ApiError::Unauthorized {
                action: String::from("register_admin"),
                required_role: String::from(Role::Admin.as_str()),
            }),
        }
    }
}

/// Bearer tokens issued at login, mapped to their sessions.
///
/// Tokens live until logout or process exit.
#[derive(Debug, Default)]
pub struct SessionTable {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a session and returns its new token.
    pub fn issue(&self, session: Session) -> String {
        let token: String = generate_session_token();
        debug!(username = session.username.value(), "Issued session token");
        self.sessions.lock().insert(token.clone(), session);
        token
    }

    /// Looks up the session behind a token.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<Session> {
        self.sessions.lock().get(token).cloned()
    }

    /// Drops a token. Returns `false` if it was not issued.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.lock().remove(token).is_some()
    }

    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().len()
    }
}

fn generate_session_token() -> String {
    format!(
        "session_{:016x}{:016x}",
        rand::random::<u64>(),
        rand::random::<u64>()
    )
}
