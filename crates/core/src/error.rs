// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StorageError;
use hotel_desk_domain::DomainError;

/// Errors returned by the registry, ledger and account directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The backing store failed. Never retried.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
    /// bcrypt could not hash or verify a password.
    #[error("Credential hashing failed: {0}")]
    CredentialHashing(String),
}
