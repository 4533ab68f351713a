// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use hotel_desk::CoreError;
use hotel_desk_domain::DomainError;

/// Rule names whose violation means the request collided with existing
/// state rather than breaking a field constraint.
const CONFLICT_RULES: [&str; 4] = [
    "unique_room",
    "unique_username",
    "room_available",
    "booking_lifecycle",
];

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the caller does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The backing store failed.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        /// A description of the failure.
        message: String,
    },
}

impl ApiError {
    /// Returns true for rule violations caused by existing state, such as a
    /// taken room number or an overlapping stay.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DomainRuleViolation { rule, .. } if CONFLICT_RULES.contains(&rule.as_str())
        )
    }
}

fn invalid(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::DuplicateRoom { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_room"),
            message,
        },
        DomainError::DuplicateUsername(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_username"),
            message,
        },
        DomainError::BookingConflict { .. } => ApiError::DomainRuleViolation {
            rule: String::from("room_available"),
            message,
        },
        DomainError::InvalidDateRange { .. } => ApiError::DomainRuleViolation {
            rule: String::from("valid_stay_dates"),
            message,
        },
        DomainError::AmountOverflow { .. } => ApiError::DomainRuleViolation {
            rule: String::from("representable_amount"),
            message,
        },
        DomainError::InvalidRoomNumber(_) => invalid("room_number", message),
        DomainError::InvalidPrice(_) => invalid("price", message),
        DomainError::InvalidRoomType(_) => invalid("room_type", message),
        DomainError::InvalidRoomStatus(_) | DomainError::InvalidBookingStatus(_) => {
            invalid("status", message)
        }
        DomainError::InvalidAmenity(_) => invalid("amenities", message),
        DomainError::InvalidCustomer(_) => invalid("customer", message),
        DomainError::DateArithmeticOverflow { .. } | DomainError::DateParseError { .. } => {
            invalid("date", message)
        }
        DomainError::InvalidUsername(_) => invalid("username", message),
        DomainError::InvalidPassword(_) => invalid("password", message),
        DomainError::InvalidRole(_) => invalid("role", message),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::StorageUnavailable(storage_err) => ApiError::StorageUnavailable {
            message: storage_err.to_string(),
        },
        CoreError::CredentialHashing(msg) => ApiError::StorageUnavailable { message: msg },
    }
}
