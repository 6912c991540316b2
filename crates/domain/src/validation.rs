// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Hours, Request, RequestStatus};

/// Maximum username length accepted at registration.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Validates a username for a student or staff member.
///
/// # Errors
///
/// Returns an error if:
/// - The username is empty or only whitespace
/// - The username is longer than `MAX_USERNAME_LENGTH` characters
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Username cannot be empty",
        )));
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(DomainError::InvalidName(format!(
            "Username cannot exceed {MAX_USERNAME_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validates a raw hour value and converts it into `Hours`.
///
/// # Errors
///
/// Returns `DomainError::InvalidHours` if the value is not a positive, finite number.
pub fn validate_hours(value: f64) -> Result<Hours, DomainError> {
    Hours::new(value)
}

/// Validates that a request is still awaiting a staff decision.
///
/// # Errors
///
/// Returns `DomainError::RequestNotPending` if the request was already approved or denied.
pub fn validate_request_pending(request: &Request) -> Result<(), DomainError> {
    if request.status != RequestStatus::Pending {
        return Err(DomainError::RequestNotPending {
            request_id: request.request_id,
            status: request.status,
        });
    }
    Ok(())
}
