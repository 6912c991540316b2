// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use service_hours::CoreError;
use service_hours_domain::DomainError;
use service_hours_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
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
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    pub(crate) fn student_not_found(student_id: i64) -> Self {
        translate_domain_error(DomainError::StudentNotFound(student_id))
    }

    pub(crate) fn staff_not_found(staff_id: i64) -> Self {
        translate_domain_error(DomainError::StaffNotFound(staff_id))
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidHours(value) => ApiError::InvalidInput {
            field: String::from("hours"),
            message: format!("Invalid hours: {value}. Must be greater than 0"),
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("username"),
            message: msg,
        },
        DomainError::InvalidRequestStatus(status) => ApiError::Internal {
            message: format!("Stored request has unknown status '{status}'"),
        },
        DomainError::StudentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Student"),
            message: format!("Student {id} does not exist"),
        },
        DomainError::StaffNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Staff"),
            message: format!("Staff member {id} does not exist"),
        },
        DomainError::RequestNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Request"),
            message: format!("Request {id} does not exist"),
        },
        DomainError::AccoladeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Accolade"),
            message: format!("Accolade {id} does not exist"),
        },
        err @ DomainError::RequestNotPending { .. } => ApiError::DomainRuleViolation {
            rule: String::from("request_pending"),
            message: err.to_string(),
        },
        err @ DomainError::DuplicateAward { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_award"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Store(msg) => ApiError::Internal {
            message: format!("Store failure: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::CommandRejected(core_err) => translate_core_error(core_err),
        PersistenceError::AlreadyExists(msg) => ApiError::DomainRuleViolation {
            rule: String::from("unique_username"),
            message: format!("Username is already registered ({msg})"),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: msg,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}
