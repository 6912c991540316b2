// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::RequestStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Hours must be a finite value greater than zero.
    InvalidHours(f64),
    /// A username is empty or invalid.
    InvalidName(String),
    /// Request status text could not be parsed.
    InvalidRequestStatus(String),
    /// Student does not exist.
    StudentNotFound(i64),
    /// Staff member does not exist.
    StaffNotFound(i64),
    /// Hours request does not exist.
    RequestNotFound(i64),
    /// Accolade does not exist.
    AccoladeNotFound(i64),
    /// The request has already been processed.
    RequestNotPending {
        /// The request identifier.
        request_id: i64,
        /// The status the request was found in.
        status: RequestStatus,
    },
    /// The student already holds this award.
    DuplicateAward {
        /// The student identifier.
        student_id: i64,
        /// The name of the milestone or accolade.
        name: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHours(hours) => {
                write!(f, "Invalid hours: {hours}. Must be greater than 0")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidRequestStatus(status) => {
                write!(f, "Invalid request status: '{status}'")
            }
            Self::StudentNotFound(id) => write!(f, "Student {id} not found"),
            Self::StaffNotFound(id) => write!(f, "Staff member {id} not found"),
            Self::RequestNotFound(id) => write!(f, "Request {id} not found"),
            Self::AccoladeNotFound(id) => write!(f, "Accolade {id} not found"),
            Self::RequestNotPending { request_id, status } => {
                write!(
                    f,
                    "Request {request_id} cannot be processed: status is '{status}', expected 'pending'"
                )
            }
            Self::DuplicateAward { student_id, name } => {
                write!(f, "Student {student_id} already holds '{name}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
