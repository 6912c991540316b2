// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use service_hours_domain::DomainError;

/// Errors that can occur while executing a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The underlying store failed; the unit of work must be rolled back.
    Store(String),
}

impl CoreError {
    /// Returns whether this error is a request that was no longer pending.
    ///
    /// Invokers report this outcome as an unsuccessful result rather
    /// than an error.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::DomainViolation(DomainError::RequestNotPending { .. })
        )
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Store(msg) => write!(f, "Store failure: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
