// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A positive, finite quantity of service hours.
///
/// Construction is the only validation point: once an `Hours` value exists
/// it is known to be greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Hours(f64);

impl Hours {
    /// Creates a new `Hours` value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHours` if the value is not finite or
    /// is not greater than zero.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidHours(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw hour count.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Hours {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hours> for f64 {
    fn from(hours: Hours) -> Self {
        hours.0
    }
}

impl std::fmt::Display for Hours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&display_hours(self.0))
    }
}

/// Formats an hour total the way activity descriptions print it.
///
/// Whole numbers keep one decimal place (`12.0`); fractional values print as-is.
#[must_use]
pub fn display_hours(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// The disposition of an hours request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting a staff decision.
    #[default]
    Pending,
    /// Approved by staff; a matching `LoggedHours` row exists.
    Approved,
    /// Denied by staff.
    Denied,
}

impl RequestStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }

    /// Returns whether a request in this status may still be approved or denied.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// The canonical identifier assigned by the store.
    pub student_id: i64,
    /// The student's username.
    pub username: String,
}

impl Student {
    /// Creates a new `Student`.
    #[must_use]
    pub const fn new(student_id: i64, username: String) -> Self {
        Self {
            student_id,
            username,
        }
    }
}

/// A registered staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// The canonical identifier assigned by the store.
    pub staff_id: i64,
    /// The staff member's username.
    pub username: String,
}

impl Staff {
    /// Creates a new `Staff`.
    #[must_use]
    pub const fn new(staff_id: i64, username: String) -> Self {
        Self { staff_id, username }
    }
}

/// A student's claim for service hours awaiting staff disposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// The canonical identifier assigned by the store.
    pub request_id: i64,
    /// The student who submitted the request.
    pub student_id: i64,
    /// The hours claimed.
    pub hours: Hours,
    /// The current disposition.
    pub status: RequestStatus,
}

/// Hours a staff member has approved for a student.
///
/// Created only by approving a `Request`; never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedHours {
    /// The canonical identifier assigned by the store.
    pub logged_hours_id: i64,
    /// The student credited with the hours.
    pub student_id: i64,
    /// The staff member who approved them.
    pub staff_id: i64,
    /// The approved hours.
    pub hours: Hours,
    /// Always `Approved` for rows created through request approval.
    pub status: RequestStatus,
}

/// A fixed hour-threshold achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// The canonical identifier assigned by the store.
    pub milestone_id: i64,
    /// The display name (e.g. "10 Hours Milestone").
    pub name: String,
    /// Approved hours required to qualify.
    pub required_hours: f64,
    /// Optional description.
    pub description: Option<String>,
}

/// A named honor awarded independently of the hour ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accolade {
    /// The canonical identifier assigned by the store.
    pub accolade_id: i64,
    /// The display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// A milestone held by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneAward {
    /// The student holding the milestone.
    pub student_id: i64,
    /// The milestone identifier.
    pub milestone_id: i64,
    /// The milestone name.
    pub milestone_name: String,
    /// The staff member whose action triggered the award, if any.
    pub awarded_by: Option<i64>,
    /// Free-form description.
    pub description: Option<String>,
    /// When the award was recorded (RFC 3339).
    pub awarded_at: String,
}

/// An accolade held by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccoladeAward {
    /// The student holding the accolade.
    pub student_id: i64,
    /// The accolade identifier.
    pub accolade_id: i64,
    /// The accolade name.
    pub accolade_name: String,
    /// The staff member who awarded it, if any.
    pub awarded_by: Option<i64>,
    /// Free-form description.
    pub description: Option<String>,
    /// When the award was recorded (RFC 3339).
    pub awarded_at: String,
}
