// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::PersistenceError;

/// Fixed-width UTC timestamp with microsecond precision.
///
/// Every stored timestamp has the same width, so lexical order on the
/// text column matches chronological order.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
);

/// Returns the current UTC time as an RFC 3339 string.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn now_timestamp() -> Result<String, PersistenceError> {
    Ok(OffsetDateTime::now_utc().format(TIMESTAMP_FORMAT)?)
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub student_id: i64,
    pub name: String,
    pub hours: f64,
}

/// Approved hours total for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovedHoursTotal {
    pub student_id: i64,
    pub name: String,
    pub total: f64,
}

/// A stored request together with its bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestData {
    pub request_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub hours: f64,
    pub status: String,
    pub created_at: String,
    pub processed_at: Option<String>,
}

/// A stored logged-hours row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedHoursData {
    pub logged_hours_id: i64,
    pub student_id: i64,
    pub staff_id: i64,
    pub hours: f64,
    pub status: String,
    pub created_at: String,
}
