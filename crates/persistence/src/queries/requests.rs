// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and logged-hours queries.

use diesel::SqliteConnection;
use diesel::dsl::sum;
use diesel::prelude::*;
use service_hours_domain::{Hours, Request, RequestStatus};
use tracing::debug;

use crate::data_models::{LoggedHoursData, RequestData};
use crate::diesel_schema::{logged_hours, requests, students};
use crate::error::PersistenceError;

/// Diesel Queryable struct for request rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = requests)]
struct RequestRow {
    request_id: i64,
    student_id: i64,
    hours: f64,
    status: String,
    created_at: String,
    processed_at: Option<String>,
}

impl RequestRow {
    fn into_request(self) -> Result<Request, PersistenceError> {
        let hours: Hours = Hours::new(self.hours).map_err(|e| {
            PersistenceError::ReconstructionError(format!(
                "request {}: {e}",
                self.request_id
            ))
        })?;
        let status: RequestStatus = parse_status(&self.status)?;

        Ok(Request {
            request_id: self.request_id,
            student_id: self.student_id,
            hours,
            status,
        })
    }

    fn into_data(self, student_name: String) -> RequestData {
        RequestData {
            request_id: self.request_id,
            student_id: self.student_id,
            student_name,
            hours: self.hours,
            status: self.status,
            created_at: self.created_at,
            processed_at: self.processed_at,
        }
    }
}

/// Diesel Queryable struct for logged-hours rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = logged_hours)]
struct LoggedHoursRow {
    logged_hours_id: i64,
    student_id: i64,
    staff_id: i64,
    hours: f64,
    status: String,
    created_at: String,
}

/// Parses a stored status column.
///
/// # Errors
///
/// Returns an error if the column holds an unknown status.
pub fn parse_status(value: &str) -> Result<RequestStatus, PersistenceError> {
    value
        .parse::<RequestStatus>()
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

/// Retrieves a request by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is malformed.
/// Returns `Ok(None)` if the request is not found.
pub fn get_request(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<Option<Request>, PersistenceError> {
    debug!("Looking up request by ID: {}", request_id);

    let row: Option<RequestRow> = requests::table
        .filter(requests::request_id.eq(request_id))
        .select(RequestRow::as_select())
        .first(conn)
        .optional()?;

    row.map(RequestRow::into_request).transpose()
}

/// Retrieves only the stored status of a request.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the request is not found.
pub fn get_request_status(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<Option<RequestStatus>, PersistenceError> {
    let status: Option<String> = requests::table
        .filter(requests::request_id.eq(request_id))
        .select(requests::status)
        .first(conn)
        .optional()?;

    status.as_deref().map(parse_status).transpose()
}

/// Lists a student's requests, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_requests_for_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<RequestData>, PersistenceError> {
    let rows: Vec<(RequestRow, String)> = requests::table
        .inner_join(students::table)
        .filter(requests::student_id.eq(student_id))
        .order((requests::created_at.desc(), requests::request_id.desc()))
        .select((RequestRow::as_select(), students::username))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(row, name)| row.into_data(name))
        .collect())
}

/// Lists every pending request, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_pending_requests(
    conn: &mut SqliteConnection,
) -> Result<Vec<RequestData>, PersistenceError> {
    let rows: Vec<(RequestRow, String)> = requests::table
        .inner_join(students::table)
        .filter(requests::status.eq(RequestStatus::Pending.as_str()))
        .order((requests::created_at.asc(), requests::request_id.asc()))
        .select((RequestRow::as_select(), students::username))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(row, name)| row.into_data(name))
        .collect())
}

/// Sums a student's approved logged hours.
///
/// A student with no logged hours has a total of zero.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn approved_hours(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<f64, PersistenceError> {
    let total: Option<f64> = logged_hours::table
        .filter(logged_hours::student_id.eq(student_id))
        .filter(logged_hours::status.eq(RequestStatus::Approved.as_str()))
        .select(sum(logged_hours::hours))
        .first(conn)?;

    Ok(total.unwrap_or(0.0))
}

/// Lists a student's approved logged-hours rows, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_logged_hours(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<LoggedHoursData>, PersistenceError> {
    let rows: Vec<LoggedHoursRow> = logged_hours::table
        .filter(logged_hours::student_id.eq(student_id))
        .filter(logged_hours::status.eq(RequestStatus::Approved.as_str()))
        .order((
            logged_hours::created_at.desc(),
            logged_hours::logged_hours_id.desc(),
        ))
        .select(LoggedHoursRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| LoggedHoursData {
            logged_hours_id: row.logged_hours_id,
            student_id: row.student_id,
            staff_id: row.staff_id,
            hours: row.hours,
            status: row.status,
            created_at: row.created_at,
        })
        .collect())
}
