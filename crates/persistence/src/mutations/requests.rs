// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and logged-hours mutations.
//!
//! A request leaves `pending` through a single guarded `UPDATE`. The
//! `status = 'pending'` filter is the only concurrency control: when it
//! matches no row, the caller reads back the status that won.

use diesel::SqliteConnection;
use diesel::prelude::*;
use service_hours::StatusTransition;
use service_hours_domain::{Hours, LoggedHours, Request, RequestStatus};
use tracing::{debug, warn};

use crate::connection::last_insert_rowid;
use crate::data_models::now_timestamp;
use crate::diesel_schema::{logged_hours, requests};
use crate::error::PersistenceError;
use crate::queries::requests::get_request_status;

/// Inserts a pending request for a student.
///
/// # Errors
///
/// Returns an error if the insert fails (for example, an unknown student).
pub fn insert_request(
    conn: &mut SqliteConnection,
    student_id: i64,
    hours: Hours,
) -> Result<Request, PersistenceError> {
    diesel::insert_into(requests::table)
        .values((
            requests::student_id.eq(student_id),
            requests::hours.eq(hours.value()),
            requests::status.eq(RequestStatus::Pending.as_str()),
            requests::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;

    let request_id: i64 = last_insert_rowid(conn)?;
    debug!(request_id, student_id, hours = hours.value(), "Inserted request");

    Ok(Request {
        request_id,
        student_id,
        hours,
        status: RequestStatus::Pending,
    })
}

/// Moves a pending request to `to`.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the request does not exist,
/// or another error if the update fails.
pub fn transition_request(
    conn: &mut SqliteConnection,
    request_id: i64,
    to: RequestStatus,
) -> Result<StatusTransition, PersistenceError> {
    let updated: usize = diesel::update(requests::table)
        .filter(requests::request_id.eq(request_id))
        .filter(requests::status.eq(RequestStatus::Pending.as_str()))
        .set((
            requests::status.eq(to.as_str()),
            requests::processed_at.eq(Some(now_timestamp()?)),
        ))
        .execute(conn)?;

    if updated == 1 {
        debug!(request_id, status = to.as_str(), "Request transitioned");
        return Ok(StatusTransition::Applied);
    }

    match get_request_status(conn, request_id)? {
        Some(current) => {
            warn!(
                request_id,
                current = current.as_str(),
                "Request is no longer pending"
            );
            Ok(StatusTransition::Rejected(current))
        }
        None => Err(PersistenceError::NotFound(format!(
            "Request {request_id} not found"
        ))),
    }
}

/// Records approved hours for a student.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_logged_hours(
    conn: &mut SqliteConnection,
    student_id: i64,
    staff_id: i64,
    hours: Hours,
) -> Result<LoggedHours, PersistenceError> {
    diesel::insert_into(logged_hours::table)
        .values((
            logged_hours::student_id.eq(student_id),
            logged_hours::staff_id.eq(staff_id),
            logged_hours::hours.eq(hours.value()),
            logged_hours::status.eq(RequestStatus::Approved.as_str()),
            logged_hours::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;

    let logged_hours_id: i64 = last_insert_rowid(conn)?;
    debug!(logged_hours_id, student_id, staff_id, "Inserted logged hours");

    Ok(LoggedHours {
        logged_hours_id,
        student_id,
        staff_id,
        hours,
        status: RequestStatus::Approved,
    })
}
