// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Approved-hours totals and the leaderboard.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::dsl::sum;
use diesel::prelude::*;
use service_hours_domain::RequestStatus;

use crate::data_models::{ApprovedHoursTotal, LeaderboardEntry};
use crate::diesel_schema::{logged_hours, students};
use crate::error::PersistenceError;
use crate::queries::registry::get_student;
use crate::queries::requests::approved_hours;

/// Returns a student's name together with their approved total.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the student is not found.
pub fn approved_hours_total(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Option<ApprovedHoursTotal>, PersistenceError> {
    let Some(student) = get_student(conn, student_id)? else {
        return Ok(None);
    };
    let total: f64 = approved_hours(conn, student_id)?;

    Ok(Some(ApprovedHoursTotal {
        student_id: student.student_id,
        name: student.username,
        total,
    }))
}

/// Ranks every student by approved hours.
///
/// Students without logged hours appear with a total of zero. Ties are
/// broken by name, then by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn leaderboard(conn: &mut SqliteConnection) -> Result<Vec<LeaderboardEntry>, PersistenceError> {
    let totals: HashMap<i64, f64> = logged_hours::table
        .filter(logged_hours::status.eq(RequestStatus::Approved.as_str()))
        .group_by(logged_hours::student_id)
        .select((logged_hours::student_id, sum(logged_hours::hours)))
        .load::<(i64, Option<f64>)>(conn)?
        .into_iter()
        .map(|(student_id, total)| (student_id, total.unwrap_or(0.0)))
        .collect();

    let mut entries: Vec<LeaderboardEntry> = students::table
        .select((students::student_id, students::username))
        .load::<(i64, String)>(conn)?
        .into_iter()
        .map(|(student_id, name)| LeaderboardEntry {
            student_id,
            hours: totals.get(&student_id).copied().unwrap_or(0.0),
            name,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.hours
            .total_cmp(&a.hours)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.student_id.cmp(&b.student_id))
    });

    Ok(entries)
}
