// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity history queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use service_hours_audit::ActivityRecord;
use tracing::debug;

use crate::diesel_schema::activity_history;
use crate::error::PersistenceError;

/// Diesel Queryable struct for activity history rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = activity_history)]
struct ActivityRow {
    activity_id: i64,
    student_id: i64,
    command_type: String,
    description: String,
    staff_id: Option<i64>,
    created_at: String,
}

impl From<ActivityRow> for ActivityRecord {
    fn from(row: ActivityRow) -> Self {
        Self {
            activity_id: row.activity_id,
            student_id: row.student_id,
            command_type: row.command_type,
            description: row.description,
            staff_id: row.staff_id,
            timestamp: row.created_at,
        }
    }
}

/// Retrieves a single activity record by ID.
///
/// # Errors
///
/// Returns an error if the record is not found or the query fails.
pub fn get_activity(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> Result<ActivityRecord, PersistenceError> {
    let row: ActivityRow = activity_history::table
        .filter(activity_history::activity_id.eq(activity_id))
        .select(ActivityRow::as_select())
        .first(conn)?;

    Ok(row.into())
}

/// Lists a student's activity, newest first.
///
/// Entries sharing a timestamp are ordered by descending ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn history(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<ActivityRecord>, PersistenceError> {
    debug!("Loading activity history for student {}", student_id);

    let rows: Vec<ActivityRow> = activity_history::table
        .filter(activity_history::student_id.eq(student_id))
        .order((
            activity_history::created_at.desc(),
            activity_history::activity_id.desc(),
        ))
        .select(ActivityRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ActivityRecord::from).collect())
}
