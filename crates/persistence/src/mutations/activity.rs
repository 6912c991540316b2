// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity history appends.
//!
//! Rows are never updated or deleted once written.

use diesel::SqliteConnection;
use diesel::prelude::*;
use service_hours_audit::{ActivityEvent, ActivityRecord};
use tracing::debug;

use crate::connection::last_insert_rowid;
use crate::data_models::now_timestamp;
use crate::diesel_schema::activity_history;
use crate::error::PersistenceError;
use crate::queries::activity::get_activity;

/// Appends one activity entry and returns the stored record.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn append_activity(
    conn: &mut SqliteConnection,
    event: &ActivityEvent,
) -> Result<ActivityRecord, PersistenceError> {
    diesel::insert_into(activity_history::table)
        .values((
            activity_history::student_id.eq(event.student_id),
            activity_history::command_type.eq(&event.action.command_type),
            activity_history::description.eq(&event.action.description),
            activity_history::staff_id.eq(event.staff_id()),
            activity_history::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;

    let activity_id: i64 = last_insert_rowid(conn)?;
    debug!(
        activity_id,
        student_id = event.student_id,
        command_type = %event.action.command_type,
        "Appended activity"
    );

    get_activity(conn, activity_id)
}
