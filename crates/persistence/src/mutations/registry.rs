// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student and staff registration.

use diesel::SqliteConnection;
use diesel::prelude::*;
use service_hours_domain::{Staff, Student};
use tracing::info;

use crate::connection::last_insert_rowid;
use crate::data_models::now_timestamp;
use crate::diesel_schema::{staff, students};
use crate::error::PersistenceError;

/// Registers a new student.
///
/// # Errors
///
/// Returns `PersistenceError::AlreadyExists` if the username is taken,
/// or another error if the insert fails.
pub fn create_student(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Student, PersistenceError> {
    diesel::insert_into(students::table)
        .values((
            students::username.eq(username),
            students::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;

    let student_id: i64 = last_insert_rowid(conn)?;
    info!(student_id, username, "Registered student");

    Ok(Student::new(student_id, username.to_string()))
}

/// Registers a new staff member.
///
/// # Errors
///
/// Returns `PersistenceError::AlreadyExists` if the username is taken,
/// or another error if the insert fails.
pub fn create_staff(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Staff, PersistenceError> {
    diesel::insert_into(staff::table)
        .values((
            staff::username.eq(username),
            staff::created_at.eq(now_timestamp()?),
        ))
        .execute(conn)?;

    let staff_id: i64 = last_insert_rowid(conn)?;
    info!(staff_id, username, "Registered staff member");

    Ok(Staff::new(staff_id, username.to_string()))
}
