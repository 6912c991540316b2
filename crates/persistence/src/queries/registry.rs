// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student and staff lookups.

use diesel::SqliteConnection;
use diesel::prelude::*;
use service_hours_domain::{Staff, Student};
use tracing::debug;

use crate::diesel_schema::{staff, students};
use crate::error::PersistenceError;

/// Retrieves a student by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the student is not found.
pub fn get_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Option<Student>, PersistenceError> {
    debug!("Looking up student by ID: {}", student_id);

    let row: Option<(i64, String)> = students::table
        .filter(students::student_id.eq(student_id))
        .select((students::student_id, students::username))
        .first(conn)
        .optional()?;

    Ok(row.map(|(id, username)| Student::new(id, username)))
}

/// Retrieves a staff member by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the staff member is not found.
pub fn get_staff(
    conn: &mut SqliteConnection,
    staff_id: i64,
) -> Result<Option<Staff>, PersistenceError> {
    debug!("Looking up staff member by ID: {}", staff_id);

    let row: Option<(i64, String)> = staff::table
        .filter(staff::staff_id.eq(staff_id))
        .select((staff::staff_id, staff::username))
        .first(conn)
        .optional()?;

    Ok(row.map(|(id, username)| Staff::new(id, username)))
}

/// Lists all students ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_students(conn: &mut SqliteConnection) -> Result<Vec<Student>, PersistenceError> {
    let rows: Vec<(i64, String)> = students::table
        .select((students::student_id, students::username))
        .order(students::student_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, username)| Student::new(id, username))
        .collect())
}

/// Lists all staff members ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_staff(conn: &mut SqliteConnection) -> Result<Vec<Staff>, PersistenceError> {
    let rows: Vec<(i64, String)> = staff::table
        .select((staff::staff_id, staff::username))
        .order(staff::staff_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, username)| Staff::new(id, username))
        .collect())
}
