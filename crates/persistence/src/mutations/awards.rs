// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Award-table inserts.
//!
//! Each insert checks for an existing row first and then relies on the
//! `UNIQUE (student_id, ...)` index; either path reports "already held" as
//! `Ok(false)`.

use diesel::SqliteConnection;
use diesel::prelude::*;
use service_hours::NewAward;
use tracing::{debug, warn};

use crate::data_models::now_timestamp;
use crate::diesel_schema::{student_accolades, student_milestones};
use crate::error::PersistenceError;
use crate::queries::awards::{has_accolade, has_milestone};

/// Maps a unique-constraint failure to `Ok(false)`.
fn inserted_or_duplicate(
    result: Result<usize, diesel::result::Error>,
    award: &NewAward,
    table: &str,
) -> Result<bool, PersistenceError> {
    match result {
        Ok(_) => Ok(true),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => {
            warn!(
                student_id = award.student_id,
                target_id = award.target_id,
                table,
                "Duplicate award skipped"
            );
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Inserts a milestone award unless the student already holds it.
///
/// # Errors
///
/// Returns an error if the database fails for any reason other than a
/// duplicate award.
pub fn insert_milestone_award(
    conn: &mut SqliteConnection,
    award: &NewAward,
) -> Result<bool, PersistenceError> {
    if has_milestone(conn, award.student_id, award.target_id)? {
        debug!(
            student_id = award.student_id,
            milestone_id = award.target_id,
            "Milestone already held"
        );
        return Ok(false);
    }

    let result = diesel::insert_into(student_milestones::table)
        .values((
            student_milestones::student_id.eq(award.student_id),
            student_milestones::milestone_id.eq(award.target_id),
            student_milestones::awarded_by.eq(award.awarded_by),
            student_milestones::description.eq(award.description.as_deref()),
            student_milestones::awarded_at.eq(now_timestamp()?),
        ))
        .execute(conn);

    inserted_or_duplicate(result, award, "student_milestones")
}

/// Inserts an accolade award unless the student already holds it.
///
/// # Errors
///
/// Returns an error if the database fails for any reason other than a
/// duplicate award.
pub fn insert_accolade_award(
    conn: &mut SqliteConnection,
    award: &NewAward,
) -> Result<bool, PersistenceError> {
    if has_accolade(conn, award.student_id, award.target_id)? {
        debug!(
            student_id = award.student_id,
            accolade_id = award.target_id,
            "Accolade already held"
        );
        return Ok(false);
    }

    let result = diesel::insert_into(student_accolades::table)
        .values((
            student_accolades::student_id.eq(award.student_id),
            student_accolades::accolade_id.eq(award.target_id),
            student_accolades::awarded_by.eq(award.awarded_by),
            student_accolades::description.eq(award.description.as_deref()),
            student_accolades::awarded_at.eq(now_timestamp()?),
        ))
        .execute(conn);

    inserted_or_duplicate(result, award, "student_accolades")
}
