// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Milestone, accolade and award-table queries.
//!
//! The award tables are the only record of what a student holds.

use diesel::SqliteConnection;
use diesel::prelude::*;
use service_hours_domain::{Accolade, AccoladeAward, Milestone, MilestoneAward};
use tracing::debug;

use crate::diesel_schema::{accolades, milestones, student_accolades, student_milestones};
use crate::error::PersistenceError;

/// Diesel Queryable struct for milestone rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = milestones)]
struct MilestoneRow {
    milestone_id: i64,
    name: String,
    required_hours: f64,
    description: Option<String>,
}

impl From<MilestoneRow> for Milestone {
    fn from(row: MilestoneRow) -> Self {
        Self {
            milestone_id: row.milestone_id,
            name: row.name,
            required_hours: row.required_hours,
            description: row.description,
        }
    }
}

/// Diesel Queryable struct for accolade rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = accolades)]
struct AccoladeRow {
    accolade_id: i64,
    name: String,
    description: Option<String>,
}

impl From<AccoladeRow> for Accolade {
    fn from(row: AccoladeRow) -> Self {
        Self {
            accolade_id: row.accolade_id,
            name: row.name,
            description: row.description,
        }
    }
}

/// Lists the milestone ladder in ascending threshold order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_milestones(conn: &mut SqliteConnection) -> Result<Vec<Milestone>, PersistenceError> {
    let rows: Vec<MilestoneRow> = milestones::table
        .order((milestones::required_hours.asc(), milestones::milestone_id.asc()))
        .select(MilestoneRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Milestone::from).collect())
}

/// Lists all accolades ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_accolades(conn: &mut SqliteConnection) -> Result<Vec<Accolade>, PersistenceError> {
    let rows: Vec<AccoladeRow> = accolades::table
        .order(accolades::accolade_id.asc())
        .select(AccoladeRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Accolade::from).collect())
}

/// Retrieves an accolade by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the accolade is not found.
pub fn get_accolade(
    conn: &mut SqliteConnection,
    accolade_id: i64,
) -> Result<Option<Accolade>, PersistenceError> {
    debug!("Looking up accolade by ID: {}", accolade_id);

    let row: Option<AccoladeRow> = accolades::table
        .filter(accolades::accolade_id.eq(accolade_id))
        .select(AccoladeRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Accolade::from))
}

/// Lists the milestone IDs a student already holds.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn awarded_milestone_ids(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    Ok(student_milestones::table
        .filter(student_milestones::student_id.eq(student_id))
        .select(student_milestones::milestone_id)
        .load(conn)?)
}

/// Returns whether a student already holds a milestone.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn has_milestone(
    conn: &mut SqliteConnection,
    student_id: i64,
    milestone_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = student_milestones::table
        .filter(student_milestones::student_id.eq(student_id))
        .filter(student_milestones::milestone_id.eq(milestone_id))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}

/// Returns whether a student already holds an accolade.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn has_accolade(
    conn: &mut SqliteConnection,
    student_id: i64,
    accolade_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = student_accolades::table
        .filter(student_accolades::student_id.eq(student_id))
        .filter(student_accolades::accolade_id.eq(accolade_id))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}

/// Lists a student's milestone awards in award order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn milestone_awards(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<MilestoneAward>, PersistenceError> {
    let rows: Vec<(i64, i64, String, Option<i64>, Option<String>, String)> =
        student_milestones::table
            .inner_join(milestones::table)
            .filter(student_milestones::student_id.eq(student_id))
            .order(student_milestones::id.asc())
            .select((
                student_milestones::student_id,
                student_milestones::milestone_id,
                milestones::name,
                student_milestones::awarded_by,
                student_milestones::description,
                student_milestones::awarded_at,
            ))
            .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(student_id, milestone_id, milestone_name, awarded_by, description, awarded_at)| {
                MilestoneAward {
                    student_id,
                    milestone_id,
                    milestone_name,
                    awarded_by,
                    description,
                    awarded_at,
                }
            },
        )
        .collect())
}

/// Lists a student's accolade awards in award order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn accolade_awards(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<AccoladeAward>, PersistenceError> {
    let rows: Vec<(i64, i64, String, Option<i64>, Option<String>, String)> =
        student_accolades::table
            .inner_join(accolades::table)
            .filter(student_accolades::student_id.eq(student_id))
            .order(student_accolades::id.asc())
            .select((
                student_accolades::student_id,
                student_accolades::accolade_id,
                accolades::name,
                student_accolades::awarded_by,
                student_accolades::description,
                student_accolades::awarded_at,
            ))
            .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(student_id, accolade_id, accolade_name, awarded_by, description, awarded_at)| {
                AccoladeAward {
                    student_id,
                    accolade_id,
                    accolade_name,
                    awarded_by,
                    description,
                    awarded_at,
                }
            },
        )
        .collect())
}
