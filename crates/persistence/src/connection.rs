// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening a tracker database.
//!
//! A connection is handed out only once foreign keys are enforced, the
//! embedded migrations have run, and the milestone rows in the store agree
//! with `MILESTONE_LADDER`. Evaluation reads thresholds from the store, so a
//! drifted ladder would award the wrong milestones silently.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use service_hours_domain::{MILESTONE_LADDER, Milestone};
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::queries::awards::list_milestones;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Journal mode for a tracker database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Journal {
    /// The default rollback journal. In-memory databases use this.
    Rollback,
    /// Write-ahead logging, for file databases the server reads while writing.
    WriteAhead,
}

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Opens `url`, migrates it and checks the seeded ladder.
///
/// # Errors
///
/// Returns an error if the connection cannot be established, a PRAGMA or
/// migration fails, foreign keys are not enforced, or the milestone rows
/// do not match `MILESTONE_LADDER`.
pub fn open(url: &str, journal: Journal) -> Result<SqliteConnection, PersistenceError> {
    let mut conn: SqliteConnection = SqliteConnection::establish(url)?;

    // Diesel has no PRAGMA DSL.
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut conn)?;
    if journal == Journal::WriteAhead {
        diesel::sql_query("PRAGMA journal_mode = WAL").execute(&mut conn)?;
    }

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();

    require_foreign_keys(&mut conn)?;
    check_milestone_ladder(&mut conn)?;

    info!(url, ?journal, applied, "Tracker database ready");
    Ok(conn)
}

/// Fails unless the connection enforces foreign keys.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyEnforcementNotEnabled` when the
/// PRAGMA reports enforcement is off.
pub fn require_foreign_keys(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let pragma: ForeignKeysPragma = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;

    if pragma.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }
    Ok(())
}

/// Compares the stored milestones with `MILESTONE_LADDER`, rung by rung.
///
/// # Errors
///
/// Returns `PersistenceError::InitializationError` naming the first rung
/// that differs.
pub fn check_milestone_ladder(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let stored: Vec<Milestone> = list_milestones(conn)?;

    if stored.len() != MILESTONE_LADDER.len() {
        return Err(PersistenceError::InitializationError(format!(
            "Expected {} milestones, found {}",
            MILESTONE_LADDER.len(),
            stored.len()
        )));
    }

    for (milestone, (name, required_hours, _)) in stored.iter().zip(MILESTONE_LADDER) {
        let same_threshold: bool =
            (milestone.required_hours - required_hours).abs() <= f64::EPSILON;
        if milestone.name != name || !same_threshold {
            return Err(PersistenceError::InitializationError(format!(
                "Milestone '{}' at {} hours does not match '{name}' at {required_hours} hours",
                milestone.name, milestone.required_hours
            )));
        }
    }

    debug!(rungs = stored.len(), "Milestone ladder matches");
    Ok(())
}

/// Returns the rowid of the last insert on this connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}
