// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Service Hours Tracker.
//!
//! This crate stores students, staff, hours requests, logged hours, awards
//! and the activity history in `SQLite` through Diesel.
//!
//! ## Transactions
//!
//! Every command runs inside one transaction with a unit of work bound to
//! it, and commits only if the command succeeds. A rejected command leaves
//! no rows behind. [`Persistence::execute_and_record`] also writes the
//! command's activity history entry in that transaction, so a committed
//! command always has its entry.
//!
//! ## Migrations
//!
//! The schema and the seeded milestone ladder and accolades are embedded
//! `diesel_migrations` under `migrations/` and run on every connection.
//! Opening fails if the stored milestone ladder has drifted from
//! `MILESTONE_LADDER`.
//!
//! ## Testing
//!
//! - Tests use [`Persistence::new_in_memory`], which gives each instance
//!   its own shared-cache in-memory database
//! - File databases are opened with WAL enabled

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::{Connection, SqliteConnection};
use service_hours::{Command, ExecutedCommand};
use service_hours_audit::{ActivityEvent, ActivityRecord};
use service_hours_domain::{
    Accolade, AccoladeAward, Milestone, MilestoneAward, Request, Staff, Student,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod connection;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod unit_of_work;

#[cfg(test)]
mod tests;

pub use data_models::{ApprovedHoursTotal, LeaderboardEntry, LoggedHoursData, RequestData};
pub use error::PersistenceError;

use connection::Journal;
use unit_of_work::DieselUnitOfWork;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A committed command together with the history entry written with it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCommand {
    /// The committed execution.
    pub executed: ExecutedCommand,
    /// `None` when the execution is not one the history records.
    pub activity: Option<ActivityRecord>,
}

/// Persistence adapter owning a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = connection::open(&shared_memory_url, Journal::Rollback)?;
        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let conn: SqliteConnection = connection::open(path_str, Journal::WriteAhead)?;
        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        connection::require_foreign_keys(&mut self.conn)
    }

    // ========================================================================
    // Commands & Activity
    // ========================================================================

    /// Executes a command inside a single transaction.
    ///
    /// The transaction commits when the command succeeds and rolls back on
    /// any error, including a domain rejection. Nothing is written to the
    /// activity history.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CommandRejected` carrying the command's
    /// error, or a database error if the transaction itself fails.
    pub fn execute_command(
        &mut self,
        command: Command,
    ) -> Result<ExecutedCommand, PersistenceError> {
        Ok(self.commit(command, false)?.executed)
    }

    /// Executes a command and appends its history entry in one transaction.
    ///
    /// Executions that `ExecutedCommand::is_recorded` rejects commit without
    /// an entry. If the entry cannot be written the command is rolled back
    /// too.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CommandRejected` carrying the command's
    /// error, or a database error if the command or its entry fails to write.
    pub fn execute_and_record(
        &mut self,
        command: Command,
    ) -> Result<RecordedCommand, PersistenceError> {
        self.commit(command, true)
    }

    fn commit(
        &mut self,
        command: Command,
        record: bool,
    ) -> Result<RecordedCommand, PersistenceError> {
        let command_type: &'static str = command.name();

        let recorded: RecordedCommand = self
            .conn
            .transaction::<RecordedCommand, PersistenceError, _>(|conn| {
                let executed: ExecutedCommand =
                    command.execute(&mut DieselUnitOfWork::new(conn))?;
                let activity: Option<ActivityRecord> = if record && executed.is_recorded() {
                    Some(mutations::activity::append_activity(
                        conn,
                        &executed.to_activity_event(),
                    )?)
                } else {
                    None
                };
                Ok(RecordedCommand { executed, activity })
            })?;

        info!(
            command_type,
            student_id = recorded.executed.student_id,
            recorded = recorded.activity.is_some(),
            "Command committed"
        );
        Ok(recorded)
    }

    /// Appends an entry to the activity history.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn append_activity(
        &mut self,
        event: &ActivityEvent,
    ) -> Result<ActivityRecord, PersistenceError> {
        mutations::activity::append_activity(&mut self.conn, event)
    }

    /// Lists a student's activity history, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn history(&mut self, student_id: i64) -> Result<Vec<ActivityRecord>, PersistenceError> {
        queries::activity::history(&mut self.conn, student_id)
    }

    // ========================================================================
    // Registry
    // ========================================================================

    /// Registers a student.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::AlreadyExists` if the username is taken.
    pub fn create_student(&mut self, username: &str) -> Result<Student, PersistenceError> {
        mutations::registry::create_student(&mut self.conn, username)
    }

    /// Registers a staff member.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::AlreadyExists` if the username is taken.
    pub fn create_staff(&mut self, username: &str) -> Result<Staff, PersistenceError> {
        mutations::registry::create_staff(&mut self.conn, username)
    }

    /// Looks up a student by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_student(&mut self, student_id: i64) -> Result<Option<Student>, PersistenceError> {
        queries::registry::get_student(&mut self.conn, student_id)
    }

    /// Looks up a staff member by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_staff(&mut self, staff_id: i64) -> Result<Option<Staff>, PersistenceError> {
        queries::registry::get_staff(&mut self.conn, staff_id)
    }

    /// Lists all students.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_students(&mut self) -> Result<Vec<Student>, PersistenceError> {
        queries::registry::list_students(&mut self.conn)
    }

    /// Lists all staff members.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_staff(&mut self) -> Result<Vec<Staff>, PersistenceError> {
        queries::registry::list_staff(&mut self.conn)
    }

    // ========================================================================
    // Requests & Hours
    // ========================================================================

    /// Looks up a request by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed.
    pub fn get_request(&mut self, request_id: i64) -> Result<Option<Request>, PersistenceError> {
        queries::requests::get_request(&mut self.conn, request_id)
    }

    /// Lists a student's requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_requests(&mut self, student_id: i64) -> Result<Vec<RequestData>, PersistenceError> {
        queries::requests::list_requests_for_student(&mut self.conn, student_id)
    }

    /// Lists all pending requests, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_pending_requests(&mut self) -> Result<Vec<RequestData>, PersistenceError> {
        queries::requests::list_pending_requests(&mut self.conn)
    }

    /// Lists a student's approved logged-hours rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_logged_hours(
        &mut self,
        student_id: i64,
    ) -> Result<Vec<LoggedHoursData>, PersistenceError> {
        queries::requests::list_logged_hours(&mut self.conn, student_id)
    }

    /// Returns a student's name and approved-hours total.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn approved_hours(
        &mut self,
        student_id: i64,
    ) -> Result<Option<ApprovedHoursTotal>, PersistenceError> {
        queries::leaderboard::approved_hours_total(&mut self.conn, student_id)
    }

    /// Ranks all students by approved hours.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>, PersistenceError> {
        queries::leaderboard::leaderboard(&mut self.conn)
    }

    // ========================================================================
    // Milestones & Accolades
    // ========================================================================

    /// Lists the milestone ladder.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_milestones(&mut self) -> Result<Vec<Milestone>, PersistenceError> {
        queries::awards::list_milestones(&mut self.conn)
    }

    /// Lists all accolades.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_accolades(&mut self) -> Result<Vec<Accolade>, PersistenceError> {
        queries::awards::list_accolades(&mut self.conn)
    }

    /// Looks up an accolade by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_accolade(&mut self, accolade_id: i64) -> Result<Option<Accolade>, PersistenceError> {
        queries::awards::get_accolade(&mut self.conn, accolade_id)
    }

    /// Lists the milestones a student holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn milestone_awards(
        &mut self,
        student_id: i64,
    ) -> Result<Vec<MilestoneAward>, PersistenceError> {
        queries::awards::milestone_awards(&mut self.conn, student_id)
    }

    /// Lists the accolades a student holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn accolade_awards(
        &mut self,
        student_id: i64,
    ) -> Result<Vec<AccoladeAward>, PersistenceError> {
        queries::awards::accolade_awards(&mut self.conn, student_id)
    }
}
