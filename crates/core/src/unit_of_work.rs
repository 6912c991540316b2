// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use service_hours_domain::{Hours, LoggedHours, Milestone, Request, RequestStatus};

/// Result of a guarded request status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    /// The request was pending and now holds the requested status.
    Applied,
    /// The request was no longer pending; it holds the contained status.
    Rejected(RequestStatus),
}

/// An award row to insert into a milestone or accolade award table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAward {
    /// The student receiving the award.
    pub student_id: i64,
    /// The milestone or accolade identifier.
    pub target_id: i64,
    /// The staff member credited with the award, if any.
    pub awarded_by: Option<i64>,
    /// Free-form description stored with the award.
    pub description: Option<String>,
}

/// The store operations a command may perform.
///
/// An implementation represents one open transaction. The caller commits
/// it exactly once when `Command::execute` succeeds and rolls it back on
/// any error, so a failed command leaves no trace.
pub trait UnitOfWork {
    /// Inserts a new pending request.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn create_request(&mut self, student_id: i64, hours: Hours) -> Result<Request, CoreError>;

    /// Moves a request out of `Pending`.
    ///
    /// The transition only applies while the stored status is still
    /// `Pending`; otherwise the current status is reported back.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the request does not exist.
    fn transition_request(
        &mut self,
        request_id: i64,
        to: RequestStatus,
    ) -> Result<StatusTransition, CoreError>;

    /// Records approved hours for a student.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn record_logged_hours(
        &mut self,
        student_id: i64,
        staff_id: i64,
        hours: Hours,
    ) -> Result<LoggedHours, CoreError>;

    /// Sums the student's approved logged hours.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn approved_hours(&mut self, student_id: i64) -> Result<f64, CoreError>;

    /// Loads the milestone ladder.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn milestones(&mut self) -> Result<Vec<Milestone>, CoreError>;

    /// Lists the milestone ids the student already holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn awarded_milestone_ids(&mut self, student_id: i64) -> Result<Vec<i64>, CoreError>;

    /// Inserts a milestone award.
    ///
    /// Returns `false` without inserting when the student already holds
    /// the milestone.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn award_milestone(&mut self, award: &NewAward) -> Result<bool, CoreError>;

    /// Inserts an accolade award.
    ///
    /// Returns `false` without inserting when the student already holds
    /// the accolade.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn award_accolade(&mut self, award: &NewAward) -> Result<bool, CoreError>;
}
