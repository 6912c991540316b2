// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The append-only activity log and the achievement views read alongside it.

use service_hours::ExecutedCommand;
use service_hours_audit::ActivityRecord;
use service_hours_domain::{AccoladeAward, MilestoneAward, Student};
use service_hours_persistence::{LoggedHoursData, Persistence};
use tracing::debug;

use crate::error::ApiError;
use crate::request_response::{
    AccoladesAwardedResponse, AwardInfo, HistoryEntryInfo, HistoryResponse, LoggedHoursInfo,
    SummaryResponse,
};

/// Records executed commands and answers history questions about a student.
pub struct ActivityLog<'a> {
    persistence: &'a mut Persistence,
}

impl<'a> ActivityLog<'a> {
    #[must_use]
    pub const fn new(persistence: &'a mut Persistence) -> Self {
        Self { persistence }
    }

    /// Appends one entry describing an executed command.
    ///
    /// The entry carries the command's type tag and description, the
    /// student it concerns, and the staff member when staff acted.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be stored.
    pub fn append(&mut self, executed: &ExecutedCommand) -> Result<ActivityRecord, ApiError> {
        let record: ActivityRecord = self
            .persistence
            .append_activity(&executed.to_activity_event())?;
        debug!(
            activity_id = record.activity_id,
            command_type = executed.command_type,
            "Activity recorded"
        );
        Ok(record)
    }

    /// Returns a student's history, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` for an unknown student.
    pub fn history(&mut self, student_id: i64) -> Result<HistoryResponse, ApiError> {
        self.require_student(student_id)?;

        let entries: Vec<HistoryEntryInfo> = self
            .persistence
            .history(student_id)?
            .into_iter()
            .map(|record| HistoryEntryInfo {
                activity_id: record.activity_id,
                command_type: record.command_type,
                description: record.description,
                staff_id: record.staff_id,
                timestamp: record.timestamp,
            })
            .collect();

        Ok(HistoryResponse {
            student_id,
            entries,
        })
    }

    /// Returns the names of every milestone and accolade the student holds.
    ///
    /// Milestones come first, each group in award order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` for an unknown student.
    pub fn accolades_awarded(
        &mut self,
        student_id: i64,
    ) -> Result<AccoladesAwardedResponse, ApiError> {
        self.require_student(student_id)?;

        let milestones: Vec<MilestoneAward> = self.persistence.milestone_awards(student_id)?;
        let accolades: Vec<AccoladeAward> = self.persistence.accolade_awards(student_id)?;

        Ok(AccoladesAwardedResponse {
            student_id,
            accolades: milestones
                .into_iter()
                .map(|m| m.milestone_name)
                .chain(accolades.into_iter().map(|a| a.accolade_name))
                .collect(),
        })
    }

    /// Returns award details and approved hours for a student.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` for an unknown student.
    pub fn summary(&mut self, student_id: i64) -> Result<SummaryResponse, ApiError> {
        self.require_student(student_id)?;

        let accolades: Vec<AwardInfo> = self
            .persistence
            .accolade_awards(student_id)?
            .into_iter()
            .map(|a| AwardInfo {
                name: a.accolade_name,
                awarded_by: a.awarded_by,
                description: a.description,
                awarded_at: a.awarded_at,
            })
            .collect();
        let milestones: Vec<AwardInfo> = self
            .persistence
            .milestone_awards(student_id)?
            .into_iter()
            .map(|m| AwardInfo {
                name: m.milestone_name,
                awarded_by: m.awarded_by,
                description: m.description,
                awarded_at: m.awarded_at,
            })
            .collect();
        let logged: Vec<LoggedHoursData> = self.persistence.list_logged_hours(student_id)?;
        let total_hours: f64 = logged.iter().map(|row| row.hours).sum();

        Ok(SummaryResponse {
            student_id,
            accolades,
            milestones,
            logged_hours: logged
                .into_iter()
                .map(|row| LoggedHoursInfo {
                    logged_hours_id: row.logged_hours_id,
                    staff_id: row.staff_id,
                    hours: row.hours,
                    logged_at: row.created_at,
                })
                .collect(),
            total_hours,
        })
    }

    fn require_student(&mut self, student_id: i64) -> Result<Student, ApiError> {
        self.persistence
            .get_student(student_id)?
            .ok_or_else(|| ApiError::student_not_found(student_id))
    }
}
