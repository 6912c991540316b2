// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invokers for student and staff actions.
//!
//! An invoker looks up the entities a command needs, builds the command,
//! and hands it to persistence, which executes it and writes its activity
//! log entry in one transaction. Invokers never mutate entities themselves.
//!
//! Achievement evaluation follows every change to a student's approved
//! hours (and every submission). It is recorded in the log only when it
//! awarded something.

use service_hours::{Command, CommandOutcome, ExecutedCommand};
use service_hours_domain::{Accolade, DomainError, Hours, Request, Staff, Student, validate_hours};
use service_hours_persistence::{Persistence, PersistenceError, RecordedCommand};
use tracing::{info, warn};

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AwardAccoladeResponse, EvaluateResponse, ProcessRequestResponse, SubmitHoursResponse,
};

/// Executes a command and writes its history entry in the same transaction.
fn execute_and_record(
    persistence: &mut Persistence,
    command: Command,
) -> Result<ExecutedCommand, ApiError> {
    let recorded: RecordedCommand = persistence.execute_and_record(command)?;
    Ok(logged(recorded))
}

fn logged(recorded: RecordedCommand) -> ExecutedCommand {
    let executed: ExecutedCommand = recorded.executed;
    if let Some(activity) = recorded.activity {
        info!(
            activity_id = activity.activity_id,
            command_type = executed.command_type,
            student_id = executed.student_id,
            "{}",
            executed.describe()
        );
    }
    executed
}

/// What an evaluation run produced.
struct Evaluation {
    approved_hours: f64,
    newly_awarded: Vec<String>,
    message: String,
}

/// Runs achievement evaluation for a student.
fn run_evaluation(
    persistence: &mut Persistence,
    student: Student,
    awarded_by: Option<Staff>,
) -> Result<Evaluation, ApiError> {
    let executed: ExecutedCommand = execute_and_record(
        persistence,
        Command::EvaluateAchievements {
            student,
            awarded_by,
        },
    )?;

    let message: String = executed.describe().to_string();
    match executed.outcome {
        CommandOutcome::AchievementsEvaluated {
            approved_hours,
            newly_awarded,
        } => Ok(Evaluation {
            approved_hours,
            newly_awarded,
            message,
        }),
        other => Err(ApiError::Internal {
            message: format!("Unexpected evaluation outcome: {other:?}"),
        }),
    }
}

fn load_student(persistence: &mut Persistence, student_id: i64) -> Result<Student, ApiError> {
    persistence
        .get_student(student_id)?
        .ok_or_else(|| ApiError::student_not_found(student_id))
}

fn load_staff(persistence: &mut Persistence, staff_id: i64) -> Result<Staff, ApiError> {
    persistence
        .get_staff(staff_id)?
        .ok_or_else(|| ApiError::staff_not_found(staff_id))
}

fn load_request(persistence: &mut Persistence, request_id: i64) -> Result<Request, ApiError> {
    persistence
        .get_request(request_id)?
        .ok_or_else(|| translate_domain_error(DomainError::RequestNotFound(request_id)))
}

fn load_accolade(persistence: &mut Persistence, accolade_id: i64) -> Result<Accolade, ApiError> {
    persistence
        .get_accolade(accolade_id)?
        .ok_or_else(|| translate_domain_error(DomainError::AccoladeNotFound(accolade_id)))
}

/// Executes an approval or denial and records it.
///
/// Returns `Ok(None)` when the request was no longer pending; nothing is
/// recorded in that case.
fn process_request(
    persistence: &mut Persistence,
    command: Command,
    request_id: i64,
) -> Result<Option<ExecutedCommand>, ApiError> {
    match persistence.execute_and_record(command) {
        Ok(recorded) => Ok(Some(logged(recorded))),
        Err(PersistenceError::CommandRejected(err)) if err.is_invalid_state() => {
            warn!(request_id, "Request could not be processed: {}", err);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn not_processed(request_id: i64) -> ProcessRequestResponse {
    ProcessRequestResponse {
        success: false,
        message: format!("Request {request_id} could not be processed: it is no longer pending"),
        newly_awarded: Vec::new(),
    }
}

/// Actions a student takes on their own behalf.
pub struct StudentService<'a> {
    persistence: &'a mut Persistence,
}

impl<'a> StudentService<'a> {
    #[must_use]
    pub const fn new(persistence: &'a mut Persistence) -> Self {
        Self { persistence }
    }

    /// Submits hours for staff confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `hours` is not a positive number
    /// - The student does not exist
    /// - The store fails
    pub fn submit_request(
        &mut self,
        student_id: i64,
        hours: f64,
    ) -> Result<SubmitHoursResponse, ApiError> {
        let hours: Hours = validate_hours(hours).map_err(translate_domain_error)?;
        let student: Student = load_student(self.persistence, student_id)?;

        let executed: ExecutedCommand = execute_and_record(
            self.persistence,
            Command::SubmitHoursRequest {
                student: student.clone(),
                hours,
            },
        )?;
        let message: String = executed.describe().to_string();
        let request: Request = match executed.outcome {
            CommandOutcome::RequestSubmitted(request) => request,
            other => {
                return Err(ApiError::Internal {
                    message: format!("Unexpected submission outcome: {other:?}"),
                });
            }
        };

        let evaluation: Evaluation = run_evaluation(self.persistence, student, None)?;

        Ok(SubmitHoursResponse {
            request_id: request.request_id,
            student_id: request.student_id,
            hours: request.hours.value(),
            status: request.status.to_string(),
            newly_awarded: evaluation.newly_awarded,
            message,
        })
    }

    /// Evaluates a student's achievements on demand.
    ///
    /// # Errors
    ///
    /// Returns an error if the student does not exist or the store fails.
    pub fn evaluate(&mut self, student_id: i64) -> Result<EvaluateResponse, ApiError> {
        let student: Student = load_student(self.persistence, student_id)?;
        let evaluation: Evaluation = run_evaluation(self.persistence, student, None)?;

        Ok(EvaluateResponse {
            student_id,
            approved_hours: evaluation.approved_hours,
            newly_awarded: evaluation.newly_awarded,
            message: evaluation.message,
        })
    }
}

/// Actions staff take on students' requests and awards.
pub struct StaffService<'a> {
    persistence: &'a mut Persistence,
}

impl<'a> StaffService<'a> {
    #[must_use]
    pub const fn new(persistence: &'a mut Persistence) -> Self {
        Self { persistence }
    }

    /// Approves a pending request, logging its hours.
    ///
    /// Evaluation runs afterwards, credited to the approving staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member or request does not exist or
    /// the store fails. A request that is no longer pending is reported as
    /// `success = false`.
    pub fn approve(
        &mut self,
        staff_id: i64,
        request_id: i64,
    ) -> Result<ProcessRequestResponse, ApiError> {
        let staff: Staff = load_staff(self.persistence, staff_id)?;
        let request: Request = load_request(self.persistence, request_id)?;
        let student: Student = load_student(self.persistence, request.student_id)?;

        let command: Command = Command::ApproveRequest {
            request,
            staff: staff.clone(),
        };
        let Some(executed) = process_request(self.persistence, command, request_id)? else {
            return Ok(not_processed(request_id));
        };

        let evaluation: Evaluation = run_evaluation(self.persistence, student, Some(staff))?;

        Ok(ProcessRequestResponse {
            success: true,
            message: executed.describe().to_string(),
            newly_awarded: evaluation.newly_awarded,
        })
    }

    /// Denies a pending request.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member or request does not exist or
    /// the store fails. A request that is no longer pending is reported as
    /// `success = false`.
    pub fn deny(
        &mut self,
        staff_id: i64,
        request_id: i64,
    ) -> Result<ProcessRequestResponse, ApiError> {
        let staff: Staff = load_staff(self.persistence, staff_id)?;
        let request: Request = load_request(self.persistence, request_id)?;

        let command: Command = Command::DenyRequest { request, staff };
        let Some(executed) = process_request(self.persistence, command, request_id)? else {
            return Ok(not_processed(request_id));
        };

        Ok(ProcessRequestResponse {
            success: true,
            message: executed.describe().to_string(),
            newly_awarded: Vec::new(),
        })
    }

    /// Awards an accolade to a student.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The staff member, student or accolade does not exist
    /// - The student already holds the accolade
    /// - The store fails
    pub fn award_accolade(
        &mut self,
        staff_id: i64,
        student_id: i64,
        accolade_id: i64,
        note: Option<String>,
    ) -> Result<AwardAccoladeResponse, ApiError> {
        let staff: Staff = load_staff(self.persistence, staff_id)?;
        let student: Student = load_student(self.persistence, student_id)?;
        let accolade: Accolade = load_accolade(self.persistence, accolade_id)?;
        let accolade_name: String = accolade.name.clone();

        let executed: ExecutedCommand = execute_and_record(
            self.persistence,
            Command::AwardAccolade {
                student,
                accolade,
                staff,
                note,
            },
        )?;

        Ok(AwardAccoladeResponse {
            student_id,
            accolade: accolade_name,
            message: executed.describe().to_string(),
        })
    }
}
