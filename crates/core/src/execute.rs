// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::achievements::evaluate_achievements;
use crate::command::Command;
use crate::error::CoreError;
use crate::outcome::{CommandOutcome, ExecutedCommand};
use crate::unit_of_work::{NewAward, StatusTransition, UnitOfWork};
use service_hours_audit::Actor;
use service_hours_domain::{
    DomainError, LoggedHours, Request, RequestStatus, validate_request_pending,
};

/// Executes a command against an open unit of work, producing its outcome
/// and description.
///
/// # Arguments
///
/// * `command` - The command to execute (consumed)
/// * `uow` - The open unit of work
///
/// # Returns
///
/// * `Ok(ExecutedCommand)` containing the outcome and description
/// * `Err(CoreError)` if a precondition fails or the store fails
///
/// # Errors
///
/// Returns an error if:
/// - An approve/deny targets a request that is no longer pending
/// - An accolade is already held by the student
/// - The store fails
pub fn execute<U: UnitOfWork + ?Sized>(
    command: Command,
    uow: &mut U,
) -> Result<ExecutedCommand, CoreError> {
    let command_type: &'static str = command.name();
    let student_id: i64 = command.student_id();
    let actor: Actor = command.actor();

    let (outcome, description): (CommandOutcome, String) = match command {
        Command::SubmitHoursRequest { student, hours } => {
            let request: Request = uow.create_request(student.student_id, hours)?;

            let description: String = format!(
                "{} requested confirmation for {hours} hours.",
                student.username
            );
            (CommandOutcome::RequestSubmitted(request), description)
        }
        Command::ApproveRequest { request, staff } => {
            validate_request_pending(&request)?;
            apply_transition(uow, &request, RequestStatus::Approved)?;

            let logged_hours: LoggedHours =
                uow.record_logged_hours(request.student_id, staff.staff_id, request.hours)?;

            let description: String = format!(
                "{} logged {} hours for Student {}.",
                staff.username, request.hours, request.student_id
            );
            let request: Request = Request {
                status: RequestStatus::Approved,
                ..request
            };
            (
                CommandOutcome::RequestApproved {
                    request,
                    logged_hours,
                },
                description,
            )
        }
        Command::DenyRequest { request, staff } => {
            validate_request_pending(&request)?;
            apply_transition(uow, &request, RequestStatus::Denied)?;

            let description: String = format!(
                "{} denied request {} for {} hours.",
                staff.username, request.request_id, request.hours
            );
            let request: Request = Request {
                status: RequestStatus::Denied,
                ..request
            };
            (CommandOutcome::RequestDenied(request), description)
        }
        Command::EvaluateAchievements {
            student,
            awarded_by,
        } => {
            let (approved_hours, newly_awarded): (f64, Vec<String>) =
                evaluate_achievements(uow, &student, awarded_by.as_ref())?;

            let description: String = if newly_awarded.is_empty() {
                format!("No new milestones for {}.", student.username)
            } else {
                format!("{} achieved: {}", student.username, newly_awarded.join(", "))
            };
            (
                CommandOutcome::AchievementsEvaluated {
                    approved_hours,
                    newly_awarded,
                },
                description,
            )
        }
        Command::AwardAccolade {
            student,
            accolade,
            staff,
            note,
        } => {
            let award: NewAward = NewAward {
                student_id: student.student_id,
                target_id: accolade.accolade_id,
                awarded_by: Some(staff.staff_id),
                description: note,
            };

            if !uow.award_accolade(&award)? {
                return Err(CoreError::DomainViolation(DomainError::DuplicateAward {
                    student_id: student.student_id,
                    name: accolade.name,
                }));
            }

            let description: String = format!(
                "{} awarded {} to {}.",
                staff.username, accolade.name, student.username
            );
            (CommandOutcome::AccoladeAwarded(accolade), description)
        }
    };

    Ok(ExecutedCommand {
        command_type,
        student_id,
        actor,
        outcome,
        description,
    })
}

/// Applies the guarded pending → `to` transition.
///
/// The invoker's copy of the request may be stale; the store's answer
/// is authoritative.
fn apply_transition<U: UnitOfWork + ?Sized>(
    uow: &mut U,
    request: &Request,
    to: RequestStatus,
) -> Result<(), CoreError> {
    match uow.transition_request(request.request_id, to)? {
        StatusTransition::Applied => Ok(()),
        StatusTransition::Rejected(status) => {
            Err(CoreError::DomainViolation(DomainError::RequestNotPending {
                request_id: request.request_id,
                status,
            }))
        }
    }
}
