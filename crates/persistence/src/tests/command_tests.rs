// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command execution through the transactional unit of work.

use service_hours::{Command, CommandOutcome, CoreError, ExecutedCommand};
use service_hours_domain::{DomainError, Request, RequestStatus, Student};

use super::{credit, evaluate, hours, setup, submit};
use crate::error::PersistenceError;
use crate::{LoggedHoursData, RequestData};

#[test]
fn test_submit_creates_exactly_one_pending_request() {
    let (mut persistence, student, _) = setup();

    let request: Request = submit(&mut persistence, &student, 7.5);

    let stored: Vec<RequestData> = persistence.list_requests(student.student_id).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].request_id, request.request_id);
    assert_eq!(stored[0].status, "pending");
    assert_eq!(stored[0].student_name, "alice");
    assert!(stored[0].processed_at.is_none());
    assert_eq!(persistence.list_pending_requests().unwrap().len(), 1);
}

#[test]
fn test_approve_creates_one_matching_logged_hours_row() {
    let (mut persistence, student, staff) = setup();
    let request: Request = submit(&mut persistence, &student, 12.0);

    let executed: ExecutedCommand = persistence
        .execute_command(Command::ApproveRequest {
            request: request.clone(),
            staff: staff.clone(),
        })
        .unwrap();

    let logged: Vec<LoggedHoursData> = persistence.list_logged_hours(student.student_id).unwrap();
    assert_eq!(logged.len(), 1);
    assert!((logged[0].hours - 12.0).abs() < f64::EPSILON);
    assert_eq!(logged[0].staff_id, staff.staff_id);

    let stored: Request = persistence
        .get_request(request.request_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, RequestStatus::Approved);
    assert!(persistence.list_pending_requests().unwrap().is_empty());
    assert_eq!(
        executed.describe(),
        format!("mr_jones logged 12.0 hours for Student {}.", student.student_id)
    );
}

#[test]
fn test_approve_denied_request_is_rejected_without_logged_hours() {
    let (mut persistence, student, staff) = setup();
    let request: Request = submit(&mut persistence, &student, 5.0);
    persistence
        .execute_command(Command::DenyRequest {
            request,
            staff: staff.clone(),
        })
        .unwrap();

    let denied: Request = persistence.get_request(1).unwrap().unwrap();
    let err: PersistenceError = persistence
        .execute_command(Command::ApproveRequest {
            request: denied,
            staff,
        })
        .unwrap_err();

    assert!(matches!(err, PersistenceError::CommandRejected(ref e) if e.is_invalid_state()));
    assert!(persistence
        .list_logged_hours(student.student_id)
        .unwrap()
        .is_empty());
    assert_eq!(
        persistence.get_request(1).unwrap().unwrap().status,
        RequestStatus::Denied
    );
}

#[test]
fn test_stale_pending_copy_loses_to_stored_status() {
    let (mut persistence, student, staff) = setup();
    let request: Request = submit(&mut persistence, &student, 5.0);

    persistence
        .execute_command(Command::ApproveRequest {
            request: request.clone(),
            staff: staff.clone(),
        })
        .unwrap();
    // The second staff action still holds a copy that says `pending`.
    let err: PersistenceError = persistence
        .execute_command(Command::DenyRequest { request, staff })
        .unwrap_err();

    assert_eq!(
        err,
        PersistenceError::CommandRejected(CoreError::DomainViolation(
            DomainError::RequestNotPending {
                request_id: 1,
                status: RequestStatus::Approved,
            }
        ))
    );
    assert_eq!(persistence.list_logged_hours(student.student_id).unwrap().len(), 1);
}

#[test]
fn test_unknown_request_is_reported_as_not_found() {
    let (mut persistence, student, staff) = setup();

    let err: PersistenceError = persistence
        .execute_command(Command::ApproveRequest {
            request: Request {
                request_id: 404,
                student_id: student.student_id,
                hours: hours(1.0),
                status: RequestStatus::Pending,
            },
            staff,
        })
        .unwrap_err();

    assert_eq!(
        err,
        PersistenceError::CommandRejected(CoreError::DomainViolation(
            DomainError::RequestNotFound(404)
        ))
    );
}

#[test]
fn test_deny_creates_no_logged_hours() {
    let (mut persistence, student, staff) = setup();
    let request: Request = submit(&mut persistence, &student, 5.0);

    let executed: ExecutedCommand = persistence
        .execute_command(Command::DenyRequest { request, staff })
        .unwrap();

    assert!(matches!(executed.outcome, CommandOutcome::RequestDenied(_)));
    assert!(persistence
        .list_logged_hours(student.student_id)
        .unwrap()
        .is_empty());
    let stored: Vec<RequestData> = persistence.list_requests(student.student_id).unwrap();
    assert_eq!(stored[0].status, "denied");
    assert!(stored[0].processed_at.is_some());
}

#[test]
fn test_failed_command_rolls_back() {
    let (mut persistence, _, _) = setup();
    let ghost: Student = Student::new(999, String::from("ghost"));

    let result = persistence.execute_command(Command::SubmitHoursRequest {
        student: ghost,
        hours: hours(3.0),
    });

    assert!(matches!(
        result,
        Err(PersistenceError::CommandRejected(CoreError::Store(_)))
    ));
    assert!(persistence.list_pending_requests().unwrap().is_empty());
}

#[test]
fn test_twelve_then_twenty_hours_awards_each_milestone_once() {
    let (mut persistence, student, staff) = setup();

    credit(&mut persistence, &student, &staff, 12.0);
    assert_eq!(
        evaluate(&mut persistence, &student),
        vec![String::from("10 Hours Milestone")]
    );

    credit(&mut persistence, &student, &staff, 20.0);
    assert_eq!(
        evaluate(&mut persistence, &student),
        vec![String::from("25 Hours Milestone")]
    );

    let total = persistence.approved_hours(student.student_id).unwrap().unwrap();
    assert!((total.total - 32.0).abs() < f64::EPSILON);
    assert_eq!(total.name, "alice");

    assert!(evaluate(&mut persistence, &student).is_empty());
    assert_eq!(persistence.milestone_awards(student.student_id).unwrap().len(), 2);
}

#[test]
fn test_twelve_then_eight_hours_awards_nothing_new() {
    let (mut persistence, student, staff) = setup();

    credit(&mut persistence, &student, &staff, 12.0);
    assert_eq!(
        evaluate(&mut persistence, &student),
        vec![String::from("10 Hours Milestone")]
    );

    credit(&mut persistence, &student, &staff, 8.0);
    assert!(evaluate(&mut persistence, &student).is_empty());

    let total = persistence.approved_hours(student.student_id).unwrap().unwrap();
    assert!((total.total - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_exactly_ten_hours_qualifies() {
    let (mut persistence, student, staff) = setup();
    credit(&mut persistence, &student, &staff, 10.0);

    assert_eq!(
        evaluate(&mut persistence, &student),
        vec![String::from("10 Hours Milestone")]
    );
    assert!(evaluate(&mut persistence, &student).is_empty());
}

#[test]
fn test_crossing_twenty_five_awards_only_that_milestone() {
    let (mut persistence, student, staff) = setup();
    credit(&mut persistence, &student, &staff, 12.0);
    evaluate(&mut persistence, &student);

    credit(&mut persistence, &student, &staff, 14.0);

    assert_eq!(
        evaluate(&mut persistence, &student),
        vec![String::from("25 Hours Milestone")]
    );
}

#[test]
fn test_attributed_evaluation_records_staff() {
    let (mut persistence, student, staff) = setup();
    credit(&mut persistence, &student, &staff, 10.0);

    persistence
        .execute_command(Command::EvaluateAchievements {
            student: student.clone(),
            awarded_by: Some(staff.clone()),
        })
        .unwrap();

    let awards = persistence.milestone_awards(student.student_id).unwrap();
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].awarded_by, Some(staff.staff_id));
    assert_eq!(
        awards[0].description.as_deref(),
        Some("Reached 10.0 approved hours")
    );
}
