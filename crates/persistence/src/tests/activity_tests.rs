// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use service_hours::{Command, ExecutedCommand};
use service_hours_audit::{Action, ActivityEvent, ActivityRecord, Actor};
use service_hours_domain::{Request, Staff};

use super::{hours, setup, submit};
use crate::{RecordedCommand, RequestData};

#[test]
fn test_append_returns_stored_record() {
    let (mut persistence, student, staff) = setup();
    let event: ActivityEvent = ActivityEvent::new(
        student.student_id,
        Actor::Staff {
            staff_id: staff.staff_id,
        },
        Action::new(
            String::from("DenyRequest"),
            String::from("mr_jones denied request 1 for 5.0 hours."),
        ),
    );

    let record: ActivityRecord = persistence.append_activity(&event).unwrap();

    assert_eq!(record.student_id, student.student_id);
    assert_eq!(record.staff_id, Some(staff.staff_id));
    assert_eq!(record.command_type, "DenyRequest");
    assert!(record.timestamp.ends_with('Z'));
    assert_eq!(record.timestamp.len(), "2026-01-01T00:00:00.000000Z".len());
}

#[test]
fn test_history_is_newest_first() {
    let (mut persistence, student, _) = setup();

    for value in [1.0, 2.0, 3.0] {
        let executed: ExecutedCommand = persistence
            .execute_command(Command::SubmitHoursRequest {
                student: student.clone(),
                hours: hours(value),
            })
            .unwrap();
        persistence
            .append_activity(&executed.to_activity_event())
            .unwrap();
    }

    let history: Vec<ActivityRecord> = persistence.history(student.student_id).unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(
        history[0].description,
        "alice requested confirmation for 3.0 hours."
    );
    assert_eq!(
        history[2].description,
        "alice requested confirmation for 1.0 hours."
    );
    assert!(history.windows(2).all(|pair| {
        (pair[0].timestamp.as_str(), pair[0].activity_id)
            > (pair[1].timestamp.as_str(), pair[1].activity_id)
    }));
    assert!(history.iter().all(|r| r.staff_id.is_none()));
}

#[test]
fn test_history_is_scoped_to_student() {
    let (mut persistence, student, _) = setup();
    let other = persistence.create_student("bob").unwrap();

    let executed: ExecutedCommand = persistence
        .execute_command(Command::SubmitHoursRequest {
            student,
            hours: hours(2.0),
        })
        .unwrap();
    persistence
        .append_activity(&executed.to_activity_event())
        .unwrap();

    assert!(persistence.history(other.student_id).unwrap().is_empty());
}

#[test]
fn test_execute_and_record_writes_entry_with_command() {
    let (mut persistence, student, _) = setup();

    let recorded: RecordedCommand = persistence
        .execute_and_record(Command::SubmitHoursRequest {
            student: student.clone(),
            hours: hours(4.0),
        })
        .unwrap();

    let activity: ActivityRecord = recorded.activity.unwrap();
    assert_eq!(activity.command_type, "SubmitHoursRequest");
    assert_eq!(activity.description, recorded.executed.describe());
    assert_eq!(
        persistence.history(student.student_id).unwrap(),
        vec![activity]
    );
}

#[test]
fn test_execute_and_record_skips_evaluation_that_awards_nothing() {
    let (mut persistence, student, _) = setup();

    let recorded: RecordedCommand = persistence
        .execute_and_record(Command::EvaluateAchievements {
            student: student.clone(),
            awarded_by: None,
        })
        .unwrap();

    assert!(recorded.activity.is_none());
    assert!(persistence.history(student.student_id).unwrap().is_empty());
}

#[test]
fn test_failed_entry_rolls_back_command() {
    let (mut persistence, student, _) = setup();
    let request: Request = submit(&mut persistence, &student, 5.0);
    let unknown_staff: Staff = Staff::new(999, String::from("ghost"));

    let result = persistence.execute_and_record(Command::DenyRequest {
        request: request.clone(),
        staff: unknown_staff,
    });

    assert!(result.is_err());
    let stored: RequestData = persistence
        .list_requests(student.student_id)
        .unwrap()
        .remove(0);
    assert_eq!(stored.request_id, request.request_id);
    assert_eq!(stored.status, "pending");
    assert!(stored.processed_at.is_none());
    assert!(persistence.history(student.student_id).unwrap().is_empty());
}
