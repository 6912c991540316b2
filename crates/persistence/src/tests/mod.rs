// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod activity_tests;
mod award_tests;
mod command_tests;

use service_hours::{Command, CommandOutcome, ExecutedCommand};
use service_hours_domain::{Hours, Request, Staff, Student};

use crate::Persistence;

/// Opens a fresh database with one student and one staff member.
pub fn setup() -> (Persistence, Student, Staff) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let student: Student = persistence.create_student("alice").unwrap();
    let staff: Staff = persistence.create_staff("mr_jones").unwrap();
    (persistence, student, staff)
}

pub fn hours(value: f64) -> Hours {
    Hours::new(value).unwrap()
}

/// Submits a request and returns it.
pub fn submit(persistence: &mut Persistence, student: &Student, value: f64) -> Request {
    let executed: ExecutedCommand = persistence
        .execute_command(Command::SubmitHoursRequest {
            student: student.clone(),
            hours: hours(value),
        })
        .unwrap();

    match executed.outcome {
        CommandOutcome::RequestSubmitted(request) => request,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

/// Submits and approves a request.
pub fn credit(persistence: &mut Persistence, student: &Student, staff: &Staff, value: f64) {
    let request: Request = submit(persistence, student, value);
    persistence
        .execute_command(Command::ApproveRequest {
            request,
            staff: staff.clone(),
        })
        .unwrap();
}

/// Runs an unattributed evaluation and returns the newly awarded names.
pub fn evaluate(persistence: &mut Persistence, student: &Student) -> Vec<String> {
    persistence
        .execute_command(Command::EvaluateAchievements {
            student: student.clone(),
            awarded_by: None,
        })
        .unwrap()
        .newly_awarded()
        .to_vec()
}
