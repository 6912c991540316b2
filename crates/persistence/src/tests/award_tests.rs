// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use service_hours::{Command, CoreError, NewAward, UnitOfWork};
use service_hours_domain::{Accolade, DomainError};

use super::setup;
use crate::diesel_schema::student_milestones;
use crate::error::PersistenceError;
use crate::unit_of_work::DieselUnitOfWork;

fn award(student_id: i64, target_id: i64) -> NewAward {
    NewAward {
        student_id,
        target_id,
        awarded_by: None,
        description: None,
    }
}

#[test]
fn test_second_milestone_award_reports_not_inserted() {
    let (mut persistence, student, _) = setup();
    let mut uow = DieselUnitOfWork::new(&mut persistence.conn);

    assert!(uow.award_milestone(&award(student.student_id, 1)).unwrap());
    assert!(!uow.award_milestone(&award(student.student_id, 1)).unwrap());
    assert_eq!(uow.awarded_milestone_ids(student.student_id).unwrap(), vec![1]);
}

#[test]
fn test_unique_index_backs_the_award_check() {
    let (mut persistence, student, _) = setup();
    let insert = |conn: &mut diesel::SqliteConnection| {
        diesel::insert_into(student_milestones::table)
            .values((
                student_milestones::student_id.eq(student.student_id),
                student_milestones::milestone_id.eq(2),
                student_milestones::awarded_at.eq("2026-01-01T00:00:00.000000Z"),
            ))
            .execute(conn)
    };

    insert(&mut persistence.conn).unwrap();
    let second = insert(&mut persistence.conn);

    assert!(matches!(
        second,
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _
        ))
    ));
}

#[test]
fn test_award_accolade_stores_note_and_staff() {
    let (mut persistence, student, staff) = setup();
    let accolade: Accolade = persistence.get_accolade(3).unwrap().unwrap();

    persistence
        .execute_command(Command::AwardAccolade {
            student: student.clone(),
            accolade,
            staff: staff.clone(),
            note: Some(String::from("Organised the park cleanup")),
        })
        .unwrap();

    let awards = persistence.accolade_awards(student.student_id).unwrap();
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].accolade_name, "Team Player");
    assert_eq!(awards[0].awarded_by, Some(staff.staff_id));
    assert_eq!(
        awards[0].description.as_deref(),
        Some("Organised the park cleanup")
    );
}

#[test]
fn test_award_accolade_twice_is_rejected() {
    let (mut persistence, student, staff) = setup();
    let accolade: Accolade = persistence.get_accolade(2).unwrap().unwrap();
    let command: Command = Command::AwardAccolade {
        student: student.clone(),
        accolade,
        staff,
        note: None,
    };
    persistence.execute_command(command.clone()).unwrap();

    let err: PersistenceError = persistence.execute_command(command).unwrap_err();

    assert_eq!(
        err,
        PersistenceError::CommandRejected(CoreError::DomainViolation(
            DomainError::DuplicateAward {
                student_id: student.student_id,
                name: String::from("Volunteer Star"),
            }
        ))
    );
    assert_eq!(persistence.accolade_awards(student.student_id).unwrap().len(), 1);
}

#[test]
fn test_unknown_accolade_lookup_is_none() {
    let (mut persistence, _, _) = setup();
    assert!(persistence.get_accolade(99).unwrap().is_none());
}
