// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{MemoryStore, create_test_staff, create_test_student};
use crate::{Command, CommandOutcome, ExecutedCommand};
use service_hours_domain::Staff;

fn evaluate(store: &mut MemoryStore, awarded_by: Option<Staff>) -> ExecutedCommand {
    Command::EvaluateAchievements {
        student: create_test_student(),
        awarded_by,
    }
    .execute(store)
    .unwrap()
}

#[test]
fn test_exactly_ten_hours_awards_first_milestone_once() {
    let mut store: MemoryStore = MemoryStore::with_ladder();
    store.credit(1, 10.0);

    let first: ExecutedCommand = evaluate(&mut store, None);
    let second: ExecutedCommand = evaluate(&mut store, None);

    assert_eq!(first.newly_awarded(), ["10 Hours Milestone"]);
    assert!(second.newly_awarded().is_empty());
    assert!(first.is_recorded());
    assert!(!second.is_recorded());
    assert_eq!(store.milestone_awards.len(), 1);
}

#[test]
fn test_crossing_twenty_five_does_not_reaward_ten() {
    let mut store: MemoryStore = MemoryStore::with_ladder();
    store.credit(1, 10.0);
    evaluate(&mut store, None);

    store.credit(1, 15.0);
    let executed: ExecutedCommand = evaluate(&mut store, None);

    assert_eq!(executed.newly_awarded(), ["25 Hours Milestone"]);
    assert_eq!(store.milestone_awards.len(), 2);
}

#[test]
fn test_below_threshold_awards_nothing() {
    let mut store: MemoryStore = MemoryStore::with_ladder();
    store.credit(1, 9.5);

    let executed: ExecutedCommand = evaluate(&mut store, None);

    assert!(executed.newly_awarded().is_empty());
    assert_eq!(executed.describe(), "No new milestones for alice.");
}

#[test]
fn test_description_lists_all_new_milestones() {
    let mut store: MemoryStore = MemoryStore::with_ladder();
    store.credit(1, 30.0);

    let executed: ExecutedCommand = evaluate(&mut store, None);

    assert_eq!(
        executed.describe(),
        "alice achieved: 10 Hours Milestone, 25 Hours Milestone"
    );
    assert!(matches!(
        executed.outcome,
        CommandOutcome::AchievementsEvaluated { approved_hours, .. } if (approved_hours - 30.0).abs() < f64::EPSILON
    ));
}

#[test]
fn test_racing_duplicate_is_skipped_silently() {
    let mut store: MemoryStore = MemoryStore::with_ladder();
    store.credit(1, 26.0);
    // Another evaluation inserts the 10 hour milestone (id 1) first.
    store.racing_awards.push(1);

    let executed: ExecutedCommand = evaluate(&mut store, None);

    assert_eq!(executed.newly_awarded(), ["25 Hours Milestone"]);
    assert_eq!(store.milestone_awards.len(), 2);
}

#[test]
fn test_staff_triggered_evaluation_attributes_awards() {
    let mut store: MemoryStore = MemoryStore::with_ladder();
    store.credit(1, 12.0);

    let executed: ExecutedCommand = evaluate(&mut store, Some(create_test_staff()));

    assert_eq!(store.milestone_awards[0].awarded_by, Some(1));
    assert_eq!(executed.actor.staff_id(), Some(1));
}

#[test]
fn test_other_students_hours_do_not_count() {
    let mut store: MemoryStore = MemoryStore::with_ladder();
    store.credit(2, 40.0);

    let executed: ExecutedCommand = evaluate(&mut store, None);

    assert!(executed.newly_awarded().is_empty());
}
