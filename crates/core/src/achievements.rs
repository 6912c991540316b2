// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::unit_of_work::{NewAward, UnitOfWork};
use service_hours_domain::{Milestone, Staff, Student, display_hours, newly_qualifying};

/// Awards every milestone the student newly qualifies for.
///
/// Already-held milestones come from the award table. An insert the store
/// reports as a duplicate (a concurrent evaluation got there first) is
/// skipped and not reported as newly awarded.
///
/// # Returns
///
/// The approved-hour total and the names of milestones awarded by this
/// call, in ladder order.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn evaluate_achievements<U: UnitOfWork + ?Sized>(
    uow: &mut U,
    student: &Student,
    awarded_by: Option<&Staff>,
) -> Result<(f64, Vec<String>), CoreError> {
    let approved_hours: f64 = uow.approved_hours(student.student_id)?;
    let milestones: Vec<Milestone> = uow.milestones()?;
    let already_awarded: Vec<i64> = uow.awarded_milestone_ids(student.student_id)?;

    let mut newly_awarded: Vec<String> = Vec::new();
    for milestone in newly_qualifying(&milestones, approved_hours, &already_awarded) {
        let award: NewAward = NewAward {
            student_id: student.student_id,
            target_id: milestone.milestone_id,
            awarded_by: awarded_by.map(|staff| staff.staff_id),
            description: Some(format!(
                "Reached {} approved hours",
                display_hours(milestone.required_hours)
            )),
        };

        if uow.award_milestone(&award)? {
            newly_awarded.push(milestone.name.clone());
        }
    }

    Ok((approved_hours, newly_awarded))
}
