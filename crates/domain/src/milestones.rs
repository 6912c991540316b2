// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Milestone ladder rules.
//!
//! The ladder itself is reference data seeded into the store; these
//! functions only decide which rungs a student qualifies for.

use crate::types::Milestone;

/// The seeded milestone ladder as `(name, required_hours, description)`.
pub const MILESTONE_LADDER: [(&str, f64, &str); 3] = [
    (
        "10 Hours Milestone",
        10.0,
        "Completed 10 approved service hours",
    ),
    (
        "25 Hours Milestone",
        25.0,
        "Completed 25 approved service hours",
    ),
    (
        "50 Hours Milestone",
        50.0,
        "Completed 50 approved service hours",
    ),
];

/// The seeded accolades as `(name, description)`.
pub const SEEDED_ACCOLADES: [(&str, &str); 3] = [
    ("Outstanding Helper", "Recognized for exceptional helpfulness"),
    ("Volunteer Star", "Recognized for consistent volunteering"),
    ("Team Player", "Recognized for outstanding teamwork"),
];

/// Returns the milestones whose threshold is at or below `approved_hours`,
/// ordered by ascending threshold.
#[must_use]
pub fn achievable_milestones(milestones: &[Milestone], approved_hours: f64) -> Vec<&Milestone> {
    let mut achievable: Vec<&Milestone> = milestones
        .iter()
        .filter(|m| m.required_hours <= approved_hours)
        .collect();
    achievable.sort_by(|a, b| a.required_hours.total_cmp(&b.required_hours));
    achievable
}

/// Returns the achievable milestones the student does not already hold.
///
/// # Arguments
///
/// * `milestones` - The full ladder
/// * `approved_hours` - The student's approved total
/// * `already_awarded` - Milestone ids already present in the award table
#[must_use]
pub fn newly_qualifying<'a>(
    milestones: &'a [Milestone],
    approved_hours: f64,
    already_awarded: &[i64],
) -> Vec<&'a Milestone> {
    achievable_milestones(milestones, approved_hours)
        .into_iter()
        .filter(|m| !already_awarded.contains(&m.milestone_id))
        .collect()
}
