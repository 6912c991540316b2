// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod milestones;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use milestones::{
    MILESTONE_LADDER, SEEDED_ACCOLADES, achievable_milestones, newly_qualifying,
};
pub use types::{
    Accolade, AccoladeAward, Hours, LoggedHours, Milestone, MilestoneAward, Request,
    RequestStatus, Staff, Student, display_hours,
};
pub use validation::{
    MAX_USERNAME_LENGTH, validate_hours, validate_request_pending, validate_username,
};

