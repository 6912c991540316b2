// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use service_hours_audit::Actor;
use service_hours_domain::{Accolade, Hours, Request, Staff, Student};

use crate::error::CoreError;
use crate::execute::execute;
use crate::outcome::ExecutedCommand;
use crate::unit_of_work::UnitOfWork;

/// A command represents a student or staff intent as data only.
///
/// Commands are the only way to request state changes. Each command is
/// single-use: `execute` consumes it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A student claims service hours.
    SubmitHoursRequest {
        /// The submitting student.
        student: Student,
        /// The hours claimed.
        hours: Hours,
    },
    /// Staff approves a pending request, crediting its hours.
    ApproveRequest {
        /// The request as loaded by the invoker.
        request: Request,
        /// The approving staff member.
        staff: Staff,
    },
    /// Staff denies a pending request.
    DenyRequest {
        /// The request as loaded by the invoker.
        request: Request,
        /// The denying staff member.
        staff: Staff,
    },
    /// Award every milestone the student newly qualifies for.
    EvaluateAchievements {
        /// The student to evaluate.
        student: Student,
        /// The staff member whose action triggered the evaluation, if any.
        awarded_by: Option<Staff>,
    },
    /// Staff awards a named accolade.
    AwardAccolade {
        /// The receiving student.
        student: Student,
        /// The accolade being awarded.
        accolade: Accolade,
        /// The awarding staff member.
        staff: Staff,
        /// Optional note stored with the award.
        note: Option<String>,
    },
}

impl Command {
    /// Returns the command type tag recorded in the activity log.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SubmitHoursRequest { .. } => "SubmitHoursRequest",
            Self::ApproveRequest { .. } => "ApproveRequest",
            Self::DenyRequest { .. } => "DenyRequest",
            Self::EvaluateAchievements { .. } => "EvaluateAchievements",
            Self::AwardAccolade { .. } => "AwardAccolade",
        }
    }

    /// Returns the student whose record this command affects.
    #[must_use]
    pub const fn student_id(&self) -> i64 {
        match self {
            Self::SubmitHoursRequest { student, .. }
            | Self::EvaluateAchievements { student, .. }
            | Self::AwardAccolade { student, .. } => student.student_id,
            Self::ApproveRequest { request, .. } | Self::DenyRequest { request, .. } => {
                request.student_id
            }
        }
    }

    /// Returns the actor performing this command.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        match self {
            Self::SubmitHoursRequest { student, .. }
            | Self::EvaluateAchievements {
                student,
                awarded_by: None,
            } => Actor::Student {
                student_id: student.student_id,
            },
            Self::EvaluateAchievements {
                awarded_by: Some(staff),
                ..
            }
            | Self::ApproveRequest { staff, .. }
            | Self::DenyRequest { staff, .. }
            | Self::AwardAccolade { staff, .. } => Actor::Staff {
                staff_id: staff.staff_id,
            },
        }
    }

    /// Executes this command against an open unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error if a precondition fails or the store fails. The
    /// caller must roll the unit of work back in that case.
    pub fn execute<U: UnitOfWork + ?Sized>(
        self,
        uow: &mut U,
    ) -> Result<ExecutedCommand, CoreError> {
        execute(self, uow)
    }
}
