// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use service_hours_audit::{Action, ActivityEvent, Actor};
use service_hours_domain::{Accolade, LoggedHours, Request};

/// What a successfully executed command changed.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// A pending request was created.
    RequestSubmitted(Request),
    /// A request was approved and its hours logged.
    RequestApproved {
        /// The request after the transition.
        request: Request,
        /// The logged hours created by the approval.
        logged_hours: LoggedHours,
    },
    /// A request was denied.
    RequestDenied(Request),
    /// Milestones were evaluated.
    AchievementsEvaluated {
        /// The approved total the evaluation was based on.
        approved_hours: f64,
        /// Milestones awarded by this evaluation, in ladder order.
        newly_awarded: Vec<String>,
    },
    /// An accolade was awarded.
    AccoladeAwarded(Accolade),
}

/// The result of a successful command execution.
///
/// Executions are atomic: they either succeed completely or fail without
/// side effects. This value is what the activity log records.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedCommand {
    /// The command type tag.
    pub command_type: &'static str,
    /// The student whose record was affected.
    pub student_id: i64,
    /// The actor who performed the command.
    pub actor: Actor,
    /// The typed outcome.
    pub outcome: CommandOutcome,
    pub(crate) description: String,
}

impl ExecutedCommand {
    /// Returns the human-readable description of what the command did.
    #[must_use]
    pub fn describe(&self) -> &str {
        &self.description
    }

    /// Returns whether this execution belongs in the activity history.
    ///
    /// Evaluations that awarded nothing are not recorded.
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        match &self.outcome {
            CommandOutcome::AchievementsEvaluated { newly_awarded, .. } => {
                !newly_awarded.is_empty()
            }
            _ => true,
        }
    }

    /// Returns the milestone names newly awarded by an evaluation.
    #[must_use]
    pub fn newly_awarded(&self) -> &[String] {
        match &self.outcome {
            CommandOutcome::AchievementsEvaluated { newly_awarded, .. } => newly_awarded,
            _ => &[],
        }
    }

    /// Converts this execution into an activity event for the log.
    #[must_use]
    pub fn to_activity_event(&self) -> ActivityEvent {
        ActivityEvent::new(
            self.student_id,
            self.actor,
            Action::new(self.command_type.to_string(), self.description.clone()),
        )
    }
}
