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
    clippy::all
)]

use serde::{Deserialize, Serialize};

/// Represents the entity performing an action.
///
/// Students act on their own behalf (submitting requests); staff act on
/// a student's behalf (approving, denying, awarding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Actor {
    /// A student acting on their own record.
    Student {
        /// The student identifier.
        student_id: i64,
    },
    /// A staff member acting on a student's record.
    Staff {
        /// The staff identifier.
        staff_id: i64,
    },
}

impl Actor {
    /// Returns the staff identifier when the actor is a staff member.
    #[must_use]
    pub const fn staff_id(&self) -> Option<i64> {
        match self {
            Self::Student { .. } => None,
            Self::Staff { staff_id } => Some(*staff_id),
        }
    }
}

/// Represents the specific action performed.
///
/// An action names the executed command and carries its human-readable
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The command type tag (e.g., "`ApproveRequest`").
    pub command_type: String,
    /// The command's description of what it did.
    pub description: String,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `command_type` - The command type tag
    /// * `description` - The command's description
    #[must_use]
    pub const fn new(command_type: String, description: String) -> Self {
        Self {
            command_type,
            description,
        }
    }
}

/// An immutable activity event awaiting persistence.
///
/// Every successfully executed command produces exactly one activity event.
/// Events capture:
/// - Whose record was affected (student)
/// - Who performed the action (actor)
/// - What was performed (action)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    /// The student whose record the action affected.
    pub student_id: i64,
    /// The actor who initiated the action.
    pub actor: Actor,
    /// The action that was performed.
    pub action: Action,
}

impl ActivityEvent {
    /// Creates a new `ActivityEvent`.
    ///
    /// # Arguments
    ///
    /// * `student_id` - The affected student
    /// * `actor` - The actor who initiated the change
    /// * `action` - The action that was performed
    #[must_use]
    pub const fn new(student_id: i64, actor: Actor, action: Action) -> Self {
        Self {
            student_id,
            actor,
            action,
        }
    }

    /// Returns the acting staff member, if any.
    #[must_use]
    pub const fn staff_id(&self) -> Option<i64> {
        self.actor.staff_id()
    }
}

/// A persisted activity history row.
///
/// Rows are append-only; they are never updated or deleted through
/// normal operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// The identifier assigned by the store.
    pub activity_id: i64,
    /// The student whose record the action affected.
    pub student_id: i64,
    /// The command type tag.
    pub command_type: String,
    /// The command's description.
    pub description: String,
    /// The acting staff member, if any.
    pub staff_id: Option<i64>,
    /// Server-assigned timestamp (RFC 3339, UTC).
    pub timestamp: String,
}
