// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use service_hours::{CoreError, NewAward, StatusTransition, UnitOfWork};
use service_hours_domain::{DomainError, Hours, LoggedHours, Milestone, Request, RequestStatus};

use crate::error::PersistenceError;
use crate::{mutations, queries};

/// A `UnitOfWork` over a connection that is already inside a transaction.
///
/// Only `Persistence::execute_command` constructs one, so every call made
/// through it commits or rolls back together.
pub(crate) struct DieselUnitOfWork<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> DieselUnitOfWork<'a> {
    pub(crate) const fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }
}

impl UnitOfWork for DieselUnitOfWork<'_> {
    fn create_request(&mut self, student_id: i64, hours: Hours) -> Result<Request, CoreError> {
        Ok(mutations::requests::insert_request(
            self.conn, student_id, hours,
        )?)
    }

    fn transition_request(
        &mut self,
        request_id: i64,
        to: RequestStatus,
    ) -> Result<StatusTransition, CoreError> {
        match mutations::requests::transition_request(self.conn, request_id, to) {
            Ok(transition) => Ok(transition),
            Err(PersistenceError::NotFound(_)) => {
                Err(DomainError::RequestNotFound(request_id).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn record_logged_hours(
        &mut self,
        student_id: i64,
        staff_id: i64,
        hours: Hours,
    ) -> Result<LoggedHours, CoreError> {
        Ok(mutations::requests::insert_logged_hours(
            self.conn, student_id, staff_id, hours,
        )?)
    }

    fn approved_hours(&mut self, student_id: i64) -> Result<f64, CoreError> {
        Ok(queries::requests::approved_hours(self.conn, student_id)?)
    }

    fn milestones(&mut self) -> Result<Vec<Milestone>, CoreError> {
        Ok(queries::awards::list_milestones(self.conn)?)
    }

    fn awarded_milestone_ids(&mut self, student_id: i64) -> Result<Vec<i64>, CoreError> {
        Ok(queries::awards::awarded_milestone_ids(
            self.conn, student_id,
        )?)
    }

    fn award_milestone(&mut self, award: &NewAward) -> Result<bool, CoreError> {
        Ok(mutations::awards::insert_milestone_award(self.conn, award)?)
    }

    fn award_accolade(&mut self, award: &NewAward) -> Result<bool, CoreError> {
        Ok(mutations::awards::insert_accolade_award(self.conn, award)?)
    }
}
