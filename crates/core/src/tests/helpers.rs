// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, NewAward, StatusTransition, UnitOfWork};
use service_hours_domain::{
    Accolade, DomainError, Hours, LoggedHours, MILESTONE_LADDER, Milestone, Request,
    RequestStatus, Staff, Student,
};

/// A vector-backed unit of work for exercising commands without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub requests: Vec<Request>,
    pub logged_hours: Vec<LoggedHours>,
    pub milestones: Vec<Milestone>,
    pub milestone_awards: Vec<NewAward>,
    pub accolade_awards: Vec<NewAward>,
    /// Milestone ids another writer awards between the read and the insert.
    pub racing_awards: Vec<i64>,
}

impl MemoryStore {
    pub fn with_ladder() -> Self {
        let milestones: Vec<Milestone> = MILESTONE_LADDER
            .iter()
            .zip(1_i64..)
            .map(|((name, required_hours, description), id)| Milestone {
                milestone_id: id,
                name: (*name).to_string(),
                required_hours: *required_hours,
                description: Some((*description).to_string()),
            })
            .collect();
        Self {
            milestones,
            ..Self::default()
        }
    }

    /// Seeds an approved logged-hours row directly.
    pub fn credit(&mut self, student_id: i64, hours: f64) {
        let id: i64 = i64::try_from(self.logged_hours.len()).unwrap() + 1;
        self.logged_hours.push(LoggedHours {
            logged_hours_id: id,
            student_id,
            staff_id: 1,
            hours: Hours::new(hours).unwrap(),
            status: RequestStatus::Approved,
        });
    }
}

impl UnitOfWork for MemoryStore {
    fn create_request(&mut self, student_id: i64, hours: Hours) -> Result<Request, CoreError> {
        let request: Request = Request {
            request_id: i64::try_from(self.requests.len()).unwrap() + 1,
            student_id,
            hours,
            status: RequestStatus::Pending,
        };
        self.requests.push(request.clone());
        Ok(request)
    }

    fn transition_request(
        &mut self,
        request_id: i64,
        to: RequestStatus,
    ) -> Result<StatusTransition, CoreError> {
        let request: &mut Request = self
            .requests
            .iter_mut()
            .find(|r| r.request_id == request_id)
            .ok_or(CoreError::DomainViolation(DomainError::RequestNotFound(
                request_id,
            )))?;

        if request.status != RequestStatus::Pending {
            return Ok(StatusTransition::Rejected(request.status));
        }
        request.status = to;
        Ok(StatusTransition::Applied)
    }

    fn record_logged_hours(
        &mut self,
        student_id: i64,
        staff_id: i64,
        hours: Hours,
    ) -> Result<LoggedHours, CoreError> {
        let logged: LoggedHours = LoggedHours {
            logged_hours_id: i64::try_from(self.logged_hours.len()).unwrap() + 1,
            student_id,
            staff_id,
            hours,
            status: RequestStatus::Approved,
        };
        self.logged_hours.push(logged.clone());
        Ok(logged)
    }

    fn approved_hours(&mut self, student_id: i64) -> Result<f64, CoreError> {
        Ok(self
            .logged_hours
            .iter()
            .filter(|l| l.student_id == student_id && l.status == RequestStatus::Approved)
            .map(|l| l.hours.value())
            .sum())
    }

    fn milestones(&mut self) -> Result<Vec<Milestone>, CoreError> {
        Ok(self.milestones.clone())
    }

    fn awarded_milestone_ids(&mut self, student_id: i64) -> Result<Vec<i64>, CoreError> {
        Ok(self
            .milestone_awards
            .iter()
            .filter(|a| a.student_id == student_id)
            .map(|a| a.target_id)
            .collect())
    }

    fn award_milestone(&mut self, award: &NewAward) -> Result<bool, CoreError> {
        if self.racing_awards.contains(&award.target_id) {
            self.milestone_awards.push(NewAward {
                awarded_by: None,
                ..award.clone()
            });
            self.racing_awards.retain(|id| *id != award.target_id);
            return Ok(false);
        }
        if self
            .milestone_awards
            .iter()
            .any(|a| a.student_id == award.student_id && a.target_id == award.target_id)
        {
            return Ok(false);
        }
        self.milestone_awards.push(award.clone());
        Ok(true)
    }

    fn award_accolade(&mut self, award: &NewAward) -> Result<bool, CoreError> {
        if self
            .accolade_awards
            .iter()
            .any(|a| a.student_id == award.student_id && a.target_id == award.target_id)
        {
            return Ok(false);
        }
        self.accolade_awards.push(award.clone());
        Ok(true)
    }
}

pub fn create_test_student() -> Student {
    Student::new(1, String::from("alice"))
}

pub fn create_test_staff() -> Staff {
    Staff::new(1, String::from("bob"))
}

pub fn create_test_accolade() -> Accolade {
    Accolade {
        accolade_id: 2,
        name: String::from("Volunteer Star"),
        description: None,
    }
}

pub fn hours(value: f64) -> Hours {
    Hours::new(value).unwrap()
}
