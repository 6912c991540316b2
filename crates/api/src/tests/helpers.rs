// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use service_hours_persistence::Persistence;

use crate::{
    ProcessRequestResponse, RegisterRequest, StaffInfo, StaffService, StudentInfo,
    StudentService, SubmitHoursResponse, register_staff, register_student,
};

/// A fresh database with one student (`alice`) and one staff member (`mr_jones`).
pub struct Fixture {
    pub persistence: Persistence,
    pub student_id: i64,
    pub staff_id: i64,
}

pub fn setup() -> Fixture {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let student: StudentInfo = register_student(&mut persistence, &register("alice")).unwrap();
    let staff: StaffInfo = register_staff(&mut persistence, &register("mr_jones")).unwrap();

    Fixture {
        persistence,
        student_id: student.student_id,
        staff_id: staff.staff_id,
    }
}

pub fn register(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: String::from(username),
    }
}

impl Fixture {
    pub fn submit(&mut self, hours: f64) -> SubmitHoursResponse {
        StudentService::new(&mut self.persistence)
            .submit_request(self.student_id, hours)
            .unwrap()
    }

    pub fn approve(&mut self, request_id: i64) -> ProcessRequestResponse {
        StaffService::new(&mut self.persistence)
            .approve(self.staff_id, request_id)
            .unwrap()
    }

    pub fn deny(&mut self, request_id: i64) -> ProcessRequestResponse {
        StaffService::new(&mut self.persistence)
            .deny(self.staff_id, request_id)
            .unwrap()
    }

    /// Submits and approves, returning the approval response.
    pub fn credit(&mut self, hours: f64) -> ProcessRequestResponse {
        let request_id: i64 = self.submit(hours).request_id;
        self.approve(request_id)
    }
}
