// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration and read-only views.

use service_hours_domain::{Staff, Student, validate_username};
use service_hours_persistence::{Persistence, RequestData};
use tracing::info;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AccoladeInfo, ApprovedHoursResponse, LeaderboardEntryInfo, LeaderboardResponse,
    ListAccoladesResponse, ListMilestonesResponse, ListRequestsResponse, ListStaffResponse,
    ListStudentsResponse, MilestoneInfo, RegisterRequest, RequestInfo, StaffInfo, StudentInfo,
};

fn to_request_info(data: RequestData) -> RequestInfo {
    RequestInfo {
        request_id: data.request_id,
        student_id: data.student_id,
        student_name: data.student_name,
        hours: data.hours,
        status: data.status,
        created_at: data.created_at,
        processed_at: data.processed_at,
    }
}

/// Registers a student.
///
/// # Errors
///
/// Returns an error if the username is invalid or already registered.
pub fn register_student(
    persistence: &mut Persistence,
    request: &RegisterRequest,
) -> Result<StudentInfo, ApiError> {
    let username: &str = request.username.trim();
    validate_username(username).map_err(translate_domain_error)?;

    let student: Student = persistence.create_student(username)?;
    info!(student_id = student.student_id, "Student registered");

    Ok(StudentInfo {
        student_id: student.student_id,
        username: student.username,
    })
}

/// Registers a staff member.
///
/// # Errors
///
/// Returns an error if the username is invalid or already registered.
pub fn register_staff(
    persistence: &mut Persistence,
    request: &RegisterRequest,
) -> Result<StaffInfo, ApiError> {
    let username: &str = request.username.trim();
    validate_username(username).map_err(translate_domain_error)?;

    let staff: Staff = persistence.create_staff(username)?;
    info!(staff_id = staff.staff_id, "Staff member registered");

    Ok(StaffInfo {
        staff_id: staff.staff_id,
        username: staff.username,
    })
}

/// Lists all students.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_students(persistence: &mut Persistence) -> Result<ListStudentsResponse, ApiError> {
    Ok(ListStudentsResponse {
        students: persistence
            .list_students()?
            .into_iter()
            .map(|s| StudentInfo {
                student_id: s.student_id,
                username: s.username,
            })
            .collect(),
    })
}

/// Lists all staff members.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_staff(persistence: &mut Persistence) -> Result<ListStaffResponse, ApiError> {
    Ok(ListStaffResponse {
        staff: persistence
            .list_staff()?
            .into_iter()
            .map(|s| StaffInfo {
                staff_id: s.staff_id,
                username: s.username,
            })
            .collect(),
    })
}

/// Lists a student's requests, newest first.
///
/// # Errors
///
/// Returns an error if the student does not exist or the store fails.
pub fn list_requests(
    persistence: &mut Persistence,
    student_id: i64,
) -> Result<ListRequestsResponse, ApiError> {
    if persistence.get_student(student_id)?.is_none() {
        return Err(ApiError::student_not_found(student_id));
    }

    Ok(ListRequestsResponse {
        requests: persistence
            .list_requests(student_id)?
            .into_iter()
            .map(to_request_info)
            .collect(),
    })
}

/// Lists every request awaiting a staff decision, oldest first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_pending_requests(
    persistence: &mut Persistence,
) -> Result<ListRequestsResponse, ApiError> {
    Ok(ListRequestsResponse {
        requests: persistence
            .list_pending_requests()?
            .into_iter()
            .map(to_request_info)
            .collect(),
    })
}

/// Returns a student's name and approved-hours total.
///
/// # Errors
///
/// Returns an error if the student does not exist or the store fails.
pub fn approved_hours(
    persistence: &mut Persistence,
    student_id: i64,
) -> Result<ApprovedHoursResponse, ApiError> {
    let total = persistence
        .approved_hours(student_id)?
        .ok_or_else(|| ApiError::student_not_found(student_id))?;

    Ok(ApprovedHoursResponse {
        student_id: total.student_id,
        name: total.name,
        total_hours: total.total,
    })
}

/// Ranks every student by approved hours, highest first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn leaderboard(persistence: &mut Persistence) -> Result<LeaderboardResponse, ApiError> {
    Ok(LeaderboardResponse {
        entries: persistence
            .leaderboard()?
            .into_iter()
            .map(|entry| LeaderboardEntryInfo {
                student_id: entry.student_id,
                name: entry.name,
                hours: entry.hours,
            })
            .collect(),
    })
}

/// Lists the milestone ladder.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_milestones(persistence: &mut Persistence) -> Result<ListMilestonesResponse, ApiError> {
    Ok(ListMilestonesResponse {
        milestones: persistence
            .list_milestones()?
            .into_iter()
            .map(|m| MilestoneInfo {
                milestone_id: m.milestone_id,
                name: m.name,
                required_hours: m.required_hours,
                description: m.description,
            })
            .collect(),
    })
}

/// Lists the accolades staff can award.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_accolades(persistence: &mut Persistence) -> Result<ListAccoladesResponse, ApiError> {
    Ok(ListAccoladesResponse {
        accolades: persistence
            .list_accolades()?
            .into_iter()
            .map(|a| AccoladeInfo {
                accolade_id: a.accolade_id,
                name: a.name,
                description: a.description,
            })
            .collect(),
    })
}
