// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// API request to register a student or staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// The username to register.
    pub username: String,
}

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub student_id: i64,
    pub username: String,
}

/// A registered staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffInfo {
    pub staff_id: i64,
    pub username: String,
}

/// API response listing students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStudentsResponse {
    pub students: Vec<StudentInfo>,
}

/// API response listing staff members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStaffResponse {
    pub staff: Vec<StaffInfo>,
}

/// API request for a student to submit hours for confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitHoursRequest {
    /// The submitting student.
    pub student_id: i64,
    /// The number of hours claimed. Must be greater than zero.
    pub hours: f64,
}

/// API response for a submitted request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitHoursResponse {
    pub request_id: i64,
    pub student_id: i64,
    pub hours: f64,
    pub status: String,
    /// Milestones awarded by the evaluation that followed the submission.
    pub newly_awarded: Vec<String>,
    pub message: String,
}

/// API request for a staff decision on a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequestRequest {
    /// The staff member approving or denying.
    pub staff_id: i64,
}

/// API response for an approval or denial.
///
/// A request that was no longer pending yields `success = false` rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequestResponse {
    pub success: bool,
    pub message: String,
    /// Milestones awarded by the evaluation that followed an approval.
    #[serde(default)]
    pub newly_awarded: Vec<String>,
}

/// A stored hours request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestInfo {
    pub request_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub hours: f64,
    pub status: String,
    pub created_at: String,
    pub processed_at: Option<String>,
}

/// API response listing requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRequestsResponse {
    pub requests: Vec<RequestInfo>,
}

/// API response for an on-demand achievement evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub student_id: i64,
    pub approved_hours: f64,
    pub newly_awarded: Vec<String>,
    pub message: String,
}

/// API request for a staff member to award an accolade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardAccoladeRequest {
    pub staff_id: i64,
    pub accolade_id: i64,
    /// Optional note stored with the award.
    #[serde(default)]
    pub note: Option<String>,
}

/// API response for an accolade award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardAccoladeResponse {
    pub student_id: i64,
    pub accolade: String,
    pub message: String,
}

/// One activity history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntryInfo {
    pub activity_id: i64,
    pub command_type: String,
    pub description: String,
    pub staff_id: Option<i64>,
    pub timestamp: String,
}

/// API response for a student's activity history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub student_id: i64,
    pub entries: Vec<HistoryEntryInfo>,
}

/// API response for a student's approved-hours total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovedHoursResponse {
    pub student_id: i64,
    pub name: String,
    pub total_hours: f64,
}

/// API response listing the achievement names a student holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccoladesAwardedResponse {
    pub student_id: i64,
    pub accolades: Vec<String>,
}

/// One milestone or accolade award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardInfo {
    pub name: String,
    pub awarded_by: Option<i64>,
    pub description: Option<String>,
    pub awarded_at: String,
}

/// One approved logged-hours entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedHoursInfo {
    pub logged_hours_id: i64,
    pub staff_id: i64,
    pub hours: f64,
    pub logged_at: String,
}

/// API response summarising a student's achievements and hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub student_id: i64,
    pub accolades: Vec<AwardInfo>,
    pub milestones: Vec<AwardInfo>,
    pub logged_hours: Vec<LoggedHoursInfo>,
    pub total_hours: f64,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntryInfo {
    pub student_id: i64,
    pub name: String,
    pub hours: f64,
}

/// API response for the leaderboard, highest total first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntryInfo>,
}

/// A milestone on the ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneInfo {
    pub milestone_id: i64,
    pub name: String,
    pub required_hours: f64,
    pub description: Option<String>,
}

/// API response listing the milestone ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMilestonesResponse {
    pub milestones: Vec<MilestoneInfo>,
}

/// An accolade staff can award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccoladeInfo {
    pub accolade_id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// API response listing accolades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAccoladesResponse {
    pub accolades: Vec<AccoladeInfo>,
}
