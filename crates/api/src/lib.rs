// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Service Hours Tracker.
//!
//! Callers identify the acting student or staff member by ID. Every
//! state change goes through an invoker (`StudentService` or
//! `StaffService`), which builds a `Command` and runs it in a transaction
//! that also appends its `ActivityLog` entry.

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
#![allow(clippy::multiple_crate_versions)]

mod activity_log;
mod error;
mod queries;
mod request_response;
mod services;

#[cfg(test)]
mod tests;

pub use activity_log::ActivityLog;
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use queries::{
    approved_hours, leaderboard, list_accolades, list_milestones, list_pending_requests,
    list_requests, list_staff, list_students, register_staff, register_student,
};
pub use request_response::{
    AccoladeInfo, AccoladesAwardedResponse, ApprovedHoursResponse, AwardAccoladeRequest,
    AwardAccoladeResponse, AwardInfo, EvaluateResponse, HistoryEntryInfo, HistoryResponse,
    LeaderboardEntryInfo, LeaderboardResponse, ListAccoladesResponse, ListMilestonesResponse,
    ListRequestsResponse, ListStaffResponse, ListStudentsResponse, LoggedHoursInfo,
    MilestoneInfo, ProcessRequestRequest, ProcessRequestResponse, RegisterRequest, RequestInfo,
    StaffInfo, StudentInfo, SubmitHoursRequest, SubmitHoursResponse, SummaryResponse,
};
pub use services::{StaffService, StudentService};
