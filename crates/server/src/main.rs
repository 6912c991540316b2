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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use service_hours_api::{
    AccoladesAwardedResponse, ActivityLog, ApiError, ApprovedHoursResponse, AwardAccoladeRequest,
    AwardAccoladeResponse, EvaluateResponse, HistoryResponse, LeaderboardResponse,
    ListAccoladesResponse, ListMilestonesResponse, ListRequestsResponse, ListStaffResponse,
    ListStudentsResponse, ProcessRequestRequest, ProcessRequestResponse, RegisterRequest,
    StaffInfo, StaffService, StudentInfo, StudentService, SubmitHoursRequest, SubmitHoursResponse,
    SummaryResponse, approved_hours, leaderboard, list_accolades, list_milestones,
    list_pending_requests, list_requests, list_staff, list_students, register_staff,
    register_student,
};
use service_hours_persistence::Persistence;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Service Hours Server - HTTP server for the Service Hours Tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
///
/// The single connection is serialised behind a Mutex.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Handler for POST `/students` endpoint.
async fn handle_register_student(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<StudentInfo>, HttpError> {
    info!(username = %req.username, "Handling register_student request");

    let mut persistence = app_state.persistence.lock().await;
    let student: StudentInfo = register_student(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(student))
}

/// Handler for GET `/students` endpoint.
async fn handle_list_students(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListStudentsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_students(&mut persistence)?))
}

/// Handler for POST `/staff` endpoint.
async fn handle_register_staff(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<StaffInfo>, HttpError> {
    info!(username = %req.username, "Handling register_staff request");

    let mut persistence = app_state.persistence.lock().await;
    let staff: StaffInfo = register_staff(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(staff))
}

/// Handler for GET `/staff` endpoint.
async fn handle_list_staff(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListStaffResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_staff(&mut persistence)?))
}

// ============================================================================
// Requests
// ============================================================================

/// Handler for POST `/requests` endpoint.
///
/// A student submits hours for confirmation.
async fn handle_submit_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmitHoursRequest>,
) -> Result<Json<SubmitHoursResponse>, HttpError> {
    info!(
        student_id = req.student_id,
        hours = req.hours,
        "Handling submit_request request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: SubmitHoursResponse =
        StudentService::new(&mut persistence).submit_request(req.student_id, req.hours)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/students/{student_id}/requests` endpoint.
async fn handle_list_requests(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<ListRequestsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_requests(&mut persistence, student_id)?))
}

/// Handler for GET `/requests/pending` endpoint.
async fn handle_list_pending_requests(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListRequestsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_pending_requests(&mut persistence)?))
}

/// Handler for POST `/requests/{request_id}/approve` endpoint.
///
/// A request that is no longer pending answers 200 with `success = false`.
async fn handle_approve_request(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
    Json(req): Json<ProcessRequestRequest>,
) -> Result<Json<ProcessRequestResponse>, HttpError> {
    info!(
        request_id = request_id,
        staff_id = req.staff_id,
        "Handling approve request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ProcessRequestResponse =
        StaffService::new(&mut persistence).approve(req.staff_id, request_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/requests/{request_id}/deny` endpoint.
async fn handle_deny_request(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
    Json(req): Json<ProcessRequestRequest>,
) -> Result<Json<ProcessRequestResponse>, HttpError> {
    info!(
        request_id = request_id,
        staff_id = req.staff_id,
        "Handling deny request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ProcessRequestResponse =
        StaffService::new(&mut persistence).deny(req.staff_id, request_id)?;
    drop(persistence);

    Ok(Json(response))
}

// ============================================================================
// Achievements
// ============================================================================

/// Handler for POST `/students/{student_id}/evaluate` endpoint.
async fn handle_evaluate(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<EvaluateResponse>, HttpError> {
    info!(student_id = student_id, "Handling evaluate request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EvaluateResponse = StudentService::new(&mut persistence).evaluate(student_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/students/{student_id}/accolades` endpoint.
async fn handle_award_accolade(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<AwardAccoladeRequest>,
) -> Result<Json<AwardAccoladeResponse>, HttpError> {
    info!(
        student_id = student_id,
        staff_id = req.staff_id,
        accolade_id = req.accolade_id,
        "Handling award_accolade request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AwardAccoladeResponse = StaffService::new(&mut persistence).award_accolade(
        req.staff_id,
        student_id,
        req.accolade_id,
        req.note,
    )?;
    drop(persistence);

    Ok(Json(response))
}

// ============================================================================
// Student views
// ============================================================================

/// Handler for GET `/students/{student_id}/history` endpoint.
async fn handle_history(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<HistoryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(ActivityLog::new(&mut persistence).history(student_id)?))
}

/// Handler for GET `/students/{student_id}/hours` endpoint.
async fn handle_approved_hours(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<ApprovedHoursResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(approved_hours(&mut persistence, student_id)?))
}

/// Handler for GET `/students/{student_id}/accolades` endpoint.
async fn handle_accolades_awarded(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<AccoladesAwardedResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(
        ActivityLog::new(&mut persistence).accolades_awarded(student_id)?,
    ))
}

/// Handler for GET `/students/{student_id}/summary` endpoint.
async fn handle_summary(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<SummaryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(ActivityLog::new(&mut persistence).summary(student_id)?))
}

// ============================================================================
// Catalogue and rankings
// ============================================================================

/// Handler for GET `/leaderboard` endpoint.
async fn handle_leaderboard(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<LeaderboardResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(leaderboard(&mut persistence)?))
}

/// Handler for GET `/milestones` endpoint.
async fn handle_list_milestones(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListMilestonesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_milestones(&mut persistence)?))
}

/// Handler for GET `/accolades` endpoint.
async fn handle_list_accolades(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListAccoladesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_accolades(&mut persistence)?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/students",
            post(handle_register_student).get(handle_list_students),
        )
        .route("/staff", post(handle_register_staff).get(handle_list_staff))
        .route("/requests", post(handle_submit_request))
        .route("/requests/pending", get(handle_list_pending_requests))
        .route("/requests/{request_id}/approve", post(handle_approve_request))
        .route("/requests/{request_id}/deny", post(handle_deny_request))
        .route("/students/{student_id}/requests", get(handle_list_requests))
        .route("/students/{student_id}/evaluate", post(handle_evaluate))
        .route(
            "/students/{student_id}/accolades",
            post(handle_award_accolade).get(handle_accolades_awarded),
        )
        .route("/students/{student_id}/history", get(handle_history))
        .route("/students/{student_id}/hours", get(handle_approved_hours))
        .route("/students/{student_id}/summary", get(handle_summary))
        .route("/leaderboard", get(handle_leaderboard))
        .route("/milestones", get(handle_list_milestones))
        .route("/accolades", get(handle_list_accolades))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Service Hours Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Helper to create a router over a fresh in-memory database.
    fn create_test_app() -> Router {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        build_router(AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        })
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status: StatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    /// Registers `alice` and `mr_jones`, returning their IDs.
    async fn bootstrap(app: &Router) -> (i64, i64) {
        let (_, student) = send(app, "POST", "/students", Some(json!({"username": "alice"}))).await;
        let (_, staff) = send(app, "POST", "/staff", Some(json!({"username": "mr_jones"}))).await;
        (
            student["student_id"].as_i64().unwrap(),
            staff["staff_id"].as_i64().unwrap(),
        )
    }

    async fn submit(app: &Router, student_id: i64, hours: f64) -> i64 {
        let (status, body) = send(
            app,
            "POST",
            "/requests",
            Some(json!({"student_id": student_id, "hours": hours})),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        body["request_id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_register_and_list_students() {
        let app: Router = create_test_app();
        bootstrap(&app).await;

        let (status, body) = send(&app, "GET", "/students", None).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["students"][0]["username"], "alice");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unprocessable() {
        let app: Router = create_test_app();
        bootstrap(&app).await;

        let (status, body) =
            send(&app, "POST", "/students", Some(json!({"username": "alice"}))).await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_submit_invalid_hours_is_bad_request() {
        let app: Router = create_test_app();
        let (student_id, _) = bootstrap(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/requests",
            Some(json!({"student_id": student_id, "hours": -2.0})),
        )
        .await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(body["error"], true);
        assert!(body["message"].as_str().unwrap().contains("hours"));
    }

    #[tokio::test]
    async fn test_approve_awards_milestone_and_updates_hours() {
        let app: Router = create_test_app();
        let (student_id, staff_id) = bootstrap(&app).await;
        let request_id: i64 = submit(&app, student_id, 12.0).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/requests/{request_id}/approve"),
            Some(json!({"staff_id": staff_id})),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["newly_awarded"], json!(["10 Hours Milestone"]));

        let (_, hours) = send(&app, "GET", &format!("/students/{student_id}/hours"), None).await;
        assert_eq!(hours["total_hours"], 12.0);

        let (_, awarded) =
            send(&app, "GET", &format!("/students/{student_id}/accolades"), None).await;
        assert_eq!(awarded["accolades"], json!(["10 Hours Milestone"]));
    }

    #[tokio::test]
    async fn test_approving_a_denied_request_reports_failure() {
        let app: Router = create_test_app();
        let (student_id, staff_id) = bootstrap(&app).await;
        let request_id: i64 = submit(&app, student_id, 5.0).await;
        send(
            &app,
            "POST",
            &format!("/requests/{request_id}/deny"),
            Some(json!({"staff_id": staff_id})),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/requests/{request_id}/approve"),
            Some(json!({"staff_id": staff_id})),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["success"], false);

        let (_, history) =
            send(&app, "GET", &format!("/students/{student_id}/history"), None).await;
        assert_eq!(history["entries"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_student_is_not_found() {
        let app: Router = create_test_app();

        let (status, body) = send(&app, "GET", "/students/404/summary", None).await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_duplicate_accolade_is_unprocessable() {
        let app: Router = create_test_app();
        let (student_id, staff_id) = bootstrap(&app).await;
        let award = json!({"staff_id": staff_id, "accolade_id": 1, "note": "Great work"});

        let (first, _) = send(
            &app,
            "POST",
            &format!("/students/{student_id}/accolades"),
            Some(award.clone()),
        )
        .await;
        let (second, _) = send(
            &app,
            "POST",
            &format!("/students/{student_id}/accolades"),
            Some(award),
        )
        .await;

        assert_eq!(first, HttpStatusCode::OK);
        assert_eq!(second, HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_pending_queue_and_catalogue() {
        let app: Router = create_test_app();
        let (student_id, _) = bootstrap(&app).await;
        submit(&app, student_id, 3.0).await;

        let (_, pending) = send(&app, "GET", "/requests/pending", None).await;
        let (_, milestones) = send(&app, "GET", "/milestones", None).await;
        let (_, accolades) = send(&app, "GET", "/accolades", None).await;

        assert_eq!(pending["requests"][0]["student_name"], "alice");
        assert_eq!(milestones["milestones"].as_array().unwrap().len(), 3);
        assert_eq!(accolades["accolades"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_leaderboard_orders_by_hours() {
        let app: Router = create_test_app();
        let (alice, staff_id) = bootstrap(&app).await;
        let (_, bob) = send(&app, "POST", "/students", Some(json!({"username": "bob"}))).await;
        let bob: i64 = bob["student_id"].as_i64().unwrap();

        for (student_id, hours) in [(alice, 10.0), (bob, 30.0), (bob, 2.0)] {
            let request_id: i64 = submit(&app, student_id, hours).await;
            send(
                &app,
                "POST",
                &format!("/requests/{request_id}/approve"),
                Some(json!({"staff_id": staff_id})),
            )
            .await;
        }

        let (status, body) = send(&app, "GET", "/leaderboard", None).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["entries"][0]["name"], "bob");
        assert_eq!(body["entries"][0]["hours"], 32.0);
        assert_eq!(body["entries"][1]["name"], "alice");
    }
}
