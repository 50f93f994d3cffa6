//! API Integration Tests
//!
//! Each test spawns its own server on the in-memory backend. The final test
//! repeats the core scenario against PostgreSQL when `DATABASE_URL` is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, postgres_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn register(server: &TestServer) -> i64 {
    let response = server
        .post("/api/v1/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    let body: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.user_id
}

async fn create_skill(server: &TestServer, name: &str) -> i64 {
    let response = server
        .post("/api/v1/skills", &CreateSkillRequest::named(name))
        .await
        .unwrap();
    let body: CreatedSkillResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.skill_id
}

async fn create_event(server: &TestServer, request: &EventRequest) -> i64 {
    let response = server.post("/api/v1/events", request).await.unwrap();
    let body: CreatedEventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.event_id
}

async fn match_volunteers(
    server: &TestServer,
    event_id: i64,
    volunteers: &[i64],
    expected: StatusCode,
) -> MatchResultResponse {
    let request = MatchRequest {
        event_id,
        volunteers: volunteers.to_vec(),
    };
    let response = server.post("/api/v1/match-volunteer", &request).await.unwrap();
    assert_json(response, expected).await.unwrap()
}

async fn history(server: &TestServer, user_id: i64) -> Vec<HistoryEntry> {
    let response = server
        .get(&format!("/api/v1/history/{user_id}"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn notification_titles(server: &TestServer, user_id: i64) -> Vec<String> {
    let response = server
        .get(&format!("/api/v1/users/{user_id}/notifications"))
        .await
        .unwrap();
    let notes: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    notes.into_iter().map(|n| n.title).collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_on_memory_backend() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "not_configured");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let registered: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.email, request.email);
    assert_eq!(registered.role, "user");

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.user_id, registered.user_id);
    assert_eq!(login.token_type, "Bearer");
    assert!(!login.token.is_empty());
}

#[tokio::test]
async fn test_register_admin_role() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/auth/register", &RegisterRequest::admin())
        .await
        .unwrap();
    let registered: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.role, "admin");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    let duplicate = RegisterRequest {
        email: request.email.to_uppercase(),
        password: "Different1!".to_string(),
        role: None,
    };
    let response = server.post("/api/v1/auth/register", &duplicate).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "EMAIL_ALREADY_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_invalid_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/auth/register",
            &json!({"email": "not-an-email", "password": "secret"}),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let wrong_password = LoginRequest {
        email: request.email.clone(),
        password: "wrongpass".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &wrong_password).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();

    let unknown = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: "wrongpass".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &unknown).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_malformed_json_body() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .client
        .post(format!("{}/api/v1/auth/login", server.base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_REQUEST_BODY")
        .await
        .unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_beach_cleanup_scenario() {
    let server = TestServer::start().await.expect("Failed to start server");

    let first_aid = create_skill(&server, "First Aid").await;
    let event_id = create_event(&server, &EventRequest::new("Beach Cleanup", &[first_aid])).await;

    let response = server.get("/api/v1/events").await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_id, event_id);
    assert_eq!(events[0].event_name, "Beach Cleanup");
    assert_eq!(events[0].required_skills, "First Aid");
    assert_eq!(events[0].urgency, "medium");
    assert_eq!(events[0].event_date, days_from_today(7));
}

#[tokio::test]
async fn test_event_skills_round_trip() {
    let server = TestServer::start().await.expect("Failed to start server");
    let a = create_skill(&server, "Cooking").await;
    let b = create_skill(&server, "Driving").await;
    let event_id = create_event(&server, &EventRequest::new("Food Drive", &[b, a, b])).await;

    let response = server
        .get(&format!("/api/v1/events/{event_id}"))
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let mut ids: Vec<i64> = event.skills.iter().map(|s| s.skill_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, {
        let mut expected = vec![a, b];
        expected.sort_unstable();
        expected
    });
    assert!(event.skills.iter().any(|s| s.skill_name == "Cooking"));
}

#[tokio::test]
async fn test_events_listed_by_urgency_then_date() {
    let server = TestServer::start().await.expect("Failed to start server");
    let skill = create_skill(&server, "General").await;

    create_event(
        &server,
        &EventRequest::new("Low", &[skill]).with_urgency("low"),
    )
    .await;
    create_event(
        &server,
        &EventRequest::new("High Later", &[skill])
            .with_urgency("HIGH")
            .on(days_from_today(20)),
    )
    .await;
    create_event(
        &server,
        &EventRequest::new("High Sooner", &[skill])
            .with_urgency("high")
            .on(days_from_today(2)),
    )
    .await;
    create_event(
        &server,
        &EventRequest::new("Medium", &[skill]).with_urgency("Medium"),
    )
    .await;

    let response = server.get("/api/v1/events").await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<&str> = events.iter().map(|e| e.event_name.as_str()).collect();
    assert_eq!(names, vec!["High Sooner", "High Later", "Medium", "Low"]);
}

#[tokio::test]
async fn test_event_date_boundaries() {
    let server = TestServer::start().await.expect("Failed to start server");
    let skill = create_skill(&server, "General").await;

    let today = EventRequest::new("Today", &[skill]).on(days_from_today(0));
    let response = server.post("/api/v1/events", &today).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let yesterday = EventRequest::new("Yesterday", &[skill]).on(days_from_today(-1));
    let response = server.post("/api/v1/events", &yesterday).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "PAST_DATE")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_event_validation() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/events",
            &json!({"event_name": "Incomplete", "event_date": days_from_today(3)}),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
    let message = error["message"].as_str().unwrap();
    assert!(message.contains("description"));
    assert!(message.contains("skills"));

    let response = server
        .post("/api/v1/events", &EventRequest::new("Ghost Skills", &[999]))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "UNKNOWN_SKILLS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_and_delete_event() {
    let server = TestServer::start().await.expect("Failed to start server");
    let a = create_skill(&server, "Cooking").await;
    let b = create_skill(&server, "Driving").await;
    let event_id = create_event(&server, &EventRequest::new("Food Drive", &[a])).await;

    let update = EventRequest::new("Food Drive Deluxe", &[b]).with_urgency("high");
    let response = server
        .put(&format!("/api/v1/events/{event_id}"), &update)
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(event.event_name, "Food Drive Deluxe");
    assert_eq!(event.required_skills, "Driving");
    assert_eq!(event.urgency, "high");

    let response = server
        .delete(&format!("/api/v1/events/{event_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/events/{event_id}"))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_EVENT")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_event_path_errors() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/events/404").await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_EVENT")
        .await
        .unwrap();

    let response = server.get("/api/v1/events/not-a-number").await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_PATH_PARAMETER")
        .await
        .unwrap();
}

// ============================================================================
// Skill Tests
// ============================================================================

#[tokio::test]
async fn test_skill_catalog() {
    let server = TestServer::start().await.expect("Failed to start server");
    let cooking = create_skill(&server, "Cooking").await;
    let driving = create_skill(&server, "Driving").await;

    let response = server
        .post("/api/v1/skills", &CreateSkillRequest::named("  Cooking "))
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "SKILL_ALREADY_EXISTS")
        .await
        .unwrap();

    let event_id = create_event(&server, &EventRequest::new("Potluck", &[cooking, driving])).await;

    let response = server
        .delete(&format!("/api/v1/skills/{cooking}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/events/{event_id}"))
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(event.required_skills, "Driving");

    let response = server
        .delete(&format!("/api/v1/skills/{cooking}"))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_SKILL")
        .await
        .unwrap();
}

// ============================================================================
// Matching Tests
// ============================================================================

#[tokio::test]
async fn test_match_volunteers_status_codes() {
    let server = TestServer::start().await.expect("Failed to start server");
    let skill = create_skill(&server, "General").await;
    let event_id = create_event(&server, &EventRequest::new("Shelter Shift", &[skill])).await;
    let volunteer = register(&server).await;

    let result = match_volunteers(&server, event_id, &[volunteer, 9999], StatusCode::CREATED).await;
    assert_eq!(result.event_id, event_id);
    assert_eq!(result.results[0].user_id, volunteer);
    assert_eq!(result.results[0].outcome, "matched");
    assert_eq!(result.results[1].outcome, "unknown_volunteer");

    let result = match_volunteers(&server, event_id, &[volunteer], StatusCode::OK).await;
    assert_eq!(result.results[0].outcome, "already_matched");

    assert_eq!(history(&server, volunteer).await.len(), 1);
    assert_eq!(
        notification_titles(&server, volunteer).await,
        vec!["New Event Assignment".to_string()]
    );
}

#[tokio::test]
async fn test_match_unknown_event_and_empty_list() {
    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;

    let request = MatchRequest {
        event_id: 777,
        volunteers: vec![volunteer],
    };
    let response = server.post("/api/v1/match-volunteer", &request).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_EVENT")
        .await
        .unwrap();

    let request = MatchRequest {
        event_id: 777,
        volunteers: vec![],
    };
    let response = server.post("/api/v1/match-volunteer", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_unmatch_then_rematch() {
    let server = TestServer::start().await.expect("Failed to start server");
    let skill = create_skill(&server, "General").await;
    let event_id = create_event(&server, &EventRequest::new("Park Day", &[skill])).await;
    let volunteer = register(&server).await;

    match_volunteers(&server, event_id, &[volunteer], StatusCode::CREATED).await;

    let path = format!("/api/v1/unmatch-volunteer/{event_id}/{volunteer}");
    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete(&path).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_MATCH")
        .await
        .unwrap();

    match_volunteers(&server, event_id, &[volunteer], StatusCode::CREATED).await;

    let entries = history(&server, volunteer).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].participated, "Upcoming");

    let titles = notification_titles(&server, volunteer).await;
    assert!(titles.contains(&"Assignment Removed".to_string()));
}

#[tokio::test]
async fn test_match_status_updates() {
    let server = TestServer::start().await.expect("Failed to start server");
    let skill = create_skill(&server, "General").await;
    let event_id = create_event(&server, &EventRequest::new("Park Day", &[skill])).await;
    let volunteer = register(&server).await;
    match_volunteers(&server, event_id, &[volunteer], StatusCode::CREATED).await;

    let path = format!("/api/v1/matches/{event_id}/{volunteer}/status");
    let response = server.put(&path, &json!({"status": "attended"})).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["participated"], "Attended");

    let response = server.put(&path, &json!({"status": "Upcoming"})).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_STATUS_TRANSITION")
        .await
        .unwrap();

    let response = server.put(&path, &json!({"status": "finished"})).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// History Tests
// ============================================================================

#[tokio::test]
async fn test_join_and_leave() {
    let server = TestServer::start().await.expect("Failed to start server");
    let skill = create_skill(&server, "General").await;
    let event_id = create_event(&server, &EventRequest::new("River Cleanup", &[skill])).await;
    let volunteer = register(&server).await;
    let join = JoinRequest {
        user_id: volunteer,
        event_id,
    };

    let response = server.post("/api/v1/history", &join).await.unwrap();
    let body: AttendanceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "joined");

    let response = server.post("/api/v1/history", &join).await.unwrap();
    let body: AttendanceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "already_attending");

    let entries = history(&server, volunteer).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].event_id, event_id);
    assert_eq!(entries[0].event_name, "River Cleanup");

    let path = format!("/api/v1/history/{volunteer}/{event_id}");
    let response = server.delete(&path).await.unwrap();
    let body: AttendanceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "left");

    let response = server.delete(&path).await.unwrap();
    let body: AttendanceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "not_attending");
    assert!(history(&server, volunteer).await.is_empty());
}

#[tokio::test]
async fn test_leave_after_attendance_conflicts() {
    let server = TestServer::start().await.expect("Failed to start server");
    let skill = create_skill(&server, "General").await;
    let event_id = create_event(&server, &EventRequest::new("River Cleanup", &[skill])).await;
    let volunteer = register(&server).await;
    match_volunteers(&server, event_id, &[volunteer], StatusCode::CREATED).await;

    let response = server
        .put(
            &format!("/api/v1/matches/{event_id}/{volunteer}/status"),
            &json!({"status": "Missed"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/history/{volunteer}/{event_id}"))
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "MATCH_NOT_UPCOMING")
        .await
        .unwrap();
    assert_eq!(history(&server, volunteer).await[0].participated, "Missed");
}

#[tokio::test]
async fn test_join_unknown_event() {
    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;
    let join = JoinRequest {
        user_id: volunteer,
        event_id: 4242,
    };
    let response = server.post("/api/v1/history", &join).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_EVENT")
        .await
        .unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_profile_save_and_fetch() {
    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;

    let response = server
        .post("/api/v1/profile", &valid_profile(volunteer))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/profile/{volunteer}"))
        .await
        .unwrap();
    let profile: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["full_name"], "Jane Volunteer");
    assert_eq!(profile["availability"], json!(["Saturday", "Sunday"]));

    let response = server.get("/api/v1/volunteers").await.unwrap();
    let volunteers: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(volunteers[0]["full_name"], "Jane Volunteer");
}

#[tokio::test]
async fn test_profile_reports_every_invalid_field() {
    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;

    let mut body = valid_profile(volunteer);
    body["state"] = json!("XX");
    body["zip_code"] = json!("123");
    body["availability"] = json!([]);

    let response = server.post("/api/v1/profile", &body).await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST, "INVALID_PROFILE")
        .await
        .unwrap();
    let details = error["details"].as_object().unwrap();
    assert!(details.contains_key("state"));
    assert!(details.contains_key("zip_code"));
    assert!(details.contains_key("availability"));
    assert_eq!(details.len(), 3);

    let response = server
        .get(&format!("/api/v1/profile/{volunteer}"))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_PROFILE")
        .await
        .unwrap();
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_event_cancellation_notifies_and_dismiss() {
    let server = TestServer::start().await.expect("Failed to start server");
    let skill = create_skill(&server, "General").await;
    let event_id = create_event(&server, &EventRequest::new("Cancelled Fair", &[skill])).await;
    let volunteer = register(&server).await;
    match_volunteers(&server, event_id, &[volunteer], StatusCode::CREATED).await;

    let response = server
        .delete(&format!("/api/v1/events/{event_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let titles = notification_titles(&server, volunteer).await;
    assert_eq!(titles[0], "Event Cancelled");
    assert!(history(&server, volunteer).await.is_empty());

    let response = server
        .delete(&format!("/api/v1/users/{volunteer}/notifications"))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["updated"], 2);

    let response = server
        .get(&format!("/api/v1/users/{volunteer}/notifications"))
        .await
        .unwrap();
    let notes: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(notes.iter().all(|n| !n.unread));

    let response = server
        .delete(&format!("/api/v1/notifications/{}", notes[0].id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/notifications/{}", notes[0].id))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_NOTIFICATION")
        .await
        .unwrap();
}

// ============================================================================
// User and Report Tests
// ============================================================================

#[tokio::test]
async fn test_volunteer_report() {
    let server = TestServer::start().await.expect("Failed to start server");
    let skill = create_skill(&server, "General").await;
    let sooner = create_event(
        &server,
        &EventRequest::new("Sooner", &[skill]).on(days_from_today(1)),
    )
    .await;
    let later = create_event(
        &server,
        &EventRequest::new("Later", &[skill]).on(days_from_today(10)),
    )
    .await;

    let busy = register(&server).await;
    let idle = register(&server).await;
    server
        .post("/api/v1/profile", &valid_profile(busy))
        .await
        .unwrap();
    match_volunteers(&server, later, &[busy], StatusCode::CREATED).await;
    match_volunteers(&server, sooner, &[busy], StatusCode::CREATED).await;

    let response = server.get("/api/v1/reports").await.unwrap();
    let rows: Vec<ReportRow> = assert_json(response, StatusCode::OK).await.unwrap();

    let busy_rows: Vec<&ReportRow> = rows.iter().filter(|r| r.user_id == busy).collect();
    assert_eq!(busy_rows.len(), 2);
    assert_eq!(busy_rows[0].event_name, "Sooner");
    assert_eq!(busy_rows[0].full_name, "Jane Volunteer");
    assert_eq!(busy_rows[0].event_date, days_from_today(1).to_string());
    assert_eq!(busy_rows[1].event_name, "Later");

    let idle_rows: Vec<&ReportRow> = rows.iter().filter(|r| r.user_id == idle).collect();
    assert_eq!(idle_rows.len(), 1);
    assert_eq!(idle_rows[0].event_name, "None");
    assert_eq!(idle_rows[0].participated, "None");
    assert!(idle_rows[0].email.starts_with("volunteer"));

    let response = server.get("/api/v1/reports?status=none").await.unwrap();
    let rows: Vec<ReportRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rows.iter().all(|r| r.user_id == idle));

    let response = server
        .get("/api/v1/reports?status=Upcoming&sort=event_name&order=desc")
        .await
        .unwrap();
    let rows: Vec<ReportRow> = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.event_name.as_str()).collect();
    assert_eq!(names, vec!["Sooner", "Later"]);

    let response = server.get("/api/v1/reports?sort=shoe_size").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_users_list_and_delete() {
    let server = TestServer::start().await.expect("Failed to start server");
    let volunteer = register(&server).await;

    let response = server.get("/api/v1/users").await.unwrap();
    let users: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert!(users[0].get("password").is_none());

    let response = server
        .delete(&format!("/api/v1/users/{volunteer}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/users/{volunteer}"))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_USER")
        .await
        .unwrap();
}

// ============================================================================
// PostgreSQL
// ============================================================================

#[tokio::test]
async fn test_core_scenario_on_postgres() {
    let Some(config) = postgres_config() else {
        return;
    };

    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");

    let skill = create_skill(&server, &format!("First Aid {}", unique_suffix())).await;
    let event_id = create_event(
        &server,
        &EventRequest::new(&format!("Beach Cleanup {}", unique_suffix()), &[skill]),
    )
    .await;
    let volunteer = register(&server).await;

    match_volunteers(&server, event_id, &[volunteer], StatusCode::CREATED).await;
    match_volunteers(&server, event_id, &[volunteer], StatusCode::OK).await;

    let entries = history(&server, volunteer).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].participated, "Upcoming");

    let response = server
        .delete(&format!("/api/v1/events/{event_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(history(&server, volunteer).await.is_empty());
}
