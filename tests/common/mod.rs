//! Shared test infrastructure for model and HTTP tests.
//!
//! # Fixtures
//! - `synthetic_dataset()` - seeded 200/150/80 demo dataset
//! - `employee()` / `daily()` / `weekly()` - hand-built rows
//!
//! # HTTP helpers
//! - `with_session()` / `read_page()` carry the session cookie between requests
//! - `csrf_token()` pulls the token out of a rendered form

#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use chrono::{NaiveDate, NaiveTime};
use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;

use healthdash::SESSION_COOKIE;
use healthdash::models::dataset::{DailyReport, Dataset, Employee, GeneratorConfig, Percent, WeeklyReport};
use healthdash::state::AppState;

// ============================================================================
// DATASET FIXTURES
// ============================================================================

pub const SEED: u64 = 20250120;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 20).expect("valid date")
}

/// The default-sized demo dataset, reproducible across runs.
pub fn synthetic_dataset() -> Dataset {
    let mut rng = StdRng::seed_from_u64(SEED);
    Dataset::generate(&GeneratorConfig::new(today()), &mut rng)
}

pub fn employee(id: &str, facility: &str, department: &str, project: &str, progress: u8) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {id}"),
        facility: facility.to_string(),
        department: department.to_string(),
        job_title: "Nurse".to_string(),
        project: project.to_string(),
        project_status: "In progress".to_string(),
        task: "Patient care".to_string(),
        progress: Percent::clamped(progress),
    }
}

pub fn daily(emp: &Employee, completion: u8) -> DailyReport {
    DailyReport {
        date: today(),
        employee_id: emp.id.clone(),
        name: emp.name.clone(),
        facility: emp.facility.clone(),
        department: emp.department.clone(),
        project: emp.project.clone(),
        task: emp.task.clone(),
        task_progress: emp.progress,
        work_location: "Clinic".to_string(),
        start_time: NaiveTime::from_hms_opt(8, 0, 0).expect("valid time"),
        planned_task: "Ward rounds".to_string(),
        yesterday_status: "Completed".to_string(),
        challenge: "No challenges".to_string(),
        completion: Percent::clamped(completion),
        hours_worked: 8,
    }
}

pub fn weekly(emp: &Employee, attendance: u8) -> WeeklyReport {
    WeeklyReport {
        week_start: today(),
        employee_id: emp.id.clone(),
        name: emp.name.clone(),
        facility: emp.facility.clone(),
        active_projects: 2,
        tasks_completed: 20,
        tasks_in_progress: 5,
        tasks_delayed: 1,
        rating: "Good".to_string(),
        attendance: Percent::clamped(attendance),
    }
}

pub fn app_state() -> AppState {
    AppState::new(synthetic_dataset(), "Test Dashboard")
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl Page {
    pub fn panel_count(&self) -> usize {
        self.body.matches("class=\"detail-panel\"").count()
    }
}

/// Attach the current session cookie, if any.
pub fn with_session(req: TestRequest, jar: &Option<Cookie<'static>>) -> TestRequest {
    match jar {
        Some(cookie) => req.cookie(cookie.clone()),
        None => req,
    }
}

/// Read the response, keeping the newest session cookie in `jar`.
pub async fn read_page<B: MessageBody>(resp: ServiceResponse<B>, jar: &mut Option<Cookie<'static>>) -> Page {
    if let Some(cookie) = resp.response().cookies().find(|c| c.name() == SESSION_COOKIE) {
        *jar = Some(cookie.into_owned());
    }
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body = test::read_body(resp).await;
    Page { status, location, body: String::from_utf8_lossy(&body).into_owned() }
}

pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html)
        .map(|c| c[1].to_string())
        .expect("page has a CSRF token")
}
