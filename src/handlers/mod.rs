use actix_web::{HttpResponse, web};

pub mod contact_handlers;
pub mod dashboard;
pub mod launch_handlers;
pub mod selection_handlers;

use crate::models::filter::DashboardQuery;
use crate::state::AppState;

/// Register every route; shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(actix_files::Files::new("/static", "./static"))
        .route("/", web::get().to(launch_handlers::index))
        .route("/launch", web::post().to(launch_handlers::launch))
        .route("/dashboard", web::get().to(dashboard::index))
        .route("/dashboard/project", web::post().to(selection_handlers::select_project))
        .route("/dashboard/project/close", web::post().to(selection_handlers::close_project))
        .route("/dashboard/alert", web::post().to(selection_handlers::select_alert))
        .route("/dashboard/alert/close", web::post().to(selection_handlers::close_alert))
        .route("/dashboard/contact", web::post().to(contact_handlers::contact))
        .default_service(web::to(not_found));
}

pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Redirect back to the dashboard. `return_to` is re-parsed so the target
/// is always `/dashboard` with a well-formed filter query.
pub(crate) fn back_to_dashboard(state: &AppState, return_to: &str) -> HttpResponse {
    let today = chrono::Local::now().date_naive();
    let query = DashboardQuery::parse(return_to, &state.dataset, today);
    HttpResponse::SeeOther()
        .insert_header(("Location", format!("/dashboard?{}", query.to_query_string())))
        .finish()
}
