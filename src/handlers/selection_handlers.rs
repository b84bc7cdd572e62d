use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::back_to_dashboard;
use crate::errors::AppError;
use crate::models::alert::AlertCategory;
use crate::models::selection::SelectionAction;
use crate::session::{csrf, load_selection, store_selection};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProjectForm {
    pub csrf_token: String,
    #[serde(default)]
    pub return_to: String,
    /// Empty when the selector's placeholder is chosen.
    #[serde(default)]
    pub project: String,
}

#[derive(Deserialize)]
pub struct AlertForm {
    pub csrf_token: String,
    #[serde(default)]
    pub return_to: String,
    pub category: String,
}

#[derive(Deserialize)]
pub struct CloseForm {
    pub csrf_token: String,
    #[serde(default)]
    pub return_to: String,
}

fn apply(session: &Session, action: SelectionAction) -> Result<(), AppError> {
    let next = load_selection(session).apply(action);
    store_selection(session, &next)
}

pub async fn select_project(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<ProjectForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();
    apply(&session, SelectionAction::SelectProject(form.project))?;
    Ok(back_to_dashboard(&state, &form.return_to))
}

pub async fn close_project(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<CloseForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    apply(&session, SelectionAction::CloseProject)?;
    Ok(back_to_dashboard(&state, &form.return_to))
}

pub async fn select_alert(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<AlertForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let category = AlertCategory::parse(&form.category)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown alert category: {}", form.category)))?;
    apply(&session, SelectionAction::SelectAlert(category))?;
    Ok(back_to_dashboard(&state, &form.return_to))
}

pub async fn close_alert(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<CloseForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    apply(&session, SelectionAction::CloseAlert)?;
    Ok(back_to_dashboard(&state, &form.return_to))
}
