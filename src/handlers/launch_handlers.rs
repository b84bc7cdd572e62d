use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::session::{csrf, set_flash};
use crate::state::AppState;
use crate::templates_structs::{LaunchTemplate, PageContext};

pub const LAUNCH_MESSAGE: &str = "Dashboard launched successfully!";

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn index(state: web::Data<AppState>, session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &state.app_name)?;
    render(LaunchTemplate { ctx })
}

/// The launch button is cosmetic: it only confirms with a flash message.
pub async fn launch(session: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    set_flash(&session, LAUNCH_MESSAGE)?;
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish())
}
