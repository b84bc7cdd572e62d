use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::back_to_dashboard;
use crate::errors::AppError;
use crate::models::contact::{ContactKind, ContactRequest};
use crate::session::{csrf, set_flash};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ContactForm {
    pub csrf_token: String,
    #[serde(default)]
    pub return_to: String,
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
}

/// Call and resolve buttons change no data; they confirm with a flash.
pub async fn contact(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();
    let kind = ContactKind::parse(&form.kind)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown action: {}", form.kind)))?;

    let request = ContactRequest { kind, name: form.name, phone: form.phone, subject: form.subject };
    log::info!("Contact action {}: {}", kind.key(), request.flash_message());
    set_flash(&session, &request.flash_message())?;
    Ok(back_to_dashboard(&state, &form.return_to))
}
