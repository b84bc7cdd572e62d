// Template context structures for Askama templates, one module per page.

use actix_session::Session;
use chrono::Local;

use crate::errors::AppError;
use crate::session::{csrf, take_flash};

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub now_label: String,
}

impl PageContext {
    pub fn build(session: &Session, app_name: &str) -> Result<Self, AppError> {
        let csrf_token = csrf::get_or_create_token(session)?;
        Ok(Self {
            app_name: app_name.to_string(),
            flash: take_flash(session),
            csrf_token,
            now_label: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        })
    }
}

mod dashboard;
mod launch;

pub use dashboard::*;
pub use launch::*;
