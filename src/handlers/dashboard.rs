use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Local;

use crate::errors::{AppError, render};
use crate::models::dashboard;
use crate::models::filter::DashboardQuery;
use crate::session::load_selection;
use crate::state::AppState;
use crate::templates_structs::{DashboardTemplate, PageContext};

/// One full pass: parse controls, filter, aggregate, render.
pub async fn index(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let data = &state.dataset;
    let query = DashboardQuery::parse(req.query_string(), data, Local::now().date_naive());
    let selection = load_selection(&session);

    let ctx = PageContext::build(&session, &state.app_name)?;
    let page = dashboard::build(data, &query, &selection);

    let tmpl = DashboardTemplate::new(ctx, data, &query, &selection, page);
    render(tmpl)
}
