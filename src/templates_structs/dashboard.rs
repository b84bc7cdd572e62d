use askama::Template;

use super::PageContext;
use crate::models::alert::AlertCategory;
use crate::models::dashboard::DashboardData;
use crate::models::dataset::Dataset;
use crate::models::filter::DashboardQuery;
use crate::models::selection::SelectionState;

/// An entry of a `<select>` or checkbox list.
pub struct FormOption {
    pub value: String,
    pub selected: bool,
}

fn options<'s>(values: impl IntoIterator<Item = &'s str>, is_selected: impl Fn(&str) -> bool) -> Vec<FormOption> {
    values
        .into_iter()
        .map(|v| FormOption { value: v.to_string(), selected: is_selected(v) })
        .collect()
}

/// One of the three alert buttons.
pub struct AlertButton {
    pub key: &'static str,
    pub label: &'static str,
    pub headline: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub ctx: PageContext,
    pub page: DashboardData<'a>,
    /// Current filter query, re-encoded; POST forms send it back so the
    /// redirect lands on the same view.
    pub return_to: String,
    pub facilities: Vec<FormOption>,
    pub departments: Vec<FormOption>,
    pub date_from: String,
    pub date_to: String,
    pub search_term: String,
    pub project_filter: Vec<FormOption>,
    pub status_filter: Vec<FormOption>,
    pub chart_projects: Vec<FormOption>,
    pub alert_buttons: Vec<AlertButton>,
    pub charts_json: String,
    pub showing_label: String,
}

impl<'a> DashboardTemplate<'a> {
    pub fn new(
        ctx: PageContext,
        data: &Dataset,
        query: &DashboardQuery,
        selection: &SelectionState,
        page: DashboardData<'a>,
    ) -> Self {
        let filters = &query.selection;
        let search = &query.search;
        Self {
            return_to: query.to_query_string(),
            facilities: options(data.facilities().iter().copied(), |f| filters.facilities.iter().any(|s| s == f)),
            departments: options(data.departments().iter().map(String::as_str), |d| {
                filters.departments.iter().any(|s| s == d)
            }),
            date_from: query.date_range.from.format("%Y-%m-%d").to_string(),
            date_to: query.date_range.to.format("%Y-%m-%d").to_string(),
            search_term: search.term.clone(),
            project_filter: options(page.project_options.iter().map(String::as_str), |p| {
                search.project.as_deref() == Some(p)
            }),
            status_filter: options(page.status_options.iter().map(String::as_str), |s| {
                search.status.as_deref() == Some(s)
            }),
            chart_projects: options(page.chart_projects.iter().map(String::as_str), |p| selection.is_project_selected(p)),
            alert_buttons: AlertCategory::ALL
                .into_iter()
                .map(|c| AlertButton {
                    key: c.key(),
                    label: c.button_label(),
                    headline: c.headline(),
                    active: selection.alert == Some(c),
                })
                .collect(),
            charts_json: page.charts.to_embedded_json(),
            showing_label: format!("Showing {} of {} employees", page.directory.len(), page.directory_total),
            ctx,
            page,
        }
    }
}
