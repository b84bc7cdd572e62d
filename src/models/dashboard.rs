use crate::models::aggregate::{self, DashboardSummary};
use crate::models::alert::AlertPanel;
use crate::models::charts::{DashboardCharts, PROJECT_CHART_LIMIT};
use crate::models::contact::{ActionButton, ContactRequest};
use crate::models::dataset::{DailyReport, Dataset, Employee};
use crate::models::filter::DashboardQuery;
use crate::models::project_detail::{self, ProjectDetail};
use crate::models::selection::SelectionState;

// ---------- Types ----------

/// Projects with a mean progress below this are flagged critical.
pub const CRITICAL_PROGRESS: f64 = 50.0;
pub const RECENT_REPORT_LIMIT: usize = 20;
pub const TOP_PROJECT_LIMIT: usize = 10;
pub const ATTENTION_PROJECT_LIMIT: usize = 5;

/// One row in the "top active" / "needs attention" project lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub project: String,
    pub member_count: usize,
    pub mean_progress: f64,
}

impl ProjectSummary {
    pub fn is_critical(&self) -> bool {
        self.mean_progress < CRITICAL_PROGRESS
    }

    pub fn mean_progress_label(&self) -> String {
        format!("{:.1}%", self.mean_progress)
    }
}

/// The project panel is shown whenever a project is selected; `detail` is
/// `None` when the current filters leave the project with no team.
#[derive(Debug, Clone)]
pub struct ProjectPanel<'a> {
    pub project: String,
    pub detail: Option<ProjectDetail<'a>>,
}

/// One employee in the searchable directory table.
#[derive(Debug, Clone)]
pub struct DirectoryRow<'a> {
    pub employee: &'a Employee,
    pub call: ActionButton,
}

impl<'a> DirectoryRow<'a> {
    pub fn new(employee: &'a Employee) -> Self {
        DirectoryRow { employee, call: ActionButton::new("Call", ContactRequest::call(&employee.name, &employee.id)) }
    }
}

/// Everything the dashboard page renders for one request.
#[derive(Debug, Clone)]
pub struct DashboardData<'a> {
    pub summary: DashboardSummary,
    pub charts: DashboardCharts,
    pub has_employees: bool,
    pub has_daily_reports: bool,
    pub has_weekly_reports: bool,
    pub recent_reports: Vec<&'a DailyReport>,
    pub top_projects: Vec<ProjectSummary>,
    pub attention_projects: Vec<ProjectSummary>,
    /// Options of the chart project selector, best progress first.
    pub chart_projects: Vec<String>,
    pub directory: Vec<DirectoryRow<'a>>,
    pub directory_total: usize,
    pub project_options: Vec<String>,
    pub status_options: Vec<String>,
    pub project_panel: Option<ProjectPanel<'a>>,
    pub alert_panel: Option<AlertPanel>,
}

// ---------- Queries ----------

/// Most recent reports first; same-day reports keep table order.
pub fn recent_reports<'a>(reports: &[&'a DailyReport], limit: usize) -> Vec<&'a DailyReport> {
    let mut recent = reports.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

/// Projects with the most members, each with its mean progress.
pub fn top_projects(employees: &[&Employee], limit: usize) -> Vec<ProjectSummary> {
    let means = aggregate::mean_by(employees, |e| e.project.as_str(), |e| e.progress.as_f64());
    aggregate::top_n(&aggregate::count_by(employees, |e| e.project.as_str()), limit)
        .into_iter()
        .map(|c| ProjectSummary {
            mean_progress: means.iter().find(|m| m.key == c.label).map_or(0.0, |m| m.mean),
            project: c.label,
            member_count: c.count,
        })
        .collect()
}

/// Projects with the lowest mean progress.
pub fn attention_projects(employees: &[&Employee], limit: usize) -> Vec<ProjectSummary> {
    let means = aggregate::mean_by(employees, |e| e.project.as_str(), |e| e.progress.as_f64());
    aggregate::bottom_n(&means, limit)
        .into_iter()
        .map(|m| ProjectSummary { project: m.key, member_count: m.count, mean_progress: m.mean })
        .collect()
}

fn distinct_in_order<'e>(employees: &[&'e Employee], field: impl Fn(&'e Employee) -> &'e str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for &e in employees {
        let value = field(e);
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Evaluate the whole dashboard for one set of controls and selection.
pub fn build<'a>(data: &'a Dataset, query: &DashboardQuery, selection: &SelectionState) -> DashboardData<'a> {
    let view = query.selection.apply(data);
    let summary = DashboardSummary::compute(&view, &query.selection, data.facilities().len());
    let charts = DashboardCharts::build(&view);

    let chart_projects = charts.progress_by_project.labels.iter().take(PROJECT_CHART_LIMIT).cloned().collect();
    let directory = query.search.apply(&view.employees).into_iter().map(DirectoryRow::new).collect();

    let project_panel = selection.project.as_ref().map(|project| ProjectPanel {
        project: project.clone(),
        detail: project_detail::lookup(project, &view.employees, data),
    });

    DashboardData {
        summary,
        has_employees: !view.employees.is_empty(),
        has_daily_reports: !view.daily_reports.is_empty(),
        has_weekly_reports: !view.weekly_reports.is_empty(),
        recent_reports: recent_reports(&view.daily_reports, RECENT_REPORT_LIMIT),
        top_projects: top_projects(&view.employees, TOP_PROJECT_LIMIT),
        attention_projects: attention_projects(&view.employees, ATTENTION_PROJECT_LIMIT),
        chart_projects,
        directory_total: view.employees.len(),
        project_options: distinct_in_order(&view.employees, |e| e.project.as_str()),
        status_options: distinct_in_order(&view.employees, |e| e.project_status.as_str()),
        directory,
        project_panel,
        alert_panel: selection.alert.map(AlertPanel::for_category),
        charts,
    }
}
