//! Chart feeds handed to the browser-side charting library as JSON.

use serde::Serialize;

use crate::models::aggregate::{self, CategoryCount, GroupMean};
use crate::models::filter::FilteredView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_counts(id: &'static str, title: &'static str, kind: ChartKind, counts: &[CategoryCount]) -> Self {
        ChartSeries {
            id,
            title,
            kind,
            labels: counts.iter().map(|c| c.label.clone()).collect(),
            values: counts.iter().map(|c| c.count as f64).collect(),
        }
    }

    pub fn from_means(id: &'static str, title: &'static str, kind: ChartKind, means: &[GroupMean]) -> Self {
        ChartSeries {
            id,
            title,
            kind,
            labels: means.iter().map(|m| m.key.clone()).collect(),
            values: means.iter().map(|m| (m.mean * 10.0).round() / 10.0).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Projects shown in the progress chart and its selector.
pub const PROJECT_CHART_LIMIT: usize = 8;
pub const DEPARTMENT_CHART_LIMIT: usize = 10;

/// Every chart on the dashboard. A chart over an empty view has no points
/// and is rendered as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub employees_by_facility: ChartSeries,
    pub completion_by_date: ChartSeries,
    pub project_status: ChartSeries,
    pub progress_by_project: ChartSeries,
    pub departments_by_headcount: ChartSeries,
    pub departments_by_completion: ChartSeries,
    pub weekly_ratings: ChartSeries,
}

impl DashboardCharts {
    pub fn build(view: &FilteredView<'_>) -> Self {
        let employees = &view.employees;
        let daily = &view.daily_reports;

        let progress_by_project = aggregate::top_n(
            &aggregate::mean_by(employees, |e| e.project.as_str(), |e| e.progress.as_f64()),
            PROJECT_CHART_LIMIT,
        );
        let departments_by_headcount = aggregate::top_n(
            &aggregate::count_by(employees, |e| e.department.as_str()),
            DEPARTMENT_CHART_LIMIT,
        );
        let departments_by_completion = aggregate::top_n(
            &aggregate::mean_by(daily, |r| r.department.as_str(), |r| r.completion.as_f64()),
            DEPARTMENT_CHART_LIMIT,
        );

        DashboardCharts {
            employees_by_facility: ChartSeries::from_counts(
                "employees-by-facility",
                "Employee Distribution by Facility",
                ChartKind::Pie,
                &aggregate::count_by(employees, |e| e.facility.as_str()),
            ),
            completion_by_date: ChartSeries::from_means(
                "completion-by-date",
                "Completion Rate by Date",
                ChartKind::Line,
                &aggregate::mean_by_key(daily, |r| r.date, |r| r.completion.as_f64()),
            ),
            project_status: ChartSeries::from_counts(
                "project-status",
                "Project Status Distribution",
                ChartKind::Pie,
                &aggregate::count_by(employees, |e| e.project_status.as_str()),
            ),
            progress_by_project: ChartSeries::from_means(
                "progress-by-project",
                "Average Progress by Project",
                ChartKind::Bar,
                &progress_by_project,
            ),
            departments_by_headcount: ChartSeries::from_counts(
                "departments-by-headcount",
                "Top 10 Departments by Employee Count",
                ChartKind::Bar,
                &departments_by_headcount,
            ),
            departments_by_completion: ChartSeries::from_means(
                "departments-by-completion",
                "Top 10 Departments by Performance",
                ChartKind::Bar,
                &departments_by_completion,
            ),
            weekly_ratings: ChartSeries::from_counts(
                "weekly-ratings",
                "Weekly Performance Ratings",
                ChartKind::Pie,
                &aggregate::count_by(&view.weekly_reports, |w| w.rating.as_str()),
            ),
        }
    }

    /// Page order.
    pub fn all(&self) -> [&ChartSeries; 7] {
        [
            &self.employees_by_facility,
            &self.completion_by_date,
            &self.project_status,
            &self.progress_by_project,
            &self.departments_by_headcount,
            &self.departments_by_completion,
            &self.weekly_ratings,
        ]
    }

    /// JSON safe to embed in a `<script type="application/json">` block.
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace('<', "\\u003c")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::{Employee, Percent};

    fn emp(project: &str, progress: u8) -> Employee {
        Employee {
            id: "0944000000".into(),
            name: "E".into(),
            facility: "Oncology Hospital".into(),
            department: "Nursing".into(),
            job_title: "Nurse".into(),
            project: project.into(),
            project_status: "Pilot".into(),
            task: "Running lab tests".into(),
            progress: Percent::clamped(progress),
        }
    }

    #[test]
    fn empty_view_gives_empty_series() {
        let charts = DashboardCharts::build(&FilteredView::default());
        assert!(charts.employees_by_facility.is_empty());
        assert!(charts.completion_by_date.is_empty());
        assert!(charts.progress_by_project.is_empty());
        assert!(charts.weekly_ratings.is_empty());
    }

    #[test]
    fn progress_by_project_is_descending_and_rounded() {
        let rows = [emp("A", 40), emp("B", 91), emp("B", 90), emp("A", 41)];
        let view = FilteredView { employees: rows.iter().collect(), ..Default::default() };
        let charts = DashboardCharts::build(&view);
        assert_eq!(charts.progress_by_project.labels, vec!["B", "A"]);
        assert_eq!(charts.progress_by_project.values, vec![90.5, 40.5]);
    }

    #[test]
    fn embedded_json_escapes_markup() {
        let rows = [emp("</script><b>", 50)];
        let view = FilteredView { employees: rows.iter().collect(), ..Default::default() };
        let json = DashboardCharts::build(&view).to_embedded_json();
        assert!(!json.contains('<'));
        assert!(json.contains("\\u003c/script>"));
    }
}
