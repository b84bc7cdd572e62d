//! Facility / department / date filter state and the filtered views it derives.

pub mod query;
pub mod search;

use chrono::{Duration, NaiveDate};

use crate::models::dataset::{DailyReport, Dataset, Employee, WeeklyReport};

pub use self::query::DashboardQuery;
pub use self::search::DirectorySearch;

/// Rows that belong to a facility and, optionally, a department.
pub trait Located {
    fn facility(&self) -> &str;
    fn department(&self) -> Option<&str>;
}

impl Located for Employee {
    fn facility(&self) -> &str {
        &self.facility
    }
    fn department(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl Located for DailyReport {
    fn facility(&self) -> &str {
        &self.facility
    }
    fn department(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl Located for WeeklyReport {
    fn facility(&self) -> &str {
        &self.facility
    }
    fn department(&self) -> Option<&str> {
        None
    }
}

/// Selected facilities and departments. An empty list admits everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub facilities: Vec<String>,
    pub departments: Vec<String>,
}

impl FilterSelection {
    pub fn admits_facility(&self, facility: &str) -> bool {
        self.facilities.is_empty() || self.facilities.iter().any(|f| f == facility)
    }

    pub fn admits_department(&self, department: &str) -> bool {
        self.departments.is_empty() || self.departments.iter().any(|d| d == department)
    }

    /// Rows without a department are filtered on facility only.
    pub fn admits<T: Located + ?Sized>(&self, row: &T) -> bool {
        self.admits_facility(row.facility())
            && row.department().is_none_or(|d| self.admits_department(d))
    }

    pub fn retain<'a, T: Located + 'a>(&self, rows: impl IntoIterator<Item = &'a T>) -> Vec<&'a T> {
        rows.into_iter().filter(|row| self.admits(*row)).collect()
    }

    pub fn apply<'a>(&self, data: &'a Dataset) -> FilteredView<'a> {
        FilteredView {
            employees: self.retain(&data.employees),
            daily_reports: self.retain(&data.daily_reports),
            weekly_reports: self.retain(&data.weekly_reports),
        }
    }

    /// Number of facilities in play: the selection, or the whole vocabulary.
    pub fn active_facility_count(&self, all: usize) -> usize {
        if self.facilities.is_empty() { all } else { self.facilities.len() }
    }
}

/// Borrowed rows of the three tables that pass the current filter.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    pub employees: Vec<&'a Employee>,
    pub daily_reports: Vec<&'a DailyReport>,
    pub weekly_reports: Vec<&'a WeeklyReport>,
}

/// Inclusive date range picked in the sidebar.
///
/// Collected and echoed back but not applied to any view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn last_week(today: NaiveDate) -> Self {
        DateRange { from: today - Duration::days(7), to: today }
    }

    /// Falls back to the last week when the bounds are inverted or in the future.
    pub fn checked(from: NaiveDate, to: NaiveDate, today: NaiveDate) -> Self {
        if from <= to && to <= today {
            DateRange { from, to }
        } else {
            DateRange::last_week(today)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::Percent;

    fn emp(id: &str, facility: &str, department: &str) -> Employee {
        Employee {
            id: id.into(),
            name: format!("Employee {id}"),
            facility: facility.into(),
            department: department.into(),
            job_title: "Nurse".into(),
            project: "Medical Staff Training".into(),
            project_status: "Planning".into(),
            task: "Reviewing protocols".into(),
            progress: Percent::clamped(50),
        }
    }

    #[test]
    fn empty_selection_admits_everything() {
        let sel = FilterSelection::default();
        let rows = vec![emp("1", "A", "X"), emp("2", "B", "Y")];
        assert_eq!(sel.retain(&rows).len(), 2);
    }

    #[test]
    fn facility_and_department_both_apply() {
        let sel = FilterSelection {
            facilities: vec!["A".into()],
            departments: vec!["X".into()],
        };
        let rows = vec![emp("1", "A", "X"), emp("2", "A", "Y"), emp("3", "B", "X")];
        let kept: Vec<&str> = sel.retain(&rows).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(kept, vec!["1"]);
    }

    #[test]
    fn weekly_rows_ignore_department_filter() {
        let sel = FilterSelection {
            facilities: vec!["A".into()],
            departments: vec!["Nowhere".into()],
        };
        let week = WeeklyReport {
            week_start: NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
            employee_id: "1".into(),
            name: "n".into(),
            facility: "A".into(),
            active_projects: 1,
            tasks_completed: 20,
            tasks_in_progress: 4,
            tasks_delayed: 0,
            rating: "Good".into(),
            attendance: Percent::clamped(90),
        };
        assert!(sel.admits(&week));
    }

    #[test]
    fn retain_is_idempotent() {
        let sel = FilterSelection { facilities: vec!["A".into()], departments: vec![] };
        let rows = vec![emp("1", "A", "X"), emp("2", "B", "X"), emp("3", "A", "Z")];
        let once = sel.retain(&rows);
        let twice = sel.retain(once.iter().copied());
        assert_eq!(once, twice);
    }

    #[test]
    fn active_facility_count_falls_back_to_all() {
        assert_eq!(FilterSelection::default().active_facility_count(22), 22);
        let sel = FilterSelection { facilities: vec!["A".into(), "B".into()], departments: vec![] };
        assert_eq!(sel.active_facility_count(22), 2);
    }

    #[test]
    fn inverted_date_range_falls_back() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let from = NaiveDate::from_ymd_opt(2025, 1, 19).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(DateRange::checked(from, to, today), DateRange::last_week(today));
        assert_eq!(DateRange::checked(to, from, today), DateRange { from: to, to: from });
    }
}
