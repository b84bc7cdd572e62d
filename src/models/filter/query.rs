use chrono::NaiveDate;

use super::{DateRange, DirectorySearch, FilterSelection};
use crate::models::dataset::{Dataset, vocab};

/// Number of facilities and departments pre-selected on a first visit.
pub const DEFAULT_PICKS: usize = 5;

/// Everything the dashboard's controls submit, parsed from the GET query.
///
/// Multi-selects arrive as repeated keys (`facility=a&facility=b`). The
/// `applied` marker distinguishes "submitted with nothing selected" (all)
/// from a first visit (defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    pub applied: bool,
    pub selection: FilterSelection,
    pub date_range: DateRange,
    pub search: DirectorySearch,
}

impl DashboardQuery {
    pub fn defaults(data: &Dataset, today: NaiveDate) -> Self {
        DashboardQuery {
            applied: false,
            selection: FilterSelection {
                facilities: data.facilities().iter().take(DEFAULT_PICKS).map(|f| f.to_string()).collect(),
                departments: data.departments().iter().take(DEFAULT_PICKS).cloned().collect(),
            },
            date_range: DateRange::last_week(today),
            search: DirectorySearch::default(),
        }
    }

    /// Unknown facilities and departments are dropped; a malformed query
    /// yields the defaults.
    pub fn parse(raw: &str, data: &Dataset, today: NaiveDate) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).unwrap_or_default();
        let mut query = DashboardQuery::defaults(data, today);

        let applied = pairs.iter().any(|(k, _)| k == "applied");
        if applied {
            query.applied = true;
            query.selection = FilterSelection::default();
        }

        let mut from = None;
        let mut to = None;
        for (key, value) in pairs {
            match key.as_str() {
                "facility" if applied => {
                    if vocab::is_facility(&value) && !query.selection.facilities.contains(&value) {
                        query.selection.facilities.push(value);
                    }
                }
                "department" if applied => {
                    if data.departments().contains(&value) && !query.selection.departments.contains(&value) {
                        query.selection.departments.push(value);
                    }
                }
                "from" => from = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok(),
                "to" => to = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok(),
                "q" => query.search.term = value.trim().to_string(),
                "project" if !value.is_empty() => query.search.project = Some(value),
                "status" if !value.is_empty() => query.search.status = Some(value),
                _ => {}
            }
        }

        if let (Some(from), Some(to)) = (from, to) {
            query.date_range = DateRange::checked(from, to, today);
        }
        query
    }

    /// Re-encode as a query string that `parse` reads back to the same value.
    pub fn to_query_string(&self) -> String {
        let from = self.date_range.from.format("%Y-%m-%d").to_string();
        let to = self.date_range.to.format("%Y-%m-%d").to_string();

        let mut pairs: Vec<(&str, &str)> = vec![("applied", "1")];
        pairs.extend(self.selection.facilities.iter().map(|f| ("facility", f.as_str())));
        pairs.extend(self.selection.departments.iter().map(|d| ("department", d.as_str())));
        pairs.push(("from", from.as_str()));
        pairs.push(("to", to.as_str()));
        if !self.search.term.is_empty() {
            pairs.push(("q", self.search.term.as_str()));
        }
        if let Some(project) = &self.search.project {
            pairs.push(("project", project.as_str()));
        }
        if let Some(status) = &self.search.status {
            pairs.push(("status", status.as_str()));
        }
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::{Employee, Percent};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    fn data() -> Dataset {
        let depts = ["Emergency", "Radiology", "Pharmacy", "Nursing", "Laboratory", "Security", "Reception"];
        let employees = depts
            .iter()
            .enumerate()
            .map(|(i, d)| Employee {
                id: format!("09440000{i:02}"),
                name: format!("E{i}"),
                facility: vocab::FACILITIES[i].into(),
                department: d.to_string(),
                job_title: "Nurse".into(),
                project: "Medical Quality Program".into(),
                project_status: "Pilot".into(),
                task: "Running lab tests".into(),
                progress: Percent::clamped(60),
            })
            .collect();
        Dataset::new(employees, vec![], vec![])
    }

    #[test]
    fn first_visit_uses_defaults() {
        let q = DashboardQuery::parse("", &data(), today());
        assert!(!q.applied);
        assert_eq!(q.selection.facilities.len(), DEFAULT_PICKS);
        assert_eq!(q.selection.facilities[0], vocab::FACILITIES[0]);
        assert_eq!(q.selection.departments, vec!["Emergency", "Radiology", "Pharmacy", "Nursing", "Laboratory"]);
        assert_eq!(q.date_range, DateRange::last_week(today()));
    }

    #[test]
    fn applied_with_nothing_selected_means_all() {
        let q = DashboardQuery::parse("applied=1", &data(), today());
        assert!(q.applied);
        assert!(q.selection.facilities.is_empty());
        assert!(q.selection.departments.is_empty());
    }

    #[test]
    fn repeated_keys_and_unknown_values() {
        let raw = "applied=1&facility=Oncology+Hospital&facility=Nowhere&facility=Oncology+Hospital&department=Radiology&department=Bogus";
        let q = DashboardQuery::parse(raw, &data(), today());
        assert_eq!(q.selection.facilities, vec!["Oncology Hospital"]);
        assert_eq!(q.selection.departments, vec!["Radiology"]);
    }

    #[test]
    fn search_controls_are_parsed() {
        let raw = "q=+amal+&project=Maternal+Care+Project&status=";
        let q = DashboardQuery::parse(raw, &data(), today());
        assert_eq!(q.search.term, "amal");
        assert_eq!(q.search.project.as_deref(), Some("Maternal Care Project"));
        assert_eq!(q.search.status, None);
    }

    #[test]
    fn query_string_round_trips() {
        let raw = "applied=1&facility=Oncology+Hospital&department=Radiology&from=2025-01-01&to=2025-01-15&q=sam";
        let q = DashboardQuery::parse(raw, &data(), today());
        let again = DashboardQuery::parse(&q.to_query_string(), &data(), today());
        assert_eq!(q, again);
    }

    #[test]
    fn malformed_dates_keep_default_range() {
        let q = DashboardQuery::parse("from=yesterday&to=2025-01-15", &data(), today());
        assert_eq!(q.date_range, DateRange::last_week(today()));
    }
}
