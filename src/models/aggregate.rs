//! Counts, means and rankings over filtered rows. Nothing here mutates its input.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::models::filter::{FilterSelection, FilteredView};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub key: String,
    pub mean: f64,
    /// Rows that contributed to the mean; never zero.
    pub count: usize,
}

impl GroupMean {
    pub fn mean_label(&self) -> String {
        format!("{:.1}%", self.mean)
    }
}

/// Value an entry is ranked on by `top_n` / `bottom_n`.
pub trait Ranked {
    fn score(&self) -> f64;
}

impl Ranked for CategoryCount {
    fn score(&self) -> f64 {
        self.count as f64
    }
}

impl Ranked for GroupMean {
    fn score(&self) -> f64 {
        self.mean
    }
}

/// Category → count, most frequent first. Ties keep first-appearance order.
pub fn count_by<T, K>(rows: &[T], key: K) -> Vec<CategoryCount>
where
    K: Fn(&T) -> &str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for row in rows {
        let label = key(row);
        match index.get(label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label, counts.len());
                counts.push(CategoryCount { label: label.to_string(), count: 1 });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Group key → mean of `value`, ordered by key. Empty input gives an empty result.
pub fn mean_by<T, K, V>(rows: &[T], key: K, value: V) -> Vec<GroupMean>
where
    K: Fn(&T) -> &str,
    V: Fn(&T) -> f64,
{
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(key(row)).or_insert((0.0, 0));
        entry.0 += value(row);
        entry.1 += 1;
    }
    collect_means(groups)
}

/// `mean_by` for keys computed by value, such as dates.
pub fn mean_by_key<T, G, K, V>(rows: &[T], key: K, value: V) -> Vec<GroupMean>
where
    G: Ord + fmt::Display,
    K: Fn(&T) -> G,
    V: Fn(&T) -> f64,
{
    let mut groups: BTreeMap<G, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(key(row)).or_insert((0.0, 0));
        entry.0 += value(row);
        entry.1 += 1;
    }
    collect_means(groups)
}

fn collect_means<G: fmt::Display>(groups: BTreeMap<G, (f64, usize)>) -> Vec<GroupMean> {
    groups
        .into_iter()
        .map(|(key, (sum, count))| GroupMean {
            key: key.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect()
}

pub fn mean<T, V>(rows: &[T], value: V) -> Option<f64>
where
    V: Fn(&T) -> f64,
{
    if rows.is_empty() {
        return None;
    }
    let sum: f64 = rows.iter().map(value).sum();
    Some(sum / rows.len() as f64)
}

pub fn distinct_count<T, K>(rows: &[T], key: K) -> usize
where
    K: Fn(&T) -> &str,
{
    let mut seen: Vec<&str> = Vec::new();
    for row in rows {
        let k = key(row);
        if !seen.contains(&k) {
            seen.push(k);
        }
    }
    seen.len()
}

/// The `n` highest-scoring entries. Stable: ties keep input order.
pub fn top_n<T: Ranked + Clone>(items: &[T], n: usize) -> Vec<T> {
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
    ranked.truncate(n);
    ranked
}

/// The `n` lowest-scoring entries. Stable: ties keep input order.
pub fn bottom_n<T: Ranked + Clone>(items: &[T], n: usize) -> Vec<T> {
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| a.score().total_cmp(&b.score()));
    ranked.truncate(n);
    ranked
}

/// Headline numbers shown as metric tiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub employee_count: usize,
    pub active_facilities: usize,
    pub mean_completion: f64,
    pub daily_report_count: usize,
    pub weekly_report_count: usize,
    pub mean_attendance: f64,
    pub delayed_tasks: usize,
}

impl DashboardSummary {
    pub fn compute(view: &FilteredView<'_>, selection: &FilterSelection, facility_total: usize) -> Self {
        DashboardSummary {
            employee_count: view.employees.len(),
            active_facilities: selection.active_facility_count(facility_total),
            mean_completion: mean(&view.daily_reports, |r| r.completion.as_f64()).unwrap_or(0.0),
            daily_report_count: view.daily_reports.len(),
            weekly_report_count: view.weekly_reports.len(),
            mean_attendance: mean(&view.weekly_reports, |w| w.attendance.as_f64()).unwrap_or(0.0),
            delayed_tasks: view.weekly_reports.iter().map(|w| usize::from(w.tasks_delayed)).sum(),
        }
    }

    pub fn mean_completion_label(&self) -> String {
        format!("{:.1}%", self.mean_completion)
    }

    pub fn mean_attendance_label(&self) -> String {
        format!("{:.1}%", self.mean_attendance)
    }
}
