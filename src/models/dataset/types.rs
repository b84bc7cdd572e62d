use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/// A percentage in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Percent(value))
    }

    pub fn clamped(value: u8) -> Self {
        Percent(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Phone-number-shaped identifier.
    pub id: String,
    pub name: String,
    pub facility: String,
    pub department: String,
    pub job_title: String,
    pub project: String,
    pub project_status: String,
    pub task: String,
    pub progress: Percent,
}

/// One employee's report for one day.
/// Facility, department, project and task are copied from the employee
/// at generation time and are not kept in sync afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub employee_id: String,
    pub name: String,
    pub facility: String,
    pub department: String,
    pub project: String,
    pub task: String,
    pub task_progress: Percent,
    pub work_location: String,
    pub start_time: NaiveTime,
    pub planned_task: String,
    pub yesterday_status: String,
    pub challenge: String,
    pub completion: Percent,
    pub hours_worked: u8,
}

impl DailyReport {
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_time_label(&self) -> String {
        self.start_time.format("%-H:%M").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    pub week_start: NaiveDate,
    pub employee_id: String,
    pub name: String,
    pub facility: String,
    pub active_projects: u8,
    pub tasks_completed: u8,
    pub tasks_in_progress: u8,
    pub tasks_delayed: u8,
    pub rating: String,
    pub attendance: Percent,
}
