//! In-memory demo dataset: employees, daily reports and weekly reports.
//!
//! Generated once at start-up and shared read-only for the process lifetime.

pub mod generator;
pub mod types;
pub mod vocab;

use std::collections::HashSet;

use rand::Rng;

pub use self::generator::GeneratorConfig;
pub use self::types::{DailyReport, Employee, Percent, WeeklyReport};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub daily_reports: Vec<DailyReport>,
    pub weekly_reports: Vec<WeeklyReport>,
    departments: Vec<String>,
}

impl Dataset {
    pub fn new(
        employees: Vec<Employee>,
        daily_reports: Vec<DailyReport>,
        weekly_reports: Vec<WeeklyReport>,
    ) -> Self {
        let departments = {
            let mut seen = HashSet::new();
            employees
                .iter()
                .filter(|e| seen.insert(e.department.as_str()))
                .map(|e| e.department.clone())
                .collect()
        };
        Dataset { employees, daily_reports, weekly_reports, departments }
    }

    pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Self {
        generator::generate(config, rng)
    }

    /// The full facility vocabulary, in its canonical order.
    pub fn facilities(&self) -> &'static [&'static str] {
        vocab::FACILITIES
    }

    /// Departments in order of first appearance in the employee table.
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    /// The last daily report filed for an employee, in table order.
    pub fn latest_daily_for(&self, employee_id: &str) -> Option<&DailyReport> {
        self.daily_reports.iter().rev().find(|r| r.employee_id == employee_id)
    }
}
