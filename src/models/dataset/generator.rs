use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::types::{DailyReport, Employee, Percent, WeeklyReport};
use super::vocab;
use super::Dataset;

/// Table sizes and the reference date reports are dated back from.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub employees: usize,
    pub daily_reports: usize,
    pub weekly_reports: usize,
    pub today: NaiveDate,
}

impl GeneratorConfig {
    pub fn new(today: NaiveDate) -> Self {
        GeneratorConfig {
            employees: 200,
            daily_reports: 150,
            weekly_reports: 80,
            today,
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

fn percent_in<R: Rng + ?Sized>(rng: &mut R, low: u8, high: u8) -> Percent {
    Percent::clamped(rng.random_range(low..=high))
}

/// Syrian mobile number: a carrier prefix followed by six digits.
pub fn mobile_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut number = pick(rng, vocab::MOBILE_PREFIXES);
    for _ in 0..6 {
        let digit: u8 = rng.random_range(0..=9);
        number.push(char::from(b'0' + digit));
    }
    number
}

pub fn employee<R: Rng + ?Sized>(rng: &mut R) -> Employee {
    Employee {
        id: mobile_number(rng),
        name: pick(rng, vocab::EMPLOYEE_NAMES),
        facility: pick(rng, vocab::FACILITIES),
        department: pick(rng, vocab::DEPARTMENTS),
        job_title: pick(rng, vocab::JOB_TITLES),
        project: pick(rng, vocab::PROJECTS),
        project_status: pick(rng, vocab::PROJECT_STATUSES),
        task: pick(rng, vocab::TASKS),
        progress: percent_in(rng, 10, 95),
    }
}

pub fn daily_report<R: Rng + ?Sized>(rng: &mut R, emp: &Employee, today: NaiveDate) -> DailyReport {
    let date = today - Duration::days(rng.random_range(0..=30));
    let start_time = NaiveTime::from_hms_opt(rng.random_range(7..=9), rng.random_range(0..=59), 0)
        .unwrap_or(NaiveTime::MIN);
    DailyReport {
        date,
        employee_id: emp.id.clone(),
        name: emp.name.clone(),
        facility: emp.facility.clone(),
        department: emp.department.clone(),
        project: emp.project.clone(),
        task: emp.task.clone(),
        task_progress: emp.progress,
        work_location: pick(rng, vocab::WORK_LOCATIONS),
        start_time,
        planned_task: pick(rng, vocab::PLANNED_TASKS),
        yesterday_status: pick(rng, vocab::YESTERDAY_STATUSES),
        challenge: pick(rng, vocab::CHALLENGES),
        completion: percent_in(rng, 60, 100),
        hours_worked: rng.random_range(6..=12),
    }
}

pub fn weekly_report<R: Rng + ?Sized>(rng: &mut R, emp: &Employee, today: NaiveDate) -> WeeklyReport {
    WeeklyReport {
        week_start: today - Duration::weeks(rng.random_range(0..=8)),
        employee_id: emp.id.clone(),
        name: emp.name.clone(),
        facility: emp.facility.clone(),
        active_projects: rng.random_range(1..=5),
        tasks_completed: rng.random_range(15..=35),
        tasks_in_progress: rng.random_range(3..=10),
        tasks_delayed: rng.random_range(0..=5),
        rating: pick(rng, vocab::RATINGS),
        attendance: percent_in(rng, 85, 100),
    }
}

/// Build all three tables. Reports sample employees independently, so one
/// employee may have several reports or none.
pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Dataset {
    let employees: Vec<Employee> = (0..config.employees).map(|_| employee(rng)).collect();

    let mut daily_reports = Vec::with_capacity(config.daily_reports);
    let mut weekly_reports = Vec::with_capacity(config.weekly_reports);
    if !employees.is_empty() {
        for _ in 0..config.daily_reports {
            if let Some(emp) = employees.choose(rng) {
                daily_reports.push(daily_report(rng, emp, config.today));
            }
        }
        for _ in 0..config.weekly_reports {
            if let Some(emp) = employees.choose(rng) {
                weekly_reports.push(weekly_report(rng, emp, config.today));
            }
        }
    }

    Dataset::new(employees, daily_reports, weekly_reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    #[test]
    fn mobile_number_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = mobile_number(&mut rng);
            assert_eq!(n.len(), 10);
            assert!(n.chars().all(|c| c.is_ascii_digit()));
            assert!(vocab::MOBILE_PREFIXES.contains(&&n[..4]));
        }
    }

    #[test]
    fn generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = generate(&GeneratorConfig::new(today()), &mut rng);
        assert_eq!(data.employees.len(), 200);
        assert_eq!(data.daily_reports.len(), 150);
        assert_eq!(data.weekly_reports.len(), 80);

        for e in &data.employees {
            assert!((10..=95).contains(&e.progress.value()));
            assert!(vocab::is_facility(&e.facility));
        }
        let earliest = today() - Duration::days(30);
        for r in &data.daily_reports {
            assert!(r.date <= today() && r.date >= earliest);
            assert!((60..=100).contains(&r.completion.value()));
            assert!((6..=12).contains(&r.hours_worked));
        }
        for w in &data.weekly_reports {
            assert!((85..=100).contains(&w.attendance.value()));
            assert!(w.tasks_delayed <= 5);
            assert!(w.week_start >= today() - Duration::weeks(8));
        }
    }

    #[test]
    fn reports_reference_generated_employees() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = generate(&GeneratorConfig::new(today()), &mut rng);
        for r in &data.daily_reports {
            assert!(data.employees.iter().any(|e| e.id == r.employee_id));
        }
    }

    #[test]
    fn no_employees_means_no_reports() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GeneratorConfig { employees: 0, ..GeneratorConfig::new(today()) };
        let data = generate(&config, &mut rng);
        assert!(data.daily_reports.is_empty());
        assert!(data.weekly_reports.is_empty());
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = generate(&GeneratorConfig::new(today()), &mut StdRng::seed_from_u64(99));
        let b = generate(&GeneratorConfig::new(today()), &mut StdRng::seed_from_u64(99));
        assert_eq!(a.employees, b.employees);
        assert_eq!(a.daily_reports, b.daily_reports);
    }
}
