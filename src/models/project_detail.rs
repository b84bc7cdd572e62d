use crate::models::aggregate::{self, CategoryCount};
use crate::models::contact::{ActionButton, ContactRequest};
use crate::models::dataset::{Dataset, Employee, vocab};
use crate::models::directory::{self, Contact};

/// Colour band for a progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    High,
    Medium,
    Low,
}

impl ProgressBand {
    pub fn of(progress: u8) -> Self {
        match progress {
            75..=u8::MAX => ProgressBand::High,
            50..=74 => ProgressBand::Medium,
            _ => ProgressBand::Low,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ProgressBand::High => "band-high",
            ProgressBand::Medium => "band-medium",
            ProgressBand::Low => "band-low",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeamMember<'a> {
    pub employee: &'a Employee,
    pub work_location: String,
    /// Latest reported challenge, if any.
    pub challenge: Option<String>,
    pub band: ProgressBand,
}

impl TeamMember<'_> {
    /// Employee identifiers double as their mobile numbers.
    pub fn call_button(&self) -> ActionButton {
        ActionButton::new("Call", ContactRequest::call(&self.employee.name, &self.employee.id))
    }
}

#[derive(Debug, Clone)]
pub struct FacilityGroup<'a> {
    pub facility: String,
    pub manager: Contact,
    pub members: Vec<TeamMember<'a>>,
}

impl FacilityGroup<'_> {
    pub fn call_manager_button(&self) -> ActionButton {
        ActionButton::new("Call manager", ContactRequest::call(self.manager.name, self.manager.phone))
    }
}

/// Drill-down for the selected project over the filtered employees.
#[derive(Debug, Clone)]
pub struct ProjectDetail<'a> {
    pub project: String,
    pub team_size: usize,
    pub mean_progress: f64,
    pub facility_count: usize,
    pub department_count: usize,
    pub groups: Vec<FacilityGroup<'a>>,
    pub progress_distribution: Vec<CategoryCount>,
    pub departments: Vec<CategoryCount>,
}

impl ProjectDetail<'_> {
    pub fn mean_progress_label(&self) -> String {
        format!("{:.1}%", self.mean_progress)
    }
}

const PROGRESS_BUCKETS: [(&str, u8, u8); 4] = [
    ("0-25%", 0, 25),
    ("26-50%", 26, 50),
    ("51-75%", 51, 75),
    ("76-100%", 76, 100),
];

fn progress_distribution(team: &[&Employee]) -> Vec<CategoryCount> {
    PROGRESS_BUCKETS
        .iter()
        .map(|(label, low, high)| CategoryCount {
            label: label.to_string(),
            count: team.iter().filter(|e| (*low..=*high).contains(&e.progress.value())).count(),
        })
        .collect()
}

fn team_member<'a>(employee: &'a Employee, data: &Dataset) -> TeamMember<'a> {
    let latest = data.latest_daily_for(&employee.id);
    TeamMember {
        employee,
        work_location: latest
            .map(|r| r.work_location.clone())
            .unwrap_or_else(|| vocab::DEFAULT_WORK_LOCATION.to_string()),
        challenge: latest
            .map(|r| r.challenge.clone())
            .filter(|c| c.as_str() != vocab::NO_CHALLENGES),
        band: ProgressBand::of(employee.progress.value()),
    }
}

/// `None` when no filtered employee works on `project`.
pub fn lookup<'a>(project: &str, employees: &[&'a Employee], data: &Dataset) -> Option<ProjectDetail<'a>> {
    let team: Vec<&'a Employee> = employees.iter().copied().filter(|e| e.project == project).collect();
    let mean_progress = aggregate::mean(&team, |e| e.progress.as_f64())?;

    let mut groups: Vec<FacilityGroup<'a>> = Vec::new();
    for employee in team.iter().copied() {
        let member = team_member(employee, data);
        match groups.iter_mut().find(|g| g.facility == employee.facility) {
            Some(group) => group.members.push(member),
            None => groups.push(FacilityGroup {
                facility: employee.facility.clone(),
                manager: directory::manager_for(&employee.facility),
                members: vec![member],
            }),
        }
    }

    Some(ProjectDetail {
        project: project.to_string(),
        team_size: team.len(),
        mean_progress,
        facility_count: aggregate::distinct_count(&team, |e| e.facility.as_str()),
        department_count: aggregate::distinct_count(&team, |e| e.department.as_str()),
        progress_distribution: progress_distribution(&team),
        departments: aggregate::count_by(&team, |e| e.department.as_str()),
        groups,
    })
}
