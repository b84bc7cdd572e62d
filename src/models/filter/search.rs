use crate::models::dataset::Employee;

/// Employee directory search over the already-filtered employees.
/// `None` for project or status is the "all" placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySearch {
    pub term: String,
    pub project: Option<String>,
    pub status: Option<String>,
}

impl DirectorySearch {
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.project.is_none() && self.status.is_none()
    }

    /// Case-insensitive substring match on name or identifier, plus exact
    /// project and status when given.
    pub fn matches(&self, employee: &Employee) -> bool {
        let term = self.term.trim().to_lowercase();
        let term_ok = term.is_empty()
            || employee.name.to_lowercase().contains(&term)
            || employee.id.to_lowercase().contains(&term);
        term_ok
            && self.project.as_deref().is_none_or(|p| employee.project == p)
            && self.status.as_deref().is_none_or(|s| employee.project_status == s)
    }

    pub fn apply<'a>(&self, employees: &[&'a Employee]) -> Vec<&'a Employee> {
        employees.iter().copied().filter(|e| self.matches(e)).collect()
    }
}
