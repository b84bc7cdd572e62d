//! Alert categories and the detail panels shown for them.

pub mod fixtures;

use serde::{Deserialize, Serialize};

use self::fixtures::{DELAYED_TASKS, EQUIPMENT_ISSUES, Priority, STAFFING_NEEDS, STAFFING_REMEDIES};
use crate::models::contact::{ActionButton, ContactKind, ContactRequest};
use crate::models::directory::{self, Contact, UNSPECIFIED};

/// Delays longer than this are shown as critical.
pub const CRITICAL_DELAY_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Equipment,
    Delays,
    Staffing,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 3] = [AlertCategory::Equipment, AlertCategory::Delays, AlertCategory::Staffing];

    pub fn key(self) -> &'static str {
        match self {
            AlertCategory::Equipment => "equipment",
            AlertCategory::Delays => "delays",
            AlertCategory::Staffing => "staffing",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn button_label(self) -> &'static str {
        match self {
            AlertCategory::Equipment => "Equipment challenges",
            AlertCategory::Delays => "Delays",
            AlertCategory::Staffing => "Staffing shortage",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            AlertCategory::Equipment => "12 equipment shortage reports",
            AlertCategory::Delays => "8 delayed tasks need follow-up",
            AlertCategory::Staffing => "5 departments need staffing",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AlertCategory::Equipment => "Equipment Shortage Details",
            AlertCategory::Delays => "Delayed Tasks Details",
            AlertCategory::Staffing => "Staffing Shortage Details",
        }
    }
}

/// One expandable record in an alert panel, ready to render.
#[derive(Debug, Clone)]
pub struct AlertItem {
    pub heading: String,
    pub critical: bool,
    pub details: Vec<(&'static str, String)>,
    pub contacts: Vec<(&'static str, String)>,
    pub remedies: &'static [&'static str],
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone)]
pub struct AlertPanel {
    pub category: AlertCategory,
    pub title: &'static str,
    pub items: Vec<AlertItem>,
}

fn phone_or_unspecified(contact: &Contact) -> String {
    if contact.has_phone() { contact.phone.to_string() } else { UNSPECIFIED.to_string() }
}

fn manager_contacts(manager: &Contact) -> [(&'static str, String); 2] {
    [
        ("Facility manager", manager.name.to_string()),
        ("Manager phone", phone_or_unspecified(manager)),
    ]
}

impl AlertPanel {
    pub fn for_category(category: AlertCategory) -> Self {
        let items = match category {
            AlertCategory::Equipment => EQUIPMENT_ISSUES
                .iter()
                .map(|issue| {
                    let manager = directory::manager_for(issue.facility);
                    let mut contacts = vec![
                        ("Reported by", issue.reporter.to_string()),
                        ("Phone", issue.phone.to_string()),
                    ];
                    contacts.extend(manager_contacts(&manager));
                    AlertItem {
                        heading: format!("{} - {} ({})", issue.equipment, issue.facility, issue.priority.label()),
                        critical: issue.priority == Priority::Urgent,
                        details: vec![
                            ("Date", issue.date.to_string()),
                            ("Facility", issue.facility.to_string()),
                            ("Department", issue.department.to_string()),
                            ("Equipment needed", issue.equipment.to_string()),
                            ("Priority", issue.priority.label().to_string()),
                        ],
                        contacts,
                        remedies: &[],
                        actions: vec![
                            ActionButton::new("Call reporter", ContactRequest::call(issue.reporter, issue.phone)),
                            ActionButton::new("Call manager", ContactRequest::call(manager.name, manager.phone)),
                            ActionButton::new("Resolved", ContactRequest::about(ContactKind::Resolve, issue.equipment)),
                        ],
                    }
                })
                .collect(),
            AlertCategory::Delays => DELAYED_TASKS
                .iter()
                .map(|task| {
                    let manager = directory::manager_for(task.facility);
                    let mut contacts = vec![
                        ("Responsible", task.owner.to_string()),
                        ("Phone", task.phone.to_string()),
                    ];
                    contacts.extend(manager_contacts(&manager));
                    AlertItem {
                        heading: format!("{} - {} ({} days late)", task.task, task.facility, task.delay_days),
                        critical: task.delay_days > CRITICAL_DELAY_DAYS,
                        details: vec![
                            ("Due date", task.due_date.to_string()),
                            ("Facility", task.facility.to_string()),
                            ("Department", task.department.to_string()),
                            ("Task", task.task.to_string()),
                            ("Delay", format!("{} days", task.delay_days)),
                        ],
                        contacts,
                        remedies: &[],
                        actions: vec![
                            ActionButton::new("Call owner", ContactRequest::call(task.owner, task.phone)),
                            ActionButton::new("Call manager", ContactRequest::call(manager.name, manager.phone)),
                            ActionButton::new("Completed", ContactRequest::about(ContactKind::Complete, task.task)),
                        ],
                    }
                })
                .collect(),
            AlertCategory::Staffing => STAFFING_NEEDS
                .iter()
                .map(|need| {
                    let manager = directory::manager_for(need.facility);
                    AlertItem {
                        heading: format!("{} - {} ({})", need.shortage, need.facility, need.priority.label()),
                        critical: need.priority == Priority::Urgent,
                        details: vec![
                            ("Facility", need.facility.to_string()),
                            ("Department", need.department.to_string()),
                            ("Shortage", need.shortage.to_string()),
                            ("Specialty", need.specialty.to_string()),
                            ("Priority", need.priority.label().to_string()),
                        ],
                        contacts: manager_contacts(&manager).to_vec(),
                        remedies: STAFFING_REMEDIES,
                        actions: vec![
                            ActionButton::new("Call manager", ContactRequest::call(manager.name, manager.phone)),
                            ActionButton::new(
                                "Post job",
                                ContactRequest::about(ContactKind::PostJob, format!("{} in {}", need.shortage, need.department)),
                            ),
                            ActionButton::new("Hired", ContactRequest::about(ContactKind::Hired, need.department)),
                        ],
                    }
                })
                .collect(),
        };
        AlertPanel { category, title: category.title(), items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for c in AlertCategory::ALL {
            assert_eq!(AlertCategory::parse(c.key()), Some(c));
        }
        assert_eq!(AlertCategory::parse("fire"), None);
    }

    #[test]
    fn fixture_counts_per_category() {
        assert_eq!(AlertPanel::for_category(AlertCategory::Equipment).items.len(), 4);
        assert_eq!(AlertPanel::for_category(AlertCategory::Delays).items.len(), 3);
        assert_eq!(AlertPanel::for_category(AlertCategory::Staffing).items.len(), 4);
    }

    #[test]
    fn delays_over_a_week_are_critical() {
        let panel = AlertPanel::for_category(AlertCategory::Delays);
        let critical: Vec<bool> = panel.items.iter().map(|i| i.critical).collect();
        assert_eq!(critical, vec![false, true, true]);
    }

    #[test]
    fn fixture_managers_come_from_directory() {
        let panel = AlertPanel::for_category(AlertCategory::Staffing);
        let first = &panel.items[0];
        assert!(first.contacts.iter().any(|(_, v)| v == "Dr. Layla Najjar"));
        assert_eq!(first.remedies.len(), 3);
    }
}
