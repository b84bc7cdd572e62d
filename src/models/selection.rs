//! Session-scoped drill-down selection: one slot for the selected project,
//! one for the selected alert category. Each slot is either absent or set.

use serde::{Deserialize, Serialize};

use crate::models::alert::AlertCategory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub alert: Option<AlertCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// A blank project name is the selector's placeholder and clears the slot.
    SelectProject(String),
    CloseProject,
    SelectAlert(AlertCategory),
    CloseAlert,
}

impl SelectionState {
    /// Consume the current state and return the state after one interaction.
    pub fn apply(self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::SelectProject(project) => {
                let project = project.trim();
                SelectionState {
                    project: (!project.is_empty()).then(|| project.to_string()),
                    ..self
                }
            }
            SelectionAction::CloseProject => SelectionState { project: None, ..self },
            SelectionAction::SelectAlert(category) => SelectionState { alert: Some(category), ..self },
            SelectionAction::CloseAlert => SelectionState { alert: None, ..self },
        }
    }

    /// Number of detail panels this state asks the page to render.
    pub fn panel_count(&self) -> usize {
        usize::from(self.project.is_some()) + usize::from(self.alert.is_some())
    }

    pub fn is_project_selected(&self, project: &str) -> bool {
        self.project.as_deref() == Some(project)
    }
}
