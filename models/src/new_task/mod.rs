pub mod builder;

use crate::{AssigneeStatus, ME};

use chrono::NaiveDate;

/// Validated arguments for `POST tasks`.
///
/// Only obtainable through [`builder::NewTaskBuilder::build`], so every
/// instance has already passed local validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub(crate) name: String,
    pub(crate) workspace: u64,
    pub(crate) assignee: Option<String>,
    pub(crate) assignee_status: Option<AssigneeStatus>,
    pub(crate) completed: bool,
    pub(crate) due_on: Option<NaiveDate>,
    pub(crate) followers: Vec<String>,
    pub(crate) notes: Option<String>,
}

impl NewTask {
    pub fn builder() -> builder::NewTaskBuilder {
        builder::NewTaskBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn workspace(&self) -> u64 {
        self.workspace
    }

    pub fn due_on(&self) -> Option<NaiveDate> {
        self.due_on
    }

    /// Form fields in the order they are sent.
    ///
    /// Followers are encoded as an indexed array (`followers[0]`,
    /// `followers[1]`, ...) since the endpoint takes form data, not JSON.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            (
                String::from("assignee"),
                self.assignee.clone().unwrap_or_else(|| ME.to_string()),
            ),
            (String::from("name"), self.name.clone()),
            (String::from("workspace"), self.workspace.to_string()),
        ];

        if let Some(status) = self.assignee_status {
            fields.push((String::from("assignee_status"), status.to_string()));
        }
        if self.completed {
            fields.push((String::from("completed"), String::from("true")));
        }
        if let Some(due_on) = self.due_on {
            fields.push((String::from("due_on"), due_on.format("%Y-%m-%d").to_string()));
        }
        for (position, person) in self.followers.iter().enumerate() {
            fields.push((format!("followers[{position}]"), person.clone()));
        }
        if let Some(notes) = &self.notes {
            fields.push((String::from("notes"), notes.clone()));
        }

        fields
    }
}
