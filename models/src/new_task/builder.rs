use crate::error::model_error::ModelError;
use crate::new_task::NewTask;
use crate::{AssigneeStatus, ErrorLocation};

use std::panic::Location;

use chrono::NaiveDate;

const DUE_ON_FORMAT: &str = "%Y-%m-%d";

/// Builder for creating validated [`NewTask`] instances.
///
/// The due date is kept as the caller's raw string until `build()`, so a
/// bad date is reported as a validation error before any request is made.
#[derive(Debug, Default, Clone)]
pub struct NewTaskBuilder {
    name: Option<String>,
    workspace: Option<u64>,
    assignee: Option<String>,
    assignee_status: Option<AssigneeStatus>,
    completed: bool,
    due_on: Option<String>,
    followers: Vec<String>,
    notes: Option<String>,
}

impl NewTaskBuilder {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_workspace(mut self, workspace: u64) -> Self {
        self.workspace = Some(workspace);
        self
    }

    /// User id, email, or `me`. Defaults to `me` when unset.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_assignee_status(mut self, status: AssigneeStatus) -> Self {
        self.assignee_status = Some(status);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Due date as `YYYY-MM-DD`.
    pub fn with_due_on(mut self, due_on: impl Into<String>) -> Self {
        self.due_on = Some(due_on.into());
        self
    }

    pub fn with_follower(mut self, person: impl Into<String>) -> Self {
        self.followers.push(person.into());
        self
    }

    pub fn with_followers<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.followers.extend(people.into_iter().map(Into::into));
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Build the NewTask with validation.
    #[track_caller]
    pub fn build(self) -> Result<NewTask, ModelError> {
        let name = self.name.ok_or_else(|| ModelError::Validation {
            message: String::from("Task name is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if name.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Task name cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let workspace = self.workspace.ok_or_else(|| ModelError::Validation {
            message: String::from("Workspace is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if workspace == 0 {
            return Err(ModelError::Validation {
                message: String::from("Workspace must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let due_on = match self.due_on {
            Some(raw) => Some(NaiveDate::parse_from_str(raw.trim(), DUE_ON_FORMAT).map_err(
                |e| ModelError::Validation {
                    message: format!("Bad task due date: {raw} ({e})"),
                    location: ErrorLocation::from(Location::caller()),
                },
            )?),
            None => None,
        };

        if self.followers.iter().any(|person| person.trim().is_empty()) {
            return Err(ModelError::Validation {
                message: String::from("Follower identifiers cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(NewTask {
            name,
            workspace,
            assignee: self.assignee.filter(|a| !a.trim().is_empty()),
            assignee_status: self.assignee_status,
            completed: self.completed,
            due_on,
            followers: self.followers,
            notes: self.notes.filter(|n| !n.is_empty()),
        })
    }
}
