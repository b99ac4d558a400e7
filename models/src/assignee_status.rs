use crate::ModelError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where a task sits in its assignee's "My Tasks" list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssigneeStatus {
    Inbox,
    Later,
    Today,
    Upcoming,
}

impl AssigneeStatus {
    pub const ALL: [AssigneeStatus; 4] = [
        AssigneeStatus::Inbox,
        AssigneeStatus::Later,
        AssigneeStatus::Today,
        AssigneeStatus::Upcoming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssigneeStatus::Inbox => "inbox",
            AssigneeStatus::Later => "later",
            AssigneeStatus::Today => "today",
            AssigneeStatus::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for AssigneeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssigneeStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_lowercase();
        AssigneeStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| {
                ModelError::validation(format!(
                    "Invalid assignee_status '{value}' (expected one of inbox, later, today, upcoming)"
                ))
            })
    }
}
