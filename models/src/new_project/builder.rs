use crate::ModelError;
use crate::new_project::NewProject;

/// Builder for [`NewProject`]. Notes default to an empty string.
#[derive(Debug, Default, Clone)]
pub struct NewProjectBuilder {
    name: Option<String>,
    notes: String,
    workspace: Option<u64>,
    archived: bool,
}

impl NewProjectBuilder {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_workspace(mut self, workspace: u64) -> Self {
        self.workspace = Some(workspace);
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    #[track_caller]
    pub fn build(self) -> Result<NewProject, ModelError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) => return Err(ModelError::validation("Project name cannot be empty")),
            None => return Err(ModelError::validation("Project name is required")),
        };

        let workspace = match self.workspace {
            Some(0) => return Err(ModelError::validation("Workspace must be non-zero")),
            Some(workspace) => workspace,
            None => return Err(ModelError::validation("Workspace is required")),
        };

        Ok(NewProject {
            name,
            notes: self.notes,
            workspace,
            archived: self.archived,
        })
    }
}
