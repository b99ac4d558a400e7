use crate::AsanaClient;
use crate::error::asana_client::AsanaClientError;

use log::warn;
use models::{NewProjectBuilder, Project, Task};
use serde_json::Value;

impl AsanaClient {
    /// `GET workspaces/{ws}/projects`, or `GET projects` when unscoped.
    pub async fn list_projects(
        &self,
        workspace: Option<u64>,
    ) -> Result<Vec<Project>, AsanaClientError> {
        let target = match workspace {
            Some(workspace) => format!("workspaces/{workspace}/projects"),
            None => String::from("projects"),
        };
        self.get_data(&target).await
    }

    pub async fn get_project(&self, project_id: u64) -> Result<Project, AsanaClientError> {
        self.get_data(&format!("projects/{project_id}")).await
    }

    pub async fn get_project_tasks(&self, project_id: u64) -> Result<Vec<Task>, AsanaClientError> {
        self.get_data(&format!("projects/{project_id}/tasks")).await
    }

    /// `POST projects`; an archived project carries `archived=true`.
    pub async fn create_project(
        &self,
        project: NewProjectBuilder,
    ) -> Result<Project, AsanaClientError> {
        let project = project.build()?;
        self.post_data("projects", project.form_fields()).await
    }

    /// Not supported by this client yet.
    ///
    /// # Errors
    /// Always returns [`AsanaClientError::NotImplemented`].
    pub async fn update_project(&self, project_id: u64) -> Result<Value, AsanaClientError> {
        warn!("update_project({project_id}) called but is not implemented");
        Err(AsanaClientError::not_implemented("update_project"))
    }
}
