use crate::AsanaClient;
use crate::asana_client::encode_query_value;
use crate::error::asana_client::AsanaClientError;

use log::warn;
use models::{NewTaskBuilder, Task};
use serde_json::Value;

impl AsanaClient {
    /// `GET tasks?workspace={ws}&assignee={who}`.
    pub async fn list_tasks(
        &self,
        workspace: u64,
        assignee: &str,
    ) -> Result<Vec<Task>, AsanaClientError> {
        self.get_data(&list_tasks_path(workspace, assignee)).await
    }

    pub async fn get_task(&self, task_id: u64) -> Result<Task, AsanaClientError> {
        self.get_data(&format!("tasks/{task_id}")).await
    }

    /// `POST tasks`.
    ///
    /// The builder is validated before anything is sent, so a bad due date
    /// or missing name fails with [`AsanaClientError::Validation`] without
    /// touching the network.
    pub async fn create_task(&self, task: NewTaskBuilder) -> Result<Task, AsanaClientError> {
        let task = task.build()?;
        self.post_data("tasks", task.form_fields()).await
    }

    /// Not supported by this client yet.
    ///
    /// # Errors
    /// Always returns [`AsanaClientError::NotImplemented`].
    pub async fn update_task(&self, task_id: u64) -> Result<Value, AsanaClientError> {
        warn!("update_task({task_id}) called but is not implemented");
        Err(AsanaClientError::not_implemented("update_task"))
    }

    /// `POST tasks/{task}/addProject`.
    pub async fn add_project_to_task(
        &self,
        task_id: u64,
        project_id: u64,
    ) -> Result<Value, AsanaClientError> {
        self.post_data(
            &format!("tasks/{task_id}/addProject"),
            vec![(String::from("project"), project_id.to_string())],
        )
        .await
    }

    /// `POST tasks/{task}/removeProject`.
    pub async fn remove_project_from_task(
        &self,
        task_id: u64,
        project_id: u64,
    ) -> Result<Value, AsanaClientError> {
        self.post_data(
            &format!("tasks/{task_id}/removeProject"),
            vec![(String::from("project"), project_id.to_string())],
        )
        .await
    }

    /// `POST tasks/{task}/addTag`.
    pub async fn add_tag_to_task(&self, task_id: u64, tag_id: u64) -> Result<Value, AsanaClientError> {
        self.post_data(
            &format!("tasks/{task_id}/addTag"),
            vec![(String::from("tag"), tag_id.to_string())],
        )
        .await
    }
}

pub(crate) fn list_tasks_path(workspace: u64, assignee: &str) -> String {
    format!(
        "tasks?workspace={workspace}&assignee={}",
        encode_query_value(assignee)
    )
}
