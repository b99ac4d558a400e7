use crate::AsanaClient;
use crate::error::asana_client::AsanaClientError;

use log::warn;
use models::Workspace;
use serde_json::Value;

impl AsanaClient {
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>, AsanaClientError> {
        self.get_data("workspaces").await
    }

    /// Not supported by this client yet.
    ///
    /// # Errors
    /// Always returns [`AsanaClientError::NotImplemented`].
    pub async fn update_workspace(&self, workspace_id: u64) -> Result<Value, AsanaClientError> {
        warn!("update_workspace({workspace_id}) called but is not implemented");
        Err(AsanaClientError::not_implemented("update_workspace"))
    }
}
