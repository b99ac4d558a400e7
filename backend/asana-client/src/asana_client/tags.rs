use crate::AsanaClient;
use crate::error::asana_client::AsanaClientError;

use models::{Tag, Task};

impl AsanaClient {
    pub async fn get_tags(&self, workspace: u64) -> Result<Vec<Tag>, AsanaClientError> {
        self.get_data(&format!("workspaces/{workspace}/tags")).await
    }

    pub async fn get_tag_tasks(&self, tag_id: u64) -> Result<Vec<Task>, AsanaClientError> {
        self.get_data(&format!("tags/{tag_id}/tasks")).await
    }
}
