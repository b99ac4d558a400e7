use crate::AsanaClient;
use crate::error::asana_client::AsanaClientError;

use models::Story;

impl AsanaClient {
    pub async fn list_stories(&self, task_id: u64) -> Result<Vec<Story>, AsanaClientError> {
        self.get_data(&format!("tasks/{task_id}/stories")).await
    }

    pub async fn get_story(&self, story_id: u64) -> Result<Story, AsanaClientError> {
        self.get_data(&format!("stories/{story_id}")).await
    }

    /// Comment on a task.
    pub async fn add_story(&self, task_id: u64, text: &str) -> Result<Story, AsanaClientError> {
        self.post_data(
            &format!("tasks/{task_id}/stories"),
            vec![(String::from("text"), text.to_string())],
        )
        .await
    }
}
