use crate::AsanaClient;
use crate::asana_client::{encode_path_segment, encode_query_value};
use crate::error::asana_client::AsanaClientError;

use models::{ME, User};

impl AsanaClient {
    /// `GET users/{id}`; `None` means the authenticated user (`me`).
    pub async fn user_info(&self, user_id: Option<&str>) -> Result<User, AsanaClientError> {
        self.get_data(&user_info_path(user_id)).await
    }

    /// `GET workspaces/{ws}/users`, or `GET users` across all workspaces.
    ///
    /// `filters` select response fields via `opt_fields`; each entry is
    /// trimmed and lower-cased. They only apply to the unscoped listing.
    pub async fn list_users(
        &self,
        workspace: Option<u64>,
        filters: &[&str],
    ) -> Result<Vec<User>, AsanaClientError> {
        self.get_data(&list_users_path(workspace, filters)).await
    }
}

pub(crate) fn user_info_path(user_id: Option<&str>) -> String {
    format!("users/{}", encode_path_segment(user_id.unwrap_or(ME)))
}

pub(crate) fn list_users_path(workspace: Option<u64>, filters: &[&str]) -> String {
    if let Some(workspace) = workspace {
        return format!("workspaces/{workspace}/users");
    }

    let fields: Vec<String> = filters
        .iter()
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty())
        .map(|f| encode_query_value(&f))
        .collect();

    if fields.is_empty() {
        String::from("users")
    } else {
        format!("users?opt_fields={}", fields.join(","))
    }
}
