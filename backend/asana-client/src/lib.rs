//! Async client for the Asana REST API (v1.0).
//!
//! ```no_run
//! # async fn run() -> Result<(), asana_client::error::asana_client::AsanaClientError> {
//! use asana_client::AsanaClient;
//!
//! let client = AsanaClient::new("0/abcdef", false)?;
//! let me = client.user_info(None).await?;
//! for workspace in me.workspaces {
//!     let tasks = client.list_tasks(workspace.id, "me").await?;
//!     println!("{}: {} tasks", workspace.name.unwrap_or_default(), tasks.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod credential;
pub mod error;
pub mod logger;
pub mod transport;

mod asana_client;
#[cfg(test)]
mod tests;

pub use asana_client::AsanaClient;
pub use config::ClientConfig;
pub use credential::BasicCredential;
pub use error::asana_client::AsanaClientError;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};

pub const ASANA_HOST: &str = "app.asana.com";
pub const ASANA_API_VERSION: &str = "1.0";
pub const ASANA_API_BASE_URL: &str =
    const_format::concatcp!("https://", ASANA_HOST, "/api/", ASANA_API_VERSION, "/");
