//! Domain models for the Asana API.
//!
//! Pure data structures: the shapes the remote API returns inside its `data`
//! envelope, plus validated argument sets for the create endpoints. Models
//! hold no HTTP logic.
//!
//! Response shapes only name the fields this workspace reads. Everything
//! else the API sends lands in each type's `extra` map, so new server-side
//! fields never break decoding.

pub mod assignee_status;
pub mod error;
pub mod new_project;
pub mod new_task;
pub mod resources;


pub use assignee_status::AssigneeStatus;
pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use new_project::{NewProject, builder::NewProjectBuilder};
pub use new_task::{NewTask, builder::NewTaskBuilder};
pub use resources::{Project, ResourceRef, Story, Tag, Task, User, Workspace};

/// Alias the API accepts in place of the authenticated user's id.
pub const ME: &str = "me";
