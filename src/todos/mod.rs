//! Remote todo API.
//!
//! This module wraps the five REST calls of the `todos` resource:
//! list, create, replace, completion patch and delete.

mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;
use reqwest::Method;

/// Responsible for asynchronous interaction with the todo API including
/// transformation of response data into explicitly-defined types.
///
pub struct Todos {
    client: Client,
}

impl Todos {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Todos, ApiError> {
        debug!("Initializing todo API client for {}...", base_url);
        Ok(Todos {
            client: Client::new(base_url)?,
        })
    }

    /// Returns every task, in the order the server lists them.
    ///
    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        debug!("Requesting task list...");
        let tasks: Vec<Task> = self.client.get_all().await?;
        debug!("Retrieved {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Create a new incomplete task with the given title.
    ///
    pub async fn create(&self, title: &str) -> Result<Task, ApiError> {
        debug!("Creating task '{}'...", title);
        self.client
            .send(
                Method::POST,
                None,
                &TaskFields {
                    title,
                    completed: false,
                },
            )
            .await
    }

    /// Replace the mutable fields of a task.
    ///
    pub async fn replace(&self, id: TaskId, title: &str, completed: bool) -> Result<Task, ApiError> {
        debug!("Replacing task {}...", id);
        self.client
            .send(Method::PUT, Some(id), &TaskFields { title, completed })
            .await
    }

    /// Update only the completion flag of a task.
    ///
    pub async fn set_completed(&self, id: TaskId, completed: bool) -> Result<Task, ApiError> {
        debug!("Setting completion of task {} to {}...", id, completed);
        self.client
            .send(Method::PATCH, Some(id), &TaskCompletion { completed })
            .await
    }

    /// Delete a task.
    ///
    pub async fn delete(&self, id: TaskId) -> Result<(), ApiError> {
        debug!("Deleting task {}...", id);
        self.client.delete(id).await
    }
}
