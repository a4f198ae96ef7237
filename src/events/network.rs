use crate::state::State;
use crate::todos::{TaskId, Todos};
use anyhow::{Context, Result};
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Refresh,
    CreateTask {
        title: String,
    },
    UpdateTask {
        id: TaskId,
        title: String,
        completed: bool,
    },
    SetCompleted {
        id: TaskId,
        completed: bool,
    },
    DeleteTask {
        id: TaskId,
    },
}

/// Specify struct for managing state with network events.
///
/// Every mutating event performs one remote call and, once the server has
/// accepted it, re-fetches the whole collection. The state lock is never
/// held across a remote call.
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    todos: &'a Todos,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, todos: &'a Todos) -> Self {
        Handler { state, todos }
    }

    /// Handle a network event and log any failure with its cause chain.
    /// Failures stay on the network thread.
    ///
    pub async fn process(&mut self, event: Event) {
        if let Err(e) = self.handle(event).await {
            error!("{}", e);
            for cause in e.chain().skip(1) {
                error!("  Caused by: {}", cause);
            }
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Refresh => self.refresh().await?,
            Event::CreateTask { title } => self.create(title).await?,
            Event::UpdateTask {
                id,
                title,
                completed,
            } => self.update(id, title, completed).await?,
            Event::SetCompleted { id, completed } => self.set_completed(id, completed).await?,
            Event::DeleteTask { id } => self.remove(id).await?,
        }
        Ok(())
    }

    /// Replace the cached collection with the server's list.
    ///
    async fn refresh(&mut self) -> Result<()> {
        let tasks = self
            .todos
            .list()
            .await
            .context("Failed to fetch tasks")?;
        info!("Received {} tasks.", tasks.len());
        self.state.lock().await.set_tasks(tasks);
        Ok(())
    }

    /// Create a task, then clear the draft and resynchronize.
    ///
    async fn create(&mut self, title: String) -> Result<()> {
        info!("Creating task '{}'...", title);
        let task = self
            .todos
            .create(&title)
            .await
            .with_context(|| format!("Failed to add task '{}'", title))?;
        info!("Task '{}' created with id {}.", task.title, task.id);
        self.state.lock().await.clear_draft();
        self.refresh().await
    }

    /// Replace a task's fields, then leave edit mode and resynchronize.
    ///
    async fn update(&mut self, id: TaskId, title: String, completed: bool) -> Result<()> {
        info!("Updating task {}...", id);
        self.todos
            .replace(id, &title, completed)
            .await
            .with_context(|| format!("Failed to update task {}", id))?;
        info!("Task {} updated.", id);
        self.state.lock().await.finish_edit(id);
        self.refresh().await
    }

    /// Patch a task's completion flag, then resynchronize.
    ///
    async fn set_completed(&mut self, id: TaskId, completed: bool) -> Result<()> {
        info!(
            "Marking task {} as {}...",
            id,
            if completed { "completed" } else { "pending" }
        );
        self.todos
            .set_completed(id, completed)
            .await
            .with_context(|| format!("Failed to toggle completion of task {}", id))?;
        self.refresh().await
    }

    /// Delete a task, then resynchronize.
    ///
    async fn remove(&mut self, id: TaskId) -> Result<()> {
        info!("Deleting task {}...", id);
        self.todos
            .delete(id)
            .await
            .with_context(|| format!("Failed to delete task {}", id))?;
        info!("Task {} deleted.", id);
        self.refresh().await
    }
}
