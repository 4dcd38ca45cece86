use log::{info, warn};

use crate::error::{Error, Result};
use crate::model::{Task, TaskCreate};
use crate::repository::TaskRepository;

/// Business rules over a single repository: titles are unique at creation
/// time, and tasks only move from open to completed.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        TaskService { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn get_tasks(&self) -> Result<Vec<Task>> {
        self.repo.get_all()
    }

    pub fn get_task(&self, id: i64) -> Result<Option<Task>> {
        self.repo.get_by_id(id)
    }

    pub fn find_by_title(&self, title: &str) -> Result<Option<Task>> {
        self.repo.get_by_title(title)
    }

    pub fn create_task(&mut self, input: TaskCreate) -> Result<Task> {
        if self.repo.get_by_title(&input.title)?.is_some() {
            warn!("rejecting duplicate title '{}'", input.title);
            return Err(Error::DuplicateTitle(input.title));
        }
        let task = self.repo.create(input)?;
        info!("created task {} '{}'", task.id, task.title);
        Ok(task)
    }

    /// Mark the task completed. Completing an already completed task is a
    /// no-op that still returns the task.
    pub fn complete_task(&mut self, id: i64) -> Result<Task> {
        let Some(task) = self.repo.get_by_id(id)? else {
            warn!("cannot complete task {id}: not found");
            return Err(Error::NotFound(id));
        };
        let updated = self.repo.update(Task {
            completed: true,
            ..task
        })?;
        info!("completed task {}", updated.id);
        Ok(updated)
    }
}
