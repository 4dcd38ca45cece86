use log::debug;

use crate::error::{Error, Result};
use crate::model::{Task, TaskCreate};

use super::TaskRepository;

/// Process-local task store. Not shared across threads or restarts.
#[derive(Debug)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    current_id: i64,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        InMemoryTaskRepository {
            tasks: Vec::new(),
            current_id: 1,
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn get_all(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn create(&mut self, input: TaskCreate) -> Result<Task> {
        let task = Task::from_create(self.current_id, input);
        self.tasks.push(task.clone());
        self.current_id += 1;
        debug!("memory: created task {} '{}'", task.id, task.title);
        Ok(task)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        Ok(self.tasks.iter().find(|t| t.id == id).cloned())
    }

    fn get_by_title(&self, title: &str) -> Result<Option<Task>> {
        Ok(self.tasks.iter().find(|t| t.title == title).cloned())
    }

    fn update(&mut self, task: Task) -> Result<Task> {
        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) else {
            return Err(Error::NotFound(task.id));
        };
        *slot = task.clone();
        debug!("memory: updated task {}", task.id);
        Ok(task)
    }
}
