//! Storage-agnostic access to tasks.
//!
//! [`TaskRepository`] is implemented by [`InMemoryTaskRepository`] (a `Vec`
//! for tests and demos) and [`SqlTaskRepository`] (a SQLite table reached
//! through a borrowed connection). The service picks one at construction.

mod memory;
mod sql;

pub use memory::InMemoryTaskRepository;
pub use sql::SqlTaskRepository;

use crate::error::Result;
use crate::model::{Task, TaskCreate};

pub trait TaskRepository {
    /// Every stored task. In-memory keeps insertion order; SQL orders by id.
    fn get_all(&self) -> Result<Vec<Task>>;

    /// Store `input` under a newly allocated id. No uniqueness checks.
    fn create(&mut self, input: TaskCreate) -> Result<Task>;

    fn get_by_id(&self, id: i64) -> Result<Option<Task>>;

    /// First task with exactly this title.
    fn get_by_title(&self, title: &str) -> Result<Option<Task>>;

    /// Overwrite title, description and completed of the task with `task.id`.
    ///
    /// Fails with [`Error::NotFound`](crate::error::Error::NotFound) when no
    /// such task exists; nothing is stored in that case.
    fn update(&mut self, task: Task) -> Result<Task>;
}

impl<R: TaskRepository + ?Sized> TaskRepository for Box<R> {
    fn get_all(&self) -> Result<Vec<Task>> {
        (**self).get_all()
    }

    fn create(&mut self, input: TaskCreate) -> Result<Task> {
        (**self).create(input)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        (**self).get_by_id(id)
    }

    fn get_by_title(&self, title: &str) -> Result<Option<Task>> {
        (**self).get_by_title(title)
    }

    fn update(&mut self, task: Task) -> Result<Task> {
        (**self).update(task)
    }
}
