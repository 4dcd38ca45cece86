pub mod db;
pub mod error;
pub mod model;
pub mod output;
pub mod paths;
pub mod repository;
pub mod service;

pub use error::{Error, Result};
pub use model::{Task, TaskCreate};
pub use repository::{InMemoryTaskRepository, SqlTaskRepository, TaskRepository};
pub use service::TaskService;
