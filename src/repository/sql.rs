use log::debug;
use rusqlite::{Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::model::{Task, TaskCreate};

use super::TaskRepository;

const TASK_COLUMNS: &str = "id, title, description, completed";

const INSERT_TASK: &str = "
INSERT INTO tasks (title, description, completed)
VALUES (?1, ?2, ?3)
";

const REPLACE_TASK: &str = "
UPDATE tasks
SET title = ?1, description = ?2, completed = ?3
WHERE id = ?4
";

fn read_task_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get::<_, i64>(3)? != 0,
    })
}

/// Task store over a caller-owned SQLite connection.
///
/// The connection is borrowed for the repository's lifetime and never closed
/// here. Each mutating call is its own transaction, committed before the row
/// is read back.
pub struct SqlTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        SqlTaskRepository { conn }
    }

    fn refresh(&self, id: i64) -> Result<Task> {
        let task = self.conn.query_row(
            &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
            [id],
            read_task_row,
        )?;
        Ok(task)
    }
}

impl TaskRepository for SqlTaskRepository<'_> {
    fn get_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id"))?;
        let rows = stmt.query_map([], read_task_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Into::into)
    }

    fn create(&mut self, input: TaskCreate) -> Result<Task> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            INSERT_TASK,
            rusqlite::params![input.title, input.description, input.completed as i64],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        debug!("sql: created task {id} '{}'", input.title);
        self.refresh(id)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                [id],
                read_task_row,
            )
            .optional()?;
        Ok(task)
    }

    fn get_by_title(&self, title: &str) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE title = ?1 ORDER BY id LIMIT 1"),
                [title],
                read_task_row,
            )
            .optional()?;
        Ok(task)
    }

    fn update(&mut self, task: Task) -> Result<Task> {
        let tx = self.conn.unchecked_transaction()?;
        let changed = tx.execute(
            REPLACE_TASK,
            rusqlite::params![task.title, task.description, task.completed as i64, task.id],
        )?;
        if changed == 0 {
            // Dropping the transaction rolls it back.
            return Err(Error::NotFound(task.id));
        }
        tx.commit()?;
        debug!("sql: updated task {}", task.id);
        self.refresh(task.id)
    }
}
