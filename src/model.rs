use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl Task {
    /// Returns display icon: x=completed, .=open
    pub fn icon(&self) -> &'static str {
        if self.completed {
            "x"
        } else {
            "."
        }
    }

    pub fn status_str(&self) -> &'static str {
        if self.completed {
            "completed"
        } else {
            "open"
        }
    }

    /// Build the stored form of `input` under a freshly assigned id.
    pub fn from_create(id: i64, input: TaskCreate) -> Self {
        Task {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
        }
    }
}

/// Input for a new task. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TaskCreate {
    pub fn new(title: impl Into<String>) -> Self {
        TaskCreate {
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
