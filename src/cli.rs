use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "taskrepo", about = "Task tracker with swappable storage")]
pub struct Cli {
    /// Path to the SQLite database [default: ~/.taskrepo/taskrepo.db]
    #[arg(long, env = "TASKREPO_DB", global = true)]
    pub db: Option<String>,

    /// Storage backend; memory lasts for a single invocation
    #[arg(long, env = "TASKREPO_BACKEND", value_enum, default_value_t = Backend::Sqlite, global = true)]
    pub backend: Backend,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Sqlite,
    Memory,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a task
    Add {
        /// Task title (must be unique)
        title: String,
        /// Task description
        #[arg(short, long)]
        desc: Option<String>,
        /// Create the task already completed
        #[arg(long)]
        completed: bool,
    },

    /// List tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one task by id or title
    Show {
        /// Task id
        #[arg(required_unless_present = "title", conflicts_with = "title")]
        id: Option<i64>,
        /// Look the task up by title instead
        #[arg(long)]
        title: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a task as completed
    Done {
        /// Task id
        id: i64,
    },

    /// Run a short create/complete walkthrough against the selected backend
    Demo,
}
