mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use rusqlite::Connection;

use cli::{Backend, Cli, Command};
use taskrepo::{db, output, paths};
use taskrepo::{InMemoryTaskRepository, SqlTaskRepository, TaskCreate, TaskRepository, TaskService};

fn open_db(db_path: &str) -> Result<Connection> {
    paths::ensure_db_dir(db_path)?;
    let conn = db::open(db_path).with_context(|| format!("failed to open {db_path}"))?;
    db::init(&conn)?;
    Ok(conn)
}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Keeps the connection alive for as long as the repository borrows it.
    let conn;
    let repo: Box<dyn TaskRepository + '_> = match cli.backend {
        Backend::Sqlite => {
            let db_path = cli.db.clone().unwrap_or_else(paths::db_path);
            debug!("using sqlite backend at {db_path}");
            conn = open_db(&db_path)?;
            Box::new(SqlTaskRepository::new(&conn))
        }
        Backend::Memory => {
            debug!("using in-memory backend");
            Box::new(InMemoryTaskRepository::new())
        }
    };
    let mut service = TaskService::new(repo);

    match cli.command {
        Command::Add {
            title,
            desc,
            completed,
        } => {
            let task = service.create_task(TaskCreate {
                title,
                description: desc,
                completed,
            })?;
            println!("{}", task.id);
            eprintln!("Added task {} '{}'", task.id, task.title);
        }

        Command::List { json } => {
            let tasks = service.get_tasks()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print!("{}", output::format_task_list(&tasks));
            }
        }

        Command::Show { id, title, json } => {
            let task = match (id, title.as_deref()) {
                (Some(id), _) => service
                    .get_task(id)?
                    .with_context(|| format!("task {id} not found"))?,
                (None, Some(title)) => service
                    .find_by_title(title)?
                    .with_context(|| format!("task '{title}' not found"))?,
                (None, None) => anyhow::bail!("either an id or --title is required"),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else {
                print!("{}", output::format_task_detail(&task));
            }
        }

        Command::Done { id } => {
            let task = service.complete_task(id)?;
            eprintln!("Marked {} '{}' as completed", task.id, task.title);
        }

        Command::Demo => run_demo(&mut service)?,
    }

    Ok(())
}

fn run_demo<R: TaskRepository>(service: &mut TaskService<R>) -> Result<()> {
    let task = service.create_task(TaskCreate::new("Buy milk"))?;
    println!("created: {}", serde_json::to_string(&task)?);

    match service.create_task(TaskCreate::new("Buy milk")) {
        Ok(t) => println!("unexpected second create: {}", t.id),
        Err(e) => println!("rejected: {e}"),
    }

    let done = service.complete_task(task.id)?;
    println!("completed: {}", serde_json::to_string(&done)?);

    let missing = service.get_tasks()?.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    match service.complete_task(missing) {
        Ok(t) => println!("unexpected completion: {}", t.id),
        Err(e) => println!("rejected: {e}"),
    }

    print!("{}", output::format_task_list(&service.get_tasks()?));
    Ok(())
}
